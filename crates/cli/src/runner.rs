// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution.
//!
//! The gate talks to the outside world through two seams: [`CommandRunner`]
//! for blocking tool invocations (test run, HTML generation) and [`Opener`]
//! for fire-and-forget viewer launches.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::Error;

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a command to completion and captures its output.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<CommandOutput, Error>;
}

/// Runs commands with [`std::process::Command`].
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<CommandOutput, Error> {
        tracing::debug!("running `{}` in {}", spec, cwd.display());

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| Error::Spawn {
                program: spec.program.clone(),
                source,
            })?;

        tracing::debug!("`{}` exited with {}", spec.program, output.status);

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Launches a viewer for a URL without waiting for it.
pub trait Opener {
    fn open(&self, url: &str) -> Result<(), Error>;
}

/// Opens URLs with `$BROWSER` or the platform's default launcher.
pub struct SystemOpener;

impl SystemOpener {
    /// Resolve the launcher command line for `url`.
    ///
    /// A non-empty `browser` (the value of `$BROWSER`) is split on
    /// whitespace into program and leading arguments.
    pub fn launcher(browser: Option<&str>, url: &str) -> CommandSpec {
        if let Some(browser) = browser {
            let mut parts = browser.split_whitespace();
            if let Some(program) = parts.next() {
                return CommandSpec::new(program, parts.chain([url]));
            }
        }
        default_launcher(url)
    }
}

#[cfg(target_os = "macos")]
fn default_launcher(url: &str) -> CommandSpec {
    CommandSpec::new("open", [url])
}

#[cfg(target_os = "windows")]
fn default_launcher(url: &str) -> CommandSpec {
    CommandSpec::new("cmd", ["/C", "start", "", url])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_launcher(url: &str) -> CommandSpec {
    CommandSpec::new("xdg-open", [url])
}

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), Error> {
        let browser = std::env::var("BROWSER").ok();
        let spec = Self::launcher(browser.as_deref(), url);
        tracing::debug!("opening {} with `{}`", url, spec.program);

        // The child is intentionally not waited on.
        Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: spec.program.clone(),
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
