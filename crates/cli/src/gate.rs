// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The coverage gate.
//!
//! Runs the test command once, optionally aborts on a failed run, extracts
//! the aggregate percentage and compares it against the threshold. Failing
//! runs can regenerate and open the HTML report.

use std::io::{self, Write};
use std::path::Path;

use crate::Error;
use crate::error::chain;
use crate::config::{Config, HtmlPolicy, ReportSource};
use crate::report;
use crate::runner::{CommandOutput, CommandRunner, Opener};
use crate::summary::{self, SummaryError, format_percent};

/// Terminal result of one gate invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Coverage met the threshold.
    Pass { percent: f64 },
    /// Coverage fell below the threshold.
    Fail { percent: f64, report_opened: bool },
    /// No usable percentage in the tool's output.
    Indeterminate,
    /// The test run itself failed; carries its exit status.
    Aborted { code: i32 },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Pass { .. } => 0,
            Outcome::Fail { .. } | Outcome::Indeterminate => 1,
            Outcome::Aborted { code } => *code,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Outcome::Pass { percent } | Outcome::Fail { percent, .. } => Some(*percent),
            Outcome::Indeterminate | Outcome::Aborted { .. } => None,
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail { .. })
    }

    /// Stable status name used in JSON output.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Pass { .. } => "pass",
            Outcome::Fail { .. } => "fail",
            Outcome::Indeterminate => "indeterminate",
            Outcome::Aborted { .. } => "aborted",
        }
    }

    /// User-facing result line. Aborted runs print nothing of their own.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Pass { percent } => Some(format!(
                "Coverage {}% meets requirement.",
                format_percent(*percent)
            )),
            Outcome::Fail {
                percent,
                report_opened,
            } => {
                let mut msg = format!("Coverage {}% below required.", format_percent(*percent));
                if *report_opened {
                    msg.push_str(" Opening HTML report...");
                }
                Some(msg)
            }
            Outcome::Indeterminate => Some("Could not determine test coverage.".to_string()),
            Outcome::Aborted { .. } => None,
        }
    }
}

/// Compare a percentage against the threshold.
pub fn evaluate(percent: f64, threshold: f64) -> Outcome {
    if percent < threshold {
        Outcome::Fail {
            percent,
            report_opened: false,
        }
    } else {
        Outcome::Pass { percent }
    }
}

/// One configured gate run.
pub struct Gate<'a> {
    config: &'a Config,
    root: &'a Path,
    runner: &'a dyn CommandRunner,
    opener: &'a dyn Opener,
}

impl<'a> Gate<'a> {
    pub fn new(
        config: &'a Config,
        root: &'a Path,
        runner: &'a dyn CommandRunner,
        opener: &'a dyn Opener,
    ) -> Self {
        Self {
            config,
            root,
            runner,
            opener,
        }
    }

    /// Run the test command and decide the outcome.
    pub fn run(&self) -> Result<Outcome, Error> {
        let gate = &self.config.gate;
        let command = &self.config.command;

        if command.report == ReportSource::Json {
            self.remove_stale_json();
        }

        let spec = command.test_command();
        let output = self.runner.run(&spec, self.root)?;

        if gate.echo {
            echo(&output).map_err(Error::Echo)?;
        }

        if gate.check_exit && !output.success() {
            let code = output.code.unwrap_or(1);
            tracing::warn!("`{}` failed with exit status {}", spec, code);
            return Ok(Outcome::Aborted { code });
        }

        let percent = match self.extract(&output) {
            Ok(percent) => percent,
            Err(e) => {
                tracing::warn!("{}", e);
                return Ok(Outcome::Indeterminate);
            }
        };
        tracing::debug!("coverage {}% against minimum {}%", percent, gate.min);

        let mut outcome = evaluate(percent, gate.min);
        let wants_html = match gate.html {
            HtmlPolicy::Never => false,
            HtmlPolicy::OnFailure => outcome.is_fail(),
            HtmlPolicy::Always => true,
        };

        if wants_html && self.generate_html() && outcome.is_fail() && gate.open_browser {
            outcome = Outcome::Fail {
                percent,
                report_opened: self.open_report(),
            };
        }

        Ok(outcome)
    }

    fn extract(&self, output: &CommandOutput) -> Result<f64, SummaryError> {
        let command = &self.config.command;
        if command.report == ReportSource::Json {
            let path = self.root.join(&command.json_path);
            match std::fs::read_to_string(&path) {
                Ok(content) => return summary::parse_json_report(&content),
                Err(e) => tracing::warn!(
                    "cannot read {}: {}; falling back to terminal summary",
                    path.display(),
                    e
                ),
            }
        }
        summary::parse_term_summary(&output.stdout)
    }

    fn remove_stale_json(&self) {
        let path = self.root.join(&self.config.command.json_path);
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!("removed stale {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove {}: {}", path.display(), e),
        }
    }

    /// Returns whether the report was generated.
    fn generate_html(&self) -> bool {
        let spec = report::html_command(&self.config.html, &self.config.command.python);
        match self.runner.run(&spec, self.root) {
            Ok(output) if output.success() => true,
            Ok(output) => {
                tracing::warn!(
                    "`{}` exited with {:?}: {}",
                    spec,
                    output.code,
                    output.stderr.trim()
                );
                false
            }
            Err(e) => {
                tracing::warn!("HTML report not generated: {}", chain(&e));
                false
            }
        }
    }

    /// Returns whether a viewer was launched.
    fn open_report(&self) -> bool {
        let path = report::artifact_path(self.root, &self.config.html);
        let url = report::file_url(&path);
        match self.opener.open(&url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to open {}: {}", url, chain(&e));
                false
            }
        }
    }
}

fn echo(output: &CommandOutput) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    let mut stderr = io::stderr().lock();
    stderr.write_all(output.stderr.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
