// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Configuration lives in `covgate.toml`. Every field is optional; a missing
//! file yields the defaults in [`defaults`].

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::runner::CommandSpec;

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "covgate.toml";

/// Errors loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {0} (expected {expected})", expected = defaults::VERSION)]
    Version(u32),

    #[error("invalid minimum coverage {0}: must be between 0 and 100")]
    Threshold(f64),
}

/// Full covgate configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version, must be 1.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    #[serde(default)]
    pub gate: GateConfig,

    #[serde(default)]
    pub command: CommandConfig,

    #[serde(default)]
    pub html: HtmlConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            gate: GateConfig::default(),
            command: CommandConfig::default(),
            html: HtmlConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::VERSION
    }

    /// Check values serde cannot express constraints for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != defaults::VERSION {
            return Err(ConfigError::Version(self.version));
        }
        let min = self.gate.min;
        if !min.is_finite() || !(0.0..=100.0).contains(&min) {
            return Err(ConfigError::Threshold(min));
        }
        Ok(())
    }
}

/// When to regenerate the HTML report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum HtmlPolicy {
    Never,
    /// Only after a run below the threshold.
    #[default]
    OnFailure,
    /// After every run that produced a percentage.
    Always,
}

/// Where the coverage percentage is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    /// Scrape the `TOTAL` line of the terminal report.
    #[default]
    Term,
    /// Read coverage.py's JSON report, falling back to the terminal report.
    Json,
}

/// Gate behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Minimum acceptable coverage percentage.
    pub min: f64,

    /// Abort with the test run's exit status when it fails.
    pub check_exit: bool,

    pub html: HtmlPolicy,

    /// Open the HTML report in the default viewer after a failing run.
    pub open_browser: bool,

    /// Echo the test run's output.
    pub echo: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min: defaults::gate::MIN,
            check_exit: true,
            html: HtmlPolicy::default(),
            open_browser: true,
            echo: true,
        }
    }
}

/// Test command configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    /// Interpreter for the default pytest and coverage commands.
    pub python: String,

    /// Source roots, each passed as `--cov=<source>`.
    pub sources: Vec<String>,

    pub report: ReportSource,

    /// JSON report location, relative to the working directory.
    pub json_path: PathBuf,

    /// Replaces the default test command when set.
    pub program: Option<String>,

    /// Arguments for `program`.
    pub args: Option<Vec<String>>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            python: defaults::command::PYTHON.to_string(),
            sources: defaults::command::sources(),
            report: ReportSource::default(),
            json_path: PathBuf::from(defaults::command::JSON_PATH),
            program: None,
            args: None,
        }
    }
}

impl CommandConfig {
    /// Build the test command line.
    ///
    /// The default is `<python> -m pytest --cov=<source>... --cov-report=term`,
    /// plus `--cov-report=json:<json_path>` for the JSON source. An explicit
    /// `program` is used as given.
    pub fn test_command(&self) -> CommandSpec {
        if let Some(program) = &self.program {
            return CommandSpec::new(program.as_str(), self.args.clone().unwrap_or_default());
        }

        let mut args = vec!["-m".to_string(), "pytest".to_string()];
        args.extend(self.sources.iter().map(|s| format!("--cov={s}")));
        args.push("--cov-report=term".to_string());
        if self.report == ReportSource::Json {
            args.push(format!("--cov-report=json:{}", self.json_path.display()));
        }
        CommandSpec::new(self.python.as_str(), args)
    }
}

/// HTML report configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Replaces `<python> -m coverage html` when set.
    pub program: Option<String>,

    /// Arguments for `program`.
    pub args: Option<Vec<String>>,

    /// Generated entry page, relative to the working directory.
    pub path: PathBuf,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: None,
            path: PathBuf::from(defaults::html::PATH),
        }
    }
}

/// Parse and validate config content. `path` is only used in errors.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    parse(&content, path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
