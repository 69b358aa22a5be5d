// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::{Config, HtmlPolicy};

/// Run the test suite with coverage and fail below a minimum percentage
#[derive(Debug, Parser)]
#[command(name = "covgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "COVGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum coverage percentage (overrides config)
    #[arg(long, env = "COVGATE_MIN", value_name = "PCT")]
    pub min: Option<f64>,

    /// When to regenerate the HTML report
    #[arg(long, value_name = "WHEN")]
    pub html: Option<HtmlPolicy>,

    /// Do not open the HTML report after a failing run
    #[arg(long)]
    pub no_open: bool,

    /// Evaluate coverage even when the test run fails
    #[arg(long)]
    pub no_check_exit: bool,

    /// Do not echo the test run's output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        let gate = &mut config.gate;
        if let Some(min) = self.min {
            gate.min = min;
        }
        if let Some(html) = self.html {
            gate.html = html;
        }
        if self.no_open {
            gate.open_browser = false;
        }
        if self.no_check_exit {
            gate.check_exit = false;
        }
        // JSON output owns stdout
        if self.quiet || matches!(self.output, OutputFormat::Json) {
            gate.echo = false;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
