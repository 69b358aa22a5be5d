// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result rendering for text and JSON output.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::color::scheme;
use crate::gate::Outcome;

/// JSON shape of an outcome.
#[derive(Debug, Serialize)]
pub struct OutcomeReport {
    pub status: &'static str,
    pub percent: Option<f64>,
    pub threshold: f64,
    pub exit_code: i32,
}

impl OutcomeReport {
    pub fn new(outcome: &Outcome, threshold: f64) -> Self {
        Self {
            status: outcome.status(),
            percent: outcome.percent(),
            threshold,
            exit_code: outcome.exit_code(),
        }
    }
}

/// Write the outcome in the requested format.
pub fn write_outcome(
    w: &mut impl WriteColor,
    format: OutputFormat,
    outcome: &Outcome,
    threshold: f64,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(w, outcome),
        OutputFormat::Json => {
            let report = OutcomeReport::new(outcome, threshold);
            serde_json::to_writer(&mut *w, &report)?;
            writeln!(w)
        }
    }
}

fn write_text(w: &mut impl WriteColor, outcome: &Outcome) -> io::Result<()> {
    let Some(message) = outcome.message() else {
        return Ok(());
    };
    let spec = match outcome {
        Outcome::Pass { .. } => scheme::pass(),
        Outcome::Fail { .. } => scheme::fail(),
        Outcome::Indeterminate | Outcome::Aborted { .. } => scheme::warn(),
    };
    w.set_color(&spec)?;
    write!(w, "{}", message)?;
    w.reset()?;
    writeln!(w)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
