// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage percentage extraction.
//!
//! Two sources are supported:
//! - the terminal summary printed by `pytest --cov-report=term`, scraped
//!   from the first line containing `TOTAL` and a `%`
//! - coverage.py's JSON report, read from `totals.percent_covered`

/// Substring identifying the aggregate summary line.
pub const MARKER: &str = "TOTAL";

/// Why a coverage percentage could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("no line containing \"TOTAL\" and \"%\" in coverage output")]
    MarkerNotFound,

    #[error("malformed coverage percentage {token:?}")]
    MalformedPercent { token: String },

    #[error("failed to parse coverage JSON: {0}")]
    InvalidJson(String),
}

/// Return the first line carrying both the marker and a percent sign.
pub fn find_marker_line(output: &str) -> Option<&str> {
    output
        .lines()
        .find(|line| line.contains(MARKER) && line.contains('%'))
}

/// Extract the aggregate percentage from a terminal coverage summary.
///
/// Only the first marker line is considered. Its last whitespace-delimited
/// token, with `%` removed, must parse as a finite number.
pub fn parse_term_summary(output: &str) -> Result<f64, SummaryError> {
    let line = find_marker_line(output).ok_or(SummaryError::MarkerNotFound)?;
    let token = line.split_whitespace().next_back().unwrap_or_default();
    parse_percent_token(token)
}

fn parse_percent_token(token: &str) -> Result<f64, SummaryError> {
    let digits = token.replace('%', "");
    match digits.parse::<f64>() {
        Ok(percent) if percent.is_finite() => Ok(percent),
        _ => Err(SummaryError::MalformedPercent {
            token: token.to_string(),
        }),
    }
}

/// Extract the aggregate percentage from a coverage.py JSON report.
pub fn parse_json_report(json: &str) -> Result<f64, SummaryError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SummaryError::InvalidJson(e.to_string()))?;

    value
        .pointer("/totals/percent_covered")
        .and_then(serde_json::Value::as_f64)
        .filter(|percent| percent.is_finite())
        .ok_or(SummaryError::MarkerNotFound)
}

/// Render a percentage for messages: shortest round-trip form, always with
/// a fractional digit (`91.7`, `100.0`).
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{percent:.1}")
    } else {
        format!("{percent}")
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
