// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants via their
//! `default_*` methods.

/// Config schema version.
pub const VERSION: u32 = 1;

/// Gate defaults.
pub mod gate {
    /// Minimum acceptable coverage percentage (85).
    pub const MIN: f64 = 85.0;
}

/// Test command defaults.
pub mod command {
    /// Interpreter used to launch pytest and coverage.
    pub const PYTHON: &str = "python";

    /// Where the JSON coverage report is written.
    pub const JSON_PATH: &str = "coverage.json";

    /// Source roots measured by default.
    pub fn sources() -> Vec<String> {
        vec!["src".to_string(), "examples".to_string()]
    }
}

/// HTML report defaults.
pub mod html {
    /// Entry page written by `coverage html`.
    pub const PATH: &str = "htmlcov/index.html";
}
