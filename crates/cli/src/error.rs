// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime errors raised while running the gate.

use std::io;

use crate::config::ConfigError;

/// Errors that stop the gate before it reaches an outcome.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A subprocess could not be started.
    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Captured test output could not be written back to the terminal.
    #[error("failed to echo test output")]
    Echo(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Render an error followed by its sources, `outer: inner: ...`.
pub fn chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
