// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! covgate library.
//!
//! Runs a test suite with coverage measurement, extracts the aggregate
//! percentage and turns it into a pass/fail exit status.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod gate;
pub mod output;
pub mod report;
pub mod runner;
pub mod summary;

pub use error::Error;
pub use gate::{Gate, Outcome};

#[cfg(test)]
pub mod test_utils;
