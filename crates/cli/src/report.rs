// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML coverage report location and generation command.

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::HtmlConfig;
use crate::runner::CommandSpec;

/// Characters escaped in `file://` URL paths.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Command that materializes the HTML report.
///
/// Defaults to `<python> -m coverage html`.
pub fn html_command(html: &HtmlConfig, python: &str) -> CommandSpec {
    match &html.program {
        Some(program) => CommandSpec::new(program.as_str(), html.args.clone().unwrap_or_default()),
        None => CommandSpec::new(python, ["-m", "coverage", "html"]),
    }
}

/// Absolute path of the generated entry page.
pub fn artifact_path(root: &Path, html: &HtmlConfig) -> PathBuf {
    if html.path.is_absolute() {
        html.path.clone()
    } else {
        root.join(&html.path)
    }
}

/// `file://` URL for a local path.
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let encoded = utf8_percent_encode(&raw, PATH_SEGMENT);
    if raw.starts_with('/') {
        format!("file://{encoded}")
    } else {
        format!("file:///{encoded}")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
