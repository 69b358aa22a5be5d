// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for structured coverage input and JSON output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn json_report_source_is_read() {
    let project = Project::empty();
    project.file(
        "run_tests.sh",
        "echo '{\"totals\": {\"percent_covered\": 90.5}}' > coverage.json\necho 'no summary here'\n",
    );
    project.config_with("report = \"json\"\n");

    project
        .gate()
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage 90.5% meets requirement."));
}

#[test]
fn json_report_source_falls_back_to_terminal_summary() {
    let project = Project::reporting("TOTAL 120 10 91.7%");
    project.config_with("report = \"json\"\n");

    project
        .gate()
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage 91.7% meets requirement."));
}

#[test]
fn json_output_prints_single_object() {
    let project = Project::reporting("TOTAL 120 40 66.7%");
    project.config_with("[gate]\nhtml = \"never\"\n");

    let output = project.gate().args(["--output", "json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "fail");
    assert_eq!(value["percent"], 66.7);
    assert_eq!(value["threshold"], 85.0);
    assert_eq!(value["exit_code"], 1);
}

#[test]
fn json_output_for_indeterminate_run() {
    let project = Project::reporting("nothing to see");

    let output = project.gate().args(["-o", "json"]).output().unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "indeterminate");
    assert!(value["percent"].is_null());
}
