// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for indeterminate results and failed test runs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > No TOTAL line → exit 1, "Could not determine test coverage."
#[test]
fn missing_total_line_is_indeterminate() {
    let project = Project::reporting("collected 3 items\n3 passed in 0.01s");

    project
        .gate()
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Could not determine test coverage."));
}

#[test]
fn malformed_percentage_is_indeterminate() {
    let project = Project::reporting("TOTAL 120 10 abc%");

    project
        .gate()
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Could not determine test coverage."))
        .stderr(predicates::str::contains("malformed coverage percentage"));
}

/// > Test run exits 2 → gate exits 2, no coverage parsing
#[test]
fn failed_test_run_exit_status_is_propagated() {
    let project = Project::empty();
    project.config(FAKE_SUITE);
    project.suite("TOTAL 120 10 91.7%", 2);

    project
        .gate()
        .assert()
        .code(2)
        .stdout(predicates::str::contains("meets requirement").not())
        .stdout(predicates::str::contains("Could not determine").not());
}

#[test]
fn failed_test_run_is_evaluated_without_check_exit() {
    let project = Project::empty();
    project.config(FAKE_SUITE);
    project.suite("TOTAL 120 10 91.7%", 2);

    project
        .gate()
        .arg("--no-check-exit")
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage 91.7% meets requirement."));
}

#[test]
fn check_exit_can_be_disabled_in_config() {
    let project = Project::empty();
    project.config_with("[gate]\ncheck_exit = false\n");
    project.suite("TOTAL 120 10 91.7%", 1);

    project.gate().assert().success();
}

#[test]
fn missing_test_program_is_an_error() {
    let project = Project::empty();
    project.config("[command]\nprogram = \"covgate-no-such-runner\"\n");

    project
        .gate()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error: failed to run `covgate-no-such-runner`"));
}
