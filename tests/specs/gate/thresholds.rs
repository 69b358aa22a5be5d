// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for threshold comparison.
//!
//! Default threshold is 85%.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const PYTEST_OUTPUT: &str = "\
collected 12 items

tests/test_core.py ............                                          [100%]

---------- coverage: platform linux, python 3.12.1-final-0 -----------
Name                 Stmts   Miss  Cover
----------------------------------------
src/core.py             80      6    92%
----------------------------------------
TOTAL                  120     10    91.7%";

/// > TOTAL 120 10 91.7% → exit 0, message mentions 91.7
#[test]
fn coverage_above_minimum_passes() {
    let project = Project::reporting("TOTAL   120   10   91.7%");

    project
        .gate()
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage 91.7% meets requirement."));
}

/// > TOTAL 120 0 100.0% → exit 0, message mentions 100.0
#[test]
fn full_coverage_passes() {
    let project = Project::reporting("TOTAL   120   0   100.0%");

    project
        .gate()
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage 100.0% meets requirement."));
}

/// > TOTAL 120 40 66.7% → exit 1, message mentions 66.7
#[test]
fn coverage_below_minimum_fails() {
    let project = Project::reporting("TOTAL   120   40   66.7%");
    project.config_with("[gate]\nhtml = \"never\"\n");

    project
        .gate()
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Coverage 66.7% below required."));
}

#[test]
fn coverage_equal_to_minimum_passes() {
    let project = Project::reporting("TOTAL 100 15 85%");
    project.gate().assert().success();
}

#[test]
fn full_pytest_output_is_scraped_and_echoed() {
    let project = Project::reporting(PYTEST_OUTPUT);

    project
        .gate()
        .assert()
        .success()
        .stdout(predicates::str::contains("src/core.py"))
        .stdout(predicates::str::contains("Coverage 91.7% meets requirement."));
}

#[test]
fn quiet_hides_test_output() {
    let project = Project::reporting(PYTEST_OUTPUT);

    project
        .gate()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicates::str::contains("src/core.py").not())
        .stdout(predicates::str::contains("meets requirement"));
}

#[test]
fn config_minimum_is_used() {
    let project = Project::reporting("TOTAL 120 10 91.7%");
    project.config_with("[gate]\nmin = 95\nhtml = \"never\"\n");

    project.gate().assert().code(1);
}

#[test]
fn min_flag_overrides_config() {
    let project = Project::reporting("TOTAL 120 10 91.7%");
    project.config_with("[gate]\nmin = 95\n");

    project.gate().args(["--min", "90"]).assert().success();
}

#[test]
fn min_environment_variable_overrides_config() {
    let project = Project::reporting("TOTAL 120 40 66.7%");

    project.gate().env("COVGATE_MIN", "60").assert().success();
}

#[test]
fn min_flag_out_of_range_is_an_error() {
    let project = Project::reporting("TOTAL 120 10 91.7%");

    project
        .gate()
        .args(["--min", "150"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid minimum coverage"));
}

#[test]
fn repeated_runs_give_the_same_result() {
    let project = Project::reporting("TOTAL 120 10 91.7%");

    let first = project.gate().output().unwrap();
    let second = project.gate().output().unwrap();

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
