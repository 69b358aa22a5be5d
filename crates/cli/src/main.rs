// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use covgate::cli::Cli;
use covgate::color::resolve_color;
use covgate::config::{self, Config};
use covgate::discovery;
use covgate::output;
use covgate::runner::{SystemOpener, SystemRunner};
use covgate::Gate;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(exit_status(code)),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("COVGATE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;

    let mut config = load_config(cli, &cwd)?;
    cli.apply(&mut config);
    config.validate()?;

    let gate = Gate::new(&config, &cwd, &SystemRunner, &SystemOpener);
    let outcome = gate.run()?;

    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    let choice = resolve_color(cli.color, no_color, std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(choice);
    output::write_outcome(&mut stdout, cli.output, &outcome, config.gate.min)?;

    Ok(outcome.exit_code())
}

fn load_config(cli: &Cli, cwd: &Path) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Ok(config::load(&cwd.join(path))?);
    }
    match discovery::find_config(cwd) {
        Some(path) => Ok(config::load(&path)?),
        None => {
            tracing::debug!("no {} found, using defaults", config::CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

/// Map an exit code onto the portable 0-255 range.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
