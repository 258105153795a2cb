// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Respeak CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use respeak::cli::{Cli, Command};
use respeak::error::ExitCode;

mod cmd_generate;

fn init_logging() {
    let filter = EnvFilter::try_from_env("RESPEAK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("respeak: {}", e);
            match e.downcast_ref::<respeak::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Completions(args)) => {
            respeak::completions::generate(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
        None => match &cli.generate.input {
            Some(_) => cmd_generate::run(&cli.generate),
            None => {
                // Show help for bare invocation
                Cli::command().print_help()?;
                println!();
                Ok(ExitCode::Success)
            }
        },
    }
}
