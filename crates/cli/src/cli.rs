// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reconstructs a plausible voice command history from a block of text
#[derive(Parser)]
#[command(name = "respeak")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Default)]
pub struct GenerateArgs {
    /// Text file to reconstruct a command history from
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the history log ("-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: PathBuf,

    /// Newline-delimited word list to use instead of the built-in one
    #[arg(long, value_name = "PATH", env = "RESPEAK_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Replace each tab with N spaces before scanning (0 keeps tabs)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub tab_width: usize,

    /// Strip leading indentation from every line
    #[arg(long)]
    pub strip_indentation: bool,

    /// Disable the prose matcher (phrase/title/sentence/say commands)
    #[arg(long)]
    pub no_prose: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
