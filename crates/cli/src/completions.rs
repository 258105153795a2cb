// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for respeak.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::Cli;

/// Write the completion script for `shell` to `out`.
pub fn generate(shell: clap_complete::Shell, out: &mut impl Write) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "respeak", out);
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
