// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command history log serialization.
//!
//! One `Command: <name>` line per command, followed by one JSON record
//! per action.

use std::io::{self, Write};

use crate::command::Command;

/// Write the history log for `commands` to `out`.
pub fn write_history(commands: &[Command], out: &mut impl Write) -> io::Result<()> {
    for command in commands {
        writeln!(out, "Command: {}", command.name())?;
        for action in command.actions() {
            let line = serde_json::to_string(action).map_err(io::Error::other)?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Render the history log to a string.
pub fn render_history(commands: &[Command]) -> io::Result<String> {
    let mut bytes = Vec::new();
    write_history(commands, &mut bytes)?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
