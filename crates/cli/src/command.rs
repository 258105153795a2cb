// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command and action value types emitted by the scanner.

use serde::Serialize;

/// A named action with ordered string arguments.
///
/// Every action the scanner synthesizes is an `insert`, but the type keeps
/// the general name/arguments shape of the recorded command format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    name: String,
    arguments: Vec<String>,
}

impl Action {
    /// Create an action from a name and argument list.
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Create an `insert` action carrying the given text.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new("insert", vec![text.into()])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// A spoken command: a name plus the ordered actions it dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    name: String,
    actions: Vec<Action>,
}

impl Command {
    /// Create a command from a name and action list.
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// Create a command whose sole action inserts `text`.
    pub fn insert(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![Action::insert(text)])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
