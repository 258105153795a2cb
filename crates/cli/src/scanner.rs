// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass scanner with bounded backtracking.
//!
//! Drives one left-to-right pass over the source text. While some matcher
//! can still extend, characters accumulate; when extension dies after an
//! earlier confirmation, the scanner rolls back to just past that match,
//! emits its command, and resumes from the rolled-back position. A span
//! that never confirmed and cannot extend is dropped without a command.
//! Rollback distance is bounded by the text added since the last
//! confirmed match.

use crate::buffer::{MatchBuffer, MatchRecord};
use crate::command::Command;
use crate::coordinator::Coordinator;
use crate::dictionary::Dictionary;

/// Scanner configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Enable the prose matcher.
    pub prose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { prose: true }
    }
}

/// Reconstructs command histories for blocks of text.
///
/// Holds no per-scan state; a scanner may be reused across inputs and the
/// result is a pure function of the input text.
pub struct Scanner<'d> {
    dictionary: &'d Dictionary,
    options: ScanOptions,
}

impl<'d> Scanner<'d> {
    pub fn new(dictionary: &'d Dictionary, options: ScanOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Derive a command sequence that, replayed, would have produced
    /// (approximately) `text`. Deterministic; never fails.
    pub fn reconstruct(&self, text: &str) -> Vec<Command> {
        let chars: Vec<char> = text.chars().collect();
        let mut commands = Vec::new();
        let mut coordinator = Coordinator::new(self.dictionary, &self.options);
        let mut buffer = MatchBuffer::new();
        let mut match_found = false;
        let mut index = 0;

        while index < chars.len() {
            let end_of_input = index + 1 == chars.len();
            buffer.push(chars[index], index, end_of_input);
            coordinator.observe(&buffer);
            let dead = coordinator.none_could_extend(&buffer);

            if coordinator.has_match() {
                // Keep accumulating: a longer match may still appear.
                match_found = true;
                index += 1;
            } else if match_found && dead {
                // Roll back to just past the last confirmed match, emit
                // it, and rescan everything after it.
                match coordinator.record() {
                    Some(record) => {
                        if let Some(command) = self.emit(&coordinator, &chars, record) {
                            commands.push(command);
                        }
                        index = record.end_index + 1;
                    }
                    None => index += 1,
                }
                buffer.reset();
                coordinator.reset();
                match_found = false;
            } else if dead {
                // Nothing ever confirmed from this starting point: the
                // span is unmatchable and silently discarded.
                tracing::debug!(span = %buffer.total(), "dropping unmatched text");
                buffer.reset();
                coordinator.reset();
                index += 1;
            } else {
                index += 1;
            }
        }

        if coordinator.has_match() {
            if let Some(record) = coordinator.record() {
                if let Some(command) = self.emit(&coordinator, &chars, record) {
                    commands.push(command);
                }
            }
        }

        commands
    }

    /// Synthesize the command for a recorded match, re-running the
    /// priority decision at the rolled-back buffer state.
    fn emit(
        &self,
        coordinator: &Coordinator<'_>,
        chars: &[char],
        record: MatchRecord,
    ) -> Option<Command> {
        let start = (record.end_index + 1).checked_sub(record.len)?;
        let matched: String = chars.get(start..=record.end_index)?.iter().collect();
        let mut head = matched.chars();
        let last = head.next_back()?;
        let confirmed: String = head.collect();
        let slot = coordinator
            .confirm_at(&confirmed, last)
            .unwrap_or(record.matcher);
        tracing::trace!(matched = %matched, "emitting command");
        coordinator.command_for(slot, &matched)
    }
}

/// Reconstruct with default options.
pub fn reconstruct(dictionary: &Dictionary, text: &str) -> Vec<Command> {
    Scanner::new(dictionary, ScanOptions::default()).reconstruct(text)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
