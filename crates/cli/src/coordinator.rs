// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match coordination across the fixed matcher list.
//!
//! Once per accumulation cycle, on the first buffer state it observes, the
//! coordinator narrows the matcher list to the viable set (those whose
//! `could_extend` holds) and caches it; later characters in the same cycle
//! are confirmed only against that subset. `none_could_extend` always
//! consults the full list, so the scanner can tell when further
//! accumulation is futile even for matchers the cache excluded.

use crate::buffer::{MatchBuffer, MatchRecord};
use crate::command::Command;
use crate::dictionary::Dictionary;
use crate::matchers::{self, PatternMatcher};
use crate::scanner::ScanOptions;

pub struct Coordinator<'d> {
    matchers: Vec<Box<dyn PatternMatcher + 'd>>,
    viable: Option<Vec<usize>>,
    current: Option<usize>,
    record: Option<MatchRecord>,
}

impl<'d> Coordinator<'d> {
    pub fn new(dictionary: &'d Dictionary, options: &ScanOptions) -> Self {
        Self {
            matchers: matchers::all_matchers(dictionary, options.prose),
            viable: None,
            current: None,
            record: None,
        }
    }

    /// Re-evaluate confirmation for the buffer's current state.
    ///
    /// The first viable-in-order matcher that confirms becomes the current
    /// match, and its snapshot overwrites the remembered record.
    pub fn observe(&mut self, buffer: &MatchBuffer) {
        let Some(next) = buffer.pending() else {
            return;
        };
        let confirmed = buffer.confirmed();
        if self.viable.is_none() {
            let viable: Vec<usize> = self
                .matchers
                .iter()
                .enumerate()
                .filter(|(_, m)| m.could_extend(confirmed, next, buffer.end_of_input()))
                .map(|(i, _)| i)
                .collect();
            tracing::trace!(count = viable.len(), "narrowed viable set");
            self.viable = Some(viable);
        }
        self.current = None;
        if let Some(viable) = &self.viable {
            for &index in viable {
                if self.matchers[index].confirms(confirmed, next) {
                    self.current = Some(index);
                    self.record = Some(MatchRecord {
                        matcher: index,
                        len: buffer.char_len(),
                        end_index: buffer.absolute_index(),
                    });
                    break;
                }
            }
        }
    }

    /// Whether the buffer's current state is a confirmed match.
    pub fn has_match(&self) -> bool {
        self.current.is_some()
    }

    /// The last confirmation seen this cycle, if any.
    pub fn record(&self) -> Option<MatchRecord> {
        self.record
    }

    /// True when no matcher at all could extend from the current state.
    pub fn none_could_extend(&self, buffer: &MatchBuffer) -> bool {
        let Some(next) = buffer.pending() else {
            return true;
        };
        !self
            .matchers
            .iter()
            .any(|m| m.could_extend(buffer.confirmed(), next, buffer.end_of_input()))
    }

    /// First matcher, in declared order, confirming the given state. Used
    /// to re-run the priority decision at a rolled-back buffer state.
    pub fn confirm_at(&self, confirmed: &str, next: char) -> Option<usize> {
        self.matchers
            .iter()
            .position(|m| m.confirms(confirmed, next))
    }

    /// Synthesize the command for `matched` using the matcher in `slot`.
    pub fn command_for(&self, slot: usize, matched: &str) -> Option<Command> {
        self.matchers.get(slot).map(|m| m.command(matched))
    }

    /// Clear the viable-set cache, current match, and record for a fresh
    /// accumulation cycle.
    pub fn reset(&mut self) {
        self.viable = None;
        self.current = None;
        self.record = None;
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
