// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-character matchers: newline and spoken symbols.

use crate::command::Command;
use crate::symbols;

use super::PatternMatcher;

/// Matches exactly one `\n`, spoken as "enter".
pub struct NewLineMatcher;

impl PatternMatcher for NewLineMatcher {
    fn name(&self) -> &'static str {
        "new line"
    }

    fn confirms(&self, confirmed: &str, next: char) -> bool {
        confirmed.is_empty() && next == '\n'
    }

    fn could_extend(&self, confirmed: &str, next: char, _end_of_input: bool) -> bool {
        // A single character is already complete; it cannot extend further.
        self.confirms(confirmed, next)
    }

    fn command(&self, _matched: &str) -> Command {
        Command::insert("enter", "\n")
    }
}

/// Matches exactly one character from the spoken-form table.
pub struct SymbolMatcher;

impl PatternMatcher for SymbolMatcher {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn confirms(&self, confirmed: &str, next: char) -> bool {
        confirmed.is_empty() && symbols::is_symbol(next)
    }

    fn could_extend(&self, confirmed: &str, next: char, _end_of_input: bool) -> bool {
        self.confirms(confirmed, next)
    }

    fn command(&self, matched: &str) -> Command {
        let name = matched
            .chars()
            .next()
            .and_then(symbols::spoken_form)
            .unwrap_or("symbol");
        Command::insert(name, matched)
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
