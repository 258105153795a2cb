// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input normalization applied before scanning.
//!
//! Tabs have no spoken form, so the scanner drops them; expanding them to
//! spaces first keeps the indentation dictatable. Stripping indentation
//! removes it from the reconstruction entirely instead.

/// Replace each tab with `width` spaces. A width of zero leaves the text
/// unchanged.
pub fn expand_tabs(text: &str, width: usize) -> String {
    if width == 0 || !text.contains('\t') {
        return text.to_string();
    }
    text.replace('\t', &" ".repeat(width))
}

/// Remove leading blanks (spaces and tabs) from every line, preserving
/// line endings.
pub fn strip_indentation(text: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| line.trim_start_matches([' ', '\t']))
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
