// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The known-word set shared by all matchers.
//!
//! Loaded once at startup and never mutated afterwards, so scanners can
//! share it by reference without synchronization. Lookups are
//! case-sensitive on the stored form; matchers that compare
//! case-insensitively lowercase the probe via [`Dictionary::contains_ignore_case`].

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// Default word list baked into the binary.
const EMBEDDED_WORDS: &str = include_str!("../resources/words.txt");

/// An immutable, case-sensitive set of known words plus the precomputed
/// maximum word length (in characters), used for membership and pruning.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    max_word_len: usize,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        let max_word_len = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            words,
            max_word_len,
        }
    }

    /// Parse a newline-delimited word list. Blank lines and surrounding
    /// whitespace are ignored.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Load a newline-delimited word list from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Dictionary {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let dictionary = Self::from_text(&text);
        if dictionary.is_empty() {
            return Err(Error::Dictionary {
                path: path.to_path_buf(),
                message: "word list is empty".into(),
            });
        }
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// The word list shipped with the binary.
    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_WORDS)
    }

    /// Case-sensitive membership on the stored form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership after lowercasing the probe.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Length in characters of the longest known word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
