// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatted word sequences: kabab-case, snake_case, dotted.paths,
//! conga/lines, packed::paths, dunder__names, camelCase, PascalCase,
//! and CONSTANT_CASE, plus smashed-together runs with a case signal.

use crate::command::Command;
use crate::dictionary::Dictionary;

use super::PatternMatcher;
use super::casing::{self, CaseFormat};
use super::smash::Smasher;

/// Separator texts and their formatter keywords.
const SEPARATORS: &[Separator] = &[
    Separator {
        text: "-",
        keyword: "kabab",
    },
    Separator {
        text: "_",
        keyword: "snake",
    },
    Separator {
        text: ".",
        keyword: "dotted",
    },
    Separator {
        text: "/",
        keyword: "conga",
    },
    Separator {
        text: "::",
        keyword: "packed",
    },
    Separator {
        text: "__",
        keyword: "dunder",
    },
];

/// Fewest words a sequence may contain. A lone formatted word belongs to
/// the single-word matcher.
const MIN_WORDS: usize = 2;

/// Most words a sequence may contain.
const MAX_WORDS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Separator {
    text: &'static str,
    keyword: &'static str,
}

fn separator_for(text: &str) -> Option<Separator> {
    SEPARATORS.iter().copied().find(|s| s.text == text)
}

fn is_separator_prefix(text: &str) -> bool {
    SEPARATORS.iter().any(|s| s.text.starts_with(text))
}

/// Split into maximal runs of alphabetic vs. non-alphabetic characters.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut run_is_alpha: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let alpha = c.is_alphabetic();
        match run_is_alpha {
            Some(prev) if prev == alpha => {}
            Some(_) => {
                tokens.push(&text[start..i]);
                start = i;
                run_is_alpha = Some(alpha);
            }
            None => run_is_alpha = Some(alpha),
        }
    }
    if run_is_alpha.is_some() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// A fully parsed, valid sequence.
struct Sequence {
    words: Vec<String>,
    separator: Option<Separator>,
    format: CaseFormat,
}

impl Sequence {
    /// The command name: case keyword, separator keyword (unless the
    /// combination is "constant"), then the lowercased words.
    fn spoken_name(&self) -> String {
        let constant = self.format == CaseFormat::Upper
            && self.separator.map(|s| s.text) == Some("_");
        let mut parts: Vec<&str> = Vec::new();
        match self.format {
            CaseFormat::Camel => parts.push("camel"),
            CaseFormat::Pascal => parts.push("hammer"),
            CaseFormat::Upper => parts.push(if constant { "constant" } else { "all cap" }),
            CaseFormat::Lower if self.separator.is_none() => parts.push("smash"),
            CaseFormat::Lower | CaseFormat::Other => {}
        }
        if let Some(separator) = self.separator {
            if !constant {
                parts.push(separator.keyword);
            }
        }
        let mut name = parts.join(" ");
        for word in &self.words {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(&word.to_lowercase());
        }
        name
    }
}

/// Matches separator-joined or smashed-together dictionary word sequences.
pub struct FormatWordsMatcher<'d> {
    dictionary: &'d Dictionary,
    smasher: Smasher<'d>,
}

impl<'d> FormatWordsMatcher<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            smasher: Smasher::new(dictionary),
        }
    }

    /// Parse `total` into a valid sequence, or `None`.
    fn parse(&self, total: &str) -> Option<Sequence> {
        let tokens = tokenize(total);
        let (words, separator) = match tokens.as_slice() {
            [] => return None,
            [single] => {
                if !single.chars().all(char::is_alphabetic) {
                    return None;
                }
                (self.smasher.segment(single)?, None)
            }
            _ => self.parse_separated(&tokens)?,
        };
        if words.len() < MIN_WORDS || words.len() > MAX_WORDS {
            return None;
        }
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let format = casing::case_format(&refs);
        match format {
            CaseFormat::Other => None,
            CaseFormat::Camel if separator.is_some() => None,
            // An all-lowercase run with no separator reads as adjacent
            // plain words; the word matcher reconstructs those spans.
            CaseFormat::Lower if separator.is_none() => None,
            _ => Some(Sequence {
                words,
                separator,
                format,
            }),
        }
    }

    /// Parse an alternating word/separator token list.
    fn parse_separated(&self, tokens: &[&str]) -> Option<(Vec<String>, Option<Separator>)> {
        if tokens.len() % 2 == 0 || tokens.len() < 3 {
            return None;
        }
        // The second token is the separator only when it is not itself a
        // word; a list of words (from smashing) never takes this path.
        if self.dictionary.contains_ignore_case(tokens[1]) {
            return None;
        }
        let separator = separator_for(tokens[1])?;
        for (i, token) in tokens.iter().enumerate() {
            if i % 2 == 1 {
                if *token != separator.text {
                    return None;
                }
            } else if !token.chars().all(char::is_alphabetic)
                || !self.dictionary.contains_ignore_case(token)
            {
                return None;
            }
        }
        let words = tokens.iter().step_by(2).map(|t| t.to_string()).collect();
        Some((words, Some(separator)))
    }

    /// Whether a multi-token list could still grow into a valid sequence.
    /// All tokens but the last must already be coherent; the trailing
    /// token may be a partial word or a partial separator.
    fn viable_tokens(&self, tokens: &[&str]) -> bool {
        let last = tokens.len() - 1;
        if !tokens[0].chars().next().is_some_and(char::is_alphabetic) {
            return false;
        }
        // Word slots, counting the one a trailing separator announces.
        if tokens.len() / 2 + 1 > MAX_WORDS {
            return false;
        }
        let mut separator: Option<Separator> = None;
        for (i, token) in tokens.iter().enumerate() {
            let is_last = i == last;
            if i % 2 == 0 {
                if !token.chars().all(char::is_alphabetic) {
                    return false;
                }
                if is_last {
                    if token.chars().count() > self.dictionary.max_word_len() {
                        return false;
                    }
                } else if !self.dictionary.contains_ignore_case(token) {
                    return false;
                }
            } else if is_last {
                let compatible = match separator {
                    Some(sep) => sep.text.starts_with(token),
                    None => is_separator_prefix(token),
                };
                if !compatible {
                    return false;
                }
            } else {
                let Some(sep) = separator_for(token) else {
                    return false;
                };
                if separator.is_some_and(|prev| prev != sep) {
                    return false;
                }
                separator = Some(sep);
            }
        }
        // Completed words must still agree on some case format.
        let completed: Vec<&str> = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0 && *i != last)
            .map(|(_, t)| *t)
            .collect();
        completed.is_empty() || casing::case_format(&completed) != CaseFormat::Other
    }
}

impl PatternMatcher for FormatWordsMatcher<'_> {
    fn name(&self) -> &'static str {
        "format words"
    }

    fn confirms(&self, confirmed: &str, next: char) -> bool {
        let total = format!("{confirmed}{next}");
        self.parse(&total).is_some()
    }

    fn could_extend(&self, confirmed: &str, next: char, end_of_input: bool) -> bool {
        if end_of_input {
            return self.confirms(confirmed, next);
        }
        let total = format!("{confirmed}{next}");
        let tokens = tokenize(&total);
        match tokens.as_slice() {
            [] => false,
            [single] => {
                single.chars().all(char::is_alphabetic)
                    && self.smasher.viable_prefix(single, MAX_WORDS)
            }
            _ => self.viable_tokens(&tokens),
        }
    }

    fn command(&self, matched: &str) -> Command {
        let name = match self.parse(matched) {
            Some(sequence) => sequence.spoken_name(),
            None => matched.to_lowercase(),
        };
        Command::insert(name, matched)
    }
}

#[cfg(test)]
#[path = "formatted_tests.rs"]
mod tests;
