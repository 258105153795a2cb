// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prose matcher: short runs of free text, classified as a phrase, title,
//! sentence, or generic "say" utterance.

use crate::command::Command;
use crate::dictionary::Dictionary;

use super::PatternMatcher;

/// Fewest space-separated tokens prose may contain.
const MIN_TOKENS: usize = 2;

/// Most space-separated tokens prose may contain.
const MAX_TOKENS: usize = 7;

/// Closed class of words a title may leave uncapitalized.
const TITLE_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor", "of", "on", "or",
    "per", "the", "to", "v", "via", "vs",
];

/// Spoken names for the trailing punctuation prose tolerates.
fn punctuation_name(character: char) -> Option<&'static str> {
    let name = match character {
        '.' => "period",
        '?' => "question mark",
        '!' => "exclamation mark",
        ',' => "comma",
        ';' => "semicolon",
        ':' => "colon",
        _ => return None,
    };
    Some(name)
}

/// One space-separated token: a word plus its trailing punctuation.
struct ProseToken<'t> {
    word: &'t str,
    punctuation: &'t str,
}

impl ProseToken<'_> {
    fn capitalized(&self) -> bool {
        self.word.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Split a raw token into its word and punctuation parts, without
/// validating dictionary membership. The word must be a nonempty
/// alphabetic run, all-lower or capitalized, and every trailing character
/// must be a named punctuation mark.
fn parse_token(token: &str) -> Option<ProseToken<'_>> {
    let split = token
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(token.len(), |(i, _)| i);
    let (word, punctuation) = token.split_at(split);
    if word.is_empty() || !punctuation.chars().all(|c| punctuation_name(c).is_some()) {
        return None;
    }
    let mut chars = word.chars();
    let rest_lower = chars.next().is_some() && chars.all(char::is_lowercase);
    if !rest_lower {
        return None;
    }
    Some(ProseToken { word, punctuation })
}

pub struct ProseMatcher<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> ProseMatcher<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    fn parse<'t>(&self, total: &'t str) -> Option<Vec<ProseToken<'t>>> {
        let raw: Vec<&str> = total.split(' ').collect();
        if raw.len() < MIN_TOKENS || raw.len() > MAX_TOKENS {
            return None;
        }
        let mut tokens = Vec::with_capacity(raw.len());
        for part in raw {
            let token = parse_token(part)?;
            if !self.dictionary.contains_ignore_case(token.word) {
                return None;
            }
            tokens.push(token);
        }
        Some(tokens)
    }

    /// Classify a token sequence as phrase, title, sentence, or say.
    fn classify(tokens: &[ProseToken<'_>]) -> &'static str {
        let any_punctuation = tokens.iter().any(|t| !t.punctuation.is_empty());
        let any_capitalized = tokens.iter().any(ProseToken::capitalized);
        if !any_punctuation && !any_capitalized {
            return "phrase";
        }
        let title = tokens.iter().all(|t| {
            t.capitalized() || TITLE_STOP_WORDS.contains(&t.word.to_lowercase().as_str())
        });
        if title {
            return "title";
        }
        if tokens.first().is_some_and(ProseToken::capitalized) {
            return "sentence";
        }
        "say"
    }

    fn spoken_name(tokens: &[ProseToken<'_>]) -> String {
        let class = Self::classify(tokens);
        let mut parts: Vec<String> = vec![class.to_string()];
        for (i, token) in tokens.iter().enumerate() {
            let marked = match class {
                // A sentence is expected to open capitalized; only later
                // capitals are dictated explicitly.
                "sentence" => i > 0 && token.capitalized(),
                // A title's capitalization needs no dictation.
                "title" => false,
                _ => token.capitalized(),
            };
            if marked {
                parts.push("cap".to_string());
            }
            parts.push(token.word.to_lowercase());
            for c in token.punctuation.chars() {
                if let Some(name) = punctuation_name(c) {
                    parts.push(name.to_string());
                }
            }
        }
        parts.join(" ")
    }
}

impl PatternMatcher for ProseMatcher<'_> {
    fn name(&self) -> &'static str {
        "prose"
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
        let raw: Vec<&str> = total.split(' ').collect();
        if raw.len() > MAX_TOKENS {
            return false;
        }
        let last = raw.len() - 1;
        for (i, part) in raw.iter().enumerate() {
            if i != last {
                // Completed tokens are held to the full rule. An empty one
                // means doubled (or leading) spaces.
                let Some(token) = parse_token(part) else {
                    return false;
                };
                if !self.dictionary.contains_ignore_case(token.word) {
                    return false;
                }
                continue;
            }
            if part.is_empty() {
                // Just after a space, waiting on the next word.
                continue;
            }
            let Some(token) = parse_token(part) else {
                return false;
            };
            if token.word.chars().count() > self.dictionary.max_word_len() {
                return false;
            }
            // Once punctuation starts the word cannot grow any further.
            if !token.punctuation.is_empty()
                && !self.dictionary.contains_ignore_case(token.word)
            {
                return false;
            }
        }
        true
    }

    fn command(&self, matched: &str) -> Command {
        let name = match self.parse(matched) {
            Some(tokens) => Self::spoken_name(&tokens),
            None => matched.to_lowercase(),
        };
        Command::insert(name, matched)
    }
}

#[cfg(test)]
#[path = "prose_tests.rs"]
mod tests;
