// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::matchers::PatternMatcher;

fn dictionary() -> Dictionary {
    Dictionary::from_words(["test", "this", "don't"])
}

#[test]
fn confirms_exact_dictionary_words() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    assert!(matcher.confirms("tes", 't'));
    assert!(matcher.confirms("don'", 't'));
    assert!(!matcher.confirms("te", 's'));
    assert!(!matcher.confirms("test", 's'));
}

#[test]
fn lookup_is_case_sensitive() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    assert!(!matcher.confirms("Tes", 't'));
    assert!(!matcher.confirms("TES", 'T'));
}

#[test]
fn could_extend_allows_letters_and_apostrophes() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    assert!(matcher.could_extend("", 't', false));
    assert!(matcher.could_extend("te", 's', false));
    assert!(matcher.could_extend("don", '\'', false));
    assert!(!matcher.could_extend("te", '1', false));
    assert!(!matcher.could_extend("te", ' ', false));
}

#[test]
fn could_extend_prunes_by_maximum_word_length() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    // Longest word is five characters.
    assert!(matcher.could_extend("abcd", 'e', false));
    assert!(!matcher.could_extend("abcde", 'f', false));
}

#[test]
fn could_extend_collapses_to_confirms_at_end_of_input() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    assert!(matcher.could_extend("tes", 't', true));
    assert!(!matcher.could_extend("te", 's', true));
}

#[test]
fn command_prefixes_word() {
    let dictionary = dictionary();
    let matcher = WordMatcher::new(&dictionary);
    let command = matcher.command("test");
    assert_eq!(command.name(), "word test");
    assert_eq!(command.actions(), [crate::command::Action::insert("test")]);
}
