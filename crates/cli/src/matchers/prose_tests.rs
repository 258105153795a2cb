// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::matchers::PatternMatcher;
use yare::parameterized;

fn dictionary() -> Dictionary {
    Dictionary::from_words([
        "test", "this", "is", "a", "i", "my", "the", "title", "of", "word", "good",
    ])
}

fn confirms(total: &str) -> bool {
    let dictionary = dictionary();
    let matcher = ProseMatcher::new(&dictionary);
    let mut chars = total.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    matcher.confirms(chars.as_str(), last)
}

fn command_name(total: &str) -> String {
    let dictionary = dictionary();
    let matcher = ProseMatcher::new(&dictionary);
    matcher.command(total).name().to_string()
}

fn could_extend(total: &str) -> bool {
    let dictionary = dictionary();
    let matcher = ProseMatcher::new(&dictionary);
    let mut chars = total.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    matcher.could_extend(chars.as_str(), last, false)
}

#[test]
fn confirms_two_to_seven_known_words() {
    assert!(confirms("this is"));
    assert!(confirms("this is a test"));
    assert!(!confirms("this"));
    let eight = ["test"; 8].join(" ");
    assert!(!confirms(&eight));
}

#[test]
fn rejects_unknown_words_and_stray_characters() {
    assert!(!confirms("this xyz"));
    assert!(!confirms("this 1s"));
    assert!(!confirms("this  is"));
}

#[test]
fn tolerates_trailing_punctuation_only_from_the_closed_set() {
    assert!(confirms("this is a test."));
    assert!(confirms("is this a test?"));
    assert!(!confirms("this is a test)"));
    assert!(!confirms("this is a *test"));
}

#[parameterized(
    phrase = { "this is a test", "phrase this is a test" },
    sentence = { "This is my test", "sentence this is my test" },
    sentence_with_punctuation = { "This, is a test.", "sentence this comma is a test period" },
    title = { "The Title of My Test", "title the title of my test" },
    say_lowercase_with_punctuation = { "this is a test.", "say this is a test period" },
    say_interior_capital = { "this is My test", "say this is cap my test" },
)]
fn classifications(total: &str, expected: &str) {
    assert!(confirms(total), "{total} should confirm");
    assert_eq!(command_name(total), expected);
}

#[test]
fn sentence_marks_capitals_after_the_first_word() {
    assert_eq!(
        command_name("This is My test"),
        "sentence this is cap my test"
    );
}

#[test]
fn title_capitalization_needs_no_cap_markers() {
    assert_eq!(command_name("My Test"), "title my test");
}

#[test]
fn punctuation_names_cover_the_closed_set() {
    assert_eq!(
        command_name("is this a test?"),
        "say is this a test question mark"
    );
    assert_eq!(command_name("this is a test!"), "say this is a test exclamation mark");
    assert_eq!(command_name("my test; my word"), "say my test semicolon my word");
    assert_eq!(command_name("my test: my word"), "say my test colon my word");
}

#[test]
fn could_extend_allows_a_growing_last_token() {
    assert!(could_extend("this i"));
    assert!(could_extend("this "));
    assert!(could_extend("th"));
    // Shape is enough to stay alive; membership is settled on confirm.
    assert!(could_extend("this isx"));
    assert!(!could_extend("this is1"));
}

#[test]
fn could_extend_rejects_doubled_spaces() {
    assert!(!could_extend("this  "));
    assert!(!could_extend("this  is"));
}

#[test]
fn could_extend_rejects_leading_spaces() {
    assert!(!could_extend(" this"));
}

#[test]
fn could_extend_stops_growing_after_punctuation() {
    assert!(could_extend("this is."));
    // The word under the punctuation must already be known.
    assert!(!could_extend("this isq."));
}

#[test]
fn a_bare_token_cannot_confirm_at_end_of_input() {
    let dictionary = dictionary();
    let matcher = ProseMatcher::new(&dictionary);
    assert!(!matcher.could_extend("thi", 's', true));
    assert!(matcher.could_extend("this i", 's', true));
}

#[test]
fn command_inserts_the_literal_text() {
    let dictionary = dictionary();
    let matcher = ProseMatcher::new(&dictionary);
    let command = matcher.command("This is my test");
    assert_eq!(
        command.actions(),
        [crate::command::Action::insert("This is my test")]
    );
}
