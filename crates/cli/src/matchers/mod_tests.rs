// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn registry_order_is_fixed() {
    let dictionary = Dictionary::from_words(["test"]);
    let names: Vec<&str> = all_matchers(&dictionary, true)
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(
        names,
        [
            "new line",
            "symbol",
            "word",
            "format words",
            "format word",
            "prose"
        ]
    );
}

#[test]
fn prose_matcher_can_be_omitted() {
    let dictionary = Dictionary::from_words(["test"]);
    let names: Vec<&str> = all_matchers(&dictionary, false)
        .iter()
        .map(|m| m.name())
        .collect();
    assert!(!names.contains(&"prose"));
    assert_eq!(names.len(), 5);
}

#[test]
fn could_extend_over_approximates_confirms() {
    let dictionary = Dictionary::from_words(["test", "this"]);
    for matcher in all_matchers(&dictionary, true) {
        for (confirmed, next) in [("", 't'), ("tes", 't'), ("test_thi", 's'), ("", '!')] {
            if matcher.confirms(confirmed, next) {
                assert!(
                    matcher.could_extend(confirmed, next, false),
                    "{} confirms but cannot extend {confirmed:?} + {next:?}",
                    matcher.name()
                );
                assert!(
                    matcher.could_extend(confirmed, next, true),
                    "{} must collapse to confirms at end of input",
                    matcher.name()
                );
            }
        }
    }
}
