// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spoken forms for single characters.
//!
//! A fixed, total table mapping every supported punctuation character,
//! letter, digit, and the space character to the word a voice user would
//! say to produce it. The letter names follow the Talon community
//! alphabet. Newline is deliberately absent: it belongs to the dedicated
//! newline matcher, not this table.

/// Spoken form for `character`, or `None` if it is not in the table.
pub fn spoken_form(character: char) -> Option<&'static str> {
    let form = match character {
        '.' => "dot",
        '\'' => "quote",
        '?' => "question",
        '[' => "square",
        ']' => "right square",
        '/' => "slash",
        '\\' => "backslash",
        '-' => "dash",
        '=' => "equals",
        '+' => "plus",
        '`' => "grave",
        '~' => "tilde",
        '!' => "bang",
        '_' => "underscore",
        '(' => "paren",
        ')' => "right paren",
        '{' => "brace",
        '}' => "right brace",
        '<' => "angle",
        '>' => "rangle",
        '*' => "star",
        '#' => "hash",
        '%' => "percent",
        '^' => "caret",
        '&' => "amper",
        '|' => "pipe",
        '"' => "double",
        '$' => "dollar",
        '£' => "pound",
        '@' => "at",
        ':' => "colon",
        ';' => "semicolon",
        ',' => "comma",
        'a' => "air",
        'b' => "bat",
        'c' => "cap",
        'd' => "drum",
        'e' => "each",
        'f' => "fine",
        'g' => "gust",
        'h' => "harp",
        'i' => "sit",
        'j' => "jury",
        'k' => "crunch",
        'l' => "look",
        'm' => "made",
        'n' => "near",
        'o' => "odd",
        'p' => "pit",
        'q' => "quench",
        'r' => "red",
        's' => "sun",
        't' => "trap",
        'u' => "urge",
        'v' => "vest",
        'w' => "whale",
        'x' => "plex",
        'y' => "yank",
        'z' => "zip",
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        'A' => "arch",
        'B' => "barn",
        'C' => "cow",
        'D' => "dime",
        'E' => "earth",
        'F' => "faint",
        'G' => "gnome",
        'H' => "ham",
        'I' => "knight",
        'J' => "Jane",
        'K' => "keen",
        'L' => "lime",
        'M' => "moon",
        'N' => "nice",
        'O' => "old",
        'P' => "peach",
        'Q' => "quip",
        'R' => "rhyme",
        'S' => "sand",
        'T' => "treat",
        'U' => "um",
        'V' => "veil",
        'W' => "whip",
        'X' => "sphinx",
        'Y' => "year",
        'Z' => "cheese",
        ' ' => "space",
        _ => return None,
    };
    Some(form)
}

/// Whether `character` has a spoken form.
pub fn is_symbol(character: char) -> bool {
    spoken_form(character).is_some()
}

#[cfg(test)]
#[path = "symbols_tests.rs"]
mod tests;
