// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capitalization classification for word sequences.

/// Casing of one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCase {
    /// Every letter lowercase.
    Lower,
    /// Every letter uppercase (includes single capital letters).
    Upper,
    /// First letter uppercase, the rest lowercase.
    Capitalized,
    /// Anything else.
    Mixed,
}

/// Classify one token's casing. Non-letter characters count as mixed.
pub fn token_case(token: &str) -> TokenCase {
    if token.is_empty() || !token.chars().all(char::is_alphabetic) {
        return TokenCase::Mixed;
    }
    if token.chars().all(char::is_uppercase) {
        return TokenCase::Upper;
    }
    if token.chars().all(char::is_lowercase) {
        return TokenCase::Lower;
    }
    let mut chars = token.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    if first_upper && chars.all(char::is_lowercase) {
        return TokenCase::Capitalized;
    }
    TokenCase::Mixed
}

/// Aggregate case format across a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    /// All tokens lowercase.
    Lower,
    /// All tokens uppercase.
    Upper,
    /// Lowercase first token, capitalized continuation.
    Camel,
    /// Capitalized throughout.
    Pascal,
    /// Inconsistent.
    Other,
}

/// Compute the aggregate case format.
///
/// Any mixed token forces `Other`, as does any transition that is not a
/// camel continuation, pascal continuation, all-upper, or all-lower.
pub fn case_format(tokens: &[&str]) -> CaseFormat {
    if tokens.is_empty() {
        return CaseFormat::Other;
    }
    let cases: Vec<TokenCase> = tokens.iter().map(|t| token_case(t)).collect();
    if cases.contains(&TokenCase::Mixed) {
        return CaseFormat::Other;
    }
    if cases.iter().all(|c| *c == TokenCase::Upper) {
        return CaseFormat::Upper;
    }
    if cases.iter().all(|c| *c == TokenCase::Lower) {
        return CaseFormat::Lower;
    }
    // A single capital letter continues either a camel or a pascal run.
    let continues = |case: TokenCase, token: &str| {
        case == TokenCase::Capitalized
            || (case == TokenCase::Upper && token.chars().count() == 1)
    };
    let rest_capitalized = cases
        .iter()
        .zip(tokens)
        .skip(1)
        .all(|(case, token)| continues(*case, token));
    if cases[0] == TokenCase::Lower && rest_capitalized {
        return CaseFormat::Camel;
    }
    if continues(cases[0], tokens[0]) && rest_capitalized {
        return CaseFormat::Pascal;
    }
    CaseFormat::Other
}

#[cfg(test)]
#[path = "casing_tests.rs"]
mod tests;
