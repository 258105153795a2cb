// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};

/// Returns a Command configured to run the respeak binary.
pub fn respeak_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("respeak"))
}

/// Create a temp directory for one spec.
pub fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write a file under `dir` and return its path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
