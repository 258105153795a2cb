// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Respeak error types and exit codes.
//!
//! The scanner core is infallible; these errors cover only the I/O shell
//! around it (reading input, loading a dictionary, writing the log).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dictionary file missing, unreadable, or empty
    #[error("dictionary error: {}: {}", .path.display(), .message)]
    Dictionary { path: PathBuf, message: String },

    /// File I/O error
    #[error("io error: {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using the respeak Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// History written successfully
    Success = 0,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Dictionary { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
