// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Handlers return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use csub_shell::SubstError;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Wrap a substitution failure, appending a caret snippet of `raw` when
    /// the failure points into the command line.
    pub fn from_subst(err: &SubstError, raw: &str) -> Self {
        let mut message = err.to_string();
        if let SubstError::MismatchedDelimiter { span } = err {
            message.push('\n');
            message.push_str(&csub_shell::context_snippet(raw, *span, SNIPPET_CONTEXT));
        }
        Self::new(err.exit_code(), message)
    }
}

/// Characters of command line shown on each side of an error location.
const SNIPPET_CONTEXT: usize = 40;

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
