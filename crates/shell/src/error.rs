// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command substitution.

use crate::Span;
use thiserror::Error;

/// Errors that abort a substitution pass.
///
/// Every variant is terminal: no partially expanded command is ever
/// dispatched once one of these is returned.
#[derive(Debug, Error)]
pub enum SubstError {
    /// An opening back-quote has no closing partner.
    #[error("mismatched ` quotes at position {}", span.start)]
    MismatchedDelimiter {
        /// From the unmatched back-quote to the end of input.
        span: Span,
    },

    /// The host shell could not be started for an expression.
    #[error("couldn't open pipe for \"{expression}\": {source}")]
    LaunchFailed {
        /// The expression text between the back-quotes.
        expression: String,
        source: std::io::Error,
        /// Location of the expression, delimiters included.
        span: Span,
    },

    /// Reading an expression's output or reaping its process failed.
    #[error("failed to capture output of \"{expression}\": {source}")]
    CaptureFailed {
        /// The expression text between the back-quotes.
        expression: String,
        source: std::io::Error,
        /// Location of the expression, delimiters included.
        span: Span,
    },

    /// The expanded command could not be handed to the host shell.
    #[error("failed to run `{command}`: {source}")]
    DispatchFailed {
        command: String,
        source: std::io::Error,
    },
}

impl SubstError {
    /// Process exit code reported for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            SubstError::MismatchedDelimiter { .. } => 2,
            SubstError::LaunchFailed { .. } => 3,
            SubstError::CaptureFailed { .. } => 4,
            SubstError::DispatchFailed { .. } => 5,
        }
    }

    /// Returns the source span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            SubstError::MismatchedDelimiter { span }
            | SubstError::LaunchFailed { span, .. }
            | SubstError::CaptureFailed { span, .. } => Some(*span),
            SubstError::DispatchFailed { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
