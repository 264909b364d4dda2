// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembling the expanded command from lexed segments.
//!
//! # Example
//!
//! ```no_run
//! use csub_shell::Substitutor;
//!
//! # async fn example() -> Result<(), csub_shell::SubstError> {
//! let substitutor = Substitutor::new();
//! let command = substitutor.expand("echo Text files: `ls *.txt`").await?;
//! let exit_code = substitutor.dispatch(&command).await?;
//! # Ok(())
//! # }
//! ```

use crate::exec::{Evaluate, HostShell, ShellEvaluator};
use crate::lexer::{Lexer, Segment, BACKQUOTE};
use crate::text::trim_trailing;
use crate::SubstError;

/// Build the expanded command from `segments`.
///
/// Expressions are evaluated one at a time in textual order. After each
/// substitution a separator space is appended and trailing whitespace is
/// trimmed, so the result never ends in a dangling separator and any
/// following literal text keeps its own spacing.
pub async fn expand_segments<E: Evaluate + ?Sized>(
    segments: &[Segment],
    evaluator: &mut E,
) -> Result<String, SubstError> {
    let mut command = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => command.push_str(text),
            Segment::Backquote => command.push(BACKQUOTE),
            Segment::Expression { text, span } => {
                let output = evaluator.evaluate(text, *span).await?;
                command.push_str(&output);
                command.push(' ');
                trim_trailing(&mut command);
            }
        }
    }
    Ok(command)
}

/// Expands back-quoted expressions in a command line and runs the result.
///
/// Create one with [`Substitutor::new`], optionally pick the interpreter
/// with [`shell`](Substitutor::shell), then call
/// [`expand`](Substitutor::expand).
#[derive(Debug, Clone, Default)]
pub struct Substitutor {
    shell: HostShell,
}

impl Substitutor {
    /// Create a substitutor using the platform's default host shell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpreter used for expressions and for dispatch.
    pub fn shell(mut self, shell: HostShell) -> Self {
        self.shell = shell;
        self
    }

    /// The configured interpreter.
    pub fn host_shell(&self) -> &HostShell {
        &self.shell
    }

    /// Expand every expression in `raw` by running it through the host shell.
    pub async fn expand(&self, raw: &str) -> Result<String, SubstError> {
        let mut evaluator = ShellEvaluator::new(self.shell.clone());
        self.expand_with(raw, &mut evaluator).await
    }

    /// Expand `raw`, producing substitution text with `evaluator`.
    ///
    /// The whole line is lexed first; a mismatched back-quote anywhere
    /// fails before any expression is evaluated.
    pub async fn expand_with<E: Evaluate + ?Sized>(
        &self,
        raw: &str,
        evaluator: &mut E,
    ) -> Result<String, SubstError> {
        let segments = Lexer::tokenize(raw)?;
        let expressions = segments
            .iter()
            .filter(|s| matches!(s, Segment::Expression { .. }))
            .count();
        tracing::debug!(segments = segments.len(), expressions, "lexed command line");
        expand_segments(&segments, evaluator).await
    }

    /// Run an expanded command and return its exit code.
    pub async fn dispatch(&self, command: &str) -> Result<i32, SubstError> {
        self.shell.dispatch(command).await
    }
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
