// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the evaluator seam.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::exec::Evaluate;
use crate::text::OutputFolder;
use crate::{Span, SubstError};

/// Evaluator that answers from canned output and records every call.
///
/// Output registered with [`output`](FakeEvaluator::output) is folded the
/// same way real process output is, so tests exercise escaping and line
/// joining without spawning anything.
#[derive(Debug, Default)]
pub struct FakeEvaluator {
    outputs: HashMap<String, Vec<String>>,
    failures: HashMap<String, std::io::ErrorKind>,
    escape: Option<char>,
    calls: Vec<String>,
}

impl FakeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the output lines `expression` prints.
    pub fn output(mut self, expression: &str, lines: &[&str]) -> Self {
        self.outputs.insert(
            expression.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// Make `expression` fail to launch with `kind`.
    pub fn fail(mut self, expression: &str, kind: std::io::ErrorKind) -> Self {
        self.failures.insert(expression.to_string(), kind);
        self
    }

    /// Escape prefix used when folding output (default `^`).
    pub fn escape(mut self, prefix: char) -> Self {
        self.escape = Some(prefix);
        self
    }

    /// Expressions evaluated so far, in order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[async_trait]
impl Evaluate for FakeEvaluator {
    async fn evaluate(&mut self, expression: &str, span: Span) -> Result<String, SubstError> {
        self.calls.push(expression.to_string());
        if let Some(kind) = self.failures.get(expression) {
            return Err(SubstError::LaunchFailed {
                expression: expression.to_string(),
                source: std::io::Error::from(*kind),
                span,
            });
        }
        let mut folder = OutputFolder::new(self.escape.unwrap_or('^'));
        for line in self.outputs.get(expression).into_iter().flatten() {
            folder.push_line(line);
        }
        Ok(folder.finish())
    }
}
