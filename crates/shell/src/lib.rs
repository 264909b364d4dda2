// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Back-quote command substitution for command lines.
//!
//! Given a command line such as ``echo Text files: `ls *.txt` ``, this crate
//! runs every back-quoted expression through the host shell, folds its
//! output onto one line, escapes shell metacharacters in it, and splices it
//! back in place. The expanded line can then be dispatched to the same
//! shell.
//!
//! # Quick Start
//!
//! ```no_run
//! use csub_shell::Substitutor;
//!
//! # async fn example() -> Result<(), csub_shell::SubstError> {
//! let substitutor = Substitutor::new();
//! let command = substitutor.expand("echo `date`").await?;
//! let exit_code = substitutor.dispatch(&command).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Rules
//!
//! - `` `expr` `` runs `expr` and substitutes its space-joined output
//! - ` `` ` (a doubled back-quote) is one literal back-quote
//! - an unmatched back-quote fails the whole line before anything runs
//! - only substituted output is escaped; literal text passes through as is
//! - expressions do not nest and substituted output is not rescanned
//!
//! # Pipeline
//!
//! ```text
//! raw line ──Lexer──▶ Segment[] ──expand_segments──▶ expanded line ──dispatch──▶ exit code
//!                                      │
//!                                      └── Evaluate (ShellEvaluator) per expression
//! ```

mod error;
pub mod exec;
mod expand;
pub mod lexer;
pub mod span;
pub mod text;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::SubstError;
pub use exec::{Evaluate, HostShell, ShellEvaluator};
pub use expand::{expand_segments, Substitutor};
pub use lexer::{Lexer, Segment};
pub use span::{context_snippet, Span};
