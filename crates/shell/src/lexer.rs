// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Back-quote lexer for raw command lines.
//!
//! Splits a command line into literal text, escaped back-quotes and
//! back-quoted expressions. Nothing else in the line is interpreted; pipes,
//! quotes and redirections belong to the host shell and pass through as
//! literal text.
//!
//! ## Classification
//!
//! After an opening back-quote, the very next character decides:
//! - another back-quote: the pair is one literal back-quote (`` `` `` never
//!   means an empty expression);
//! - anything else: everything up to the next back-quote is an expression.
//!
//! Expressions do not nest, so a single forward pass with one character of
//! lookahead is enough.

use crate::{Span, SubstError};

/// The back-quote delimiter.
pub const BACKQUOTE: char = '`';

/// One classified piece of a raw command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim into the expanded command.
    Literal(String),
    /// A doubled back-quote, standing for one literal back-quote.
    Backquote,
    /// A command to run and substitute.
    Expression {
        /// Text between the delimiters, untouched.
        text: String,
        /// Location of the expression, delimiters included.
        span: Span,
    },
}

/// Back-quote lexer over a single command line.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// Fails with [`SubstError::MismatchedDelimiter`] if any opening
    /// back-quote is left unclosed, before any segment is acted upon.
    pub fn tokenize(input: &'a str) -> Result<Vec<Segment>, SubstError> {
        let mut lexer = Lexer::new(input);
        let mut segments = Vec::new();
        while let Some(segment) = lexer.next_segment()? {
            segments.push(segment);
        }
        Ok(segments)
    }

    /// Byte offset of the next unread character.
    #[inline]
    fn current_position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |(pos, _)| *pos)
    }

    /// Produce the next segment, or `None` at end of input.
    pub fn next_segment(&mut self) -> Result<Option<Segment>, SubstError> {
        let Some(&(start, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        if ch != BACKQUOTE {
            return Ok(Some(self.read_literal(start)));
        }

        self.chars.next(); // consume opening `
        if let Some(&(_, BACKQUOTE)) = self.chars.peek() {
            self.chars.next(); // consume second `
            return Ok(Some(Segment::Backquote));
        }

        let text = self.read_expression(start)?;
        Ok(Some(Segment::Expression {
            text,
            span: Span::new(start, self.current_position()),
        }))
    }

    /// Read literal text up to the next back-quote or end of input.
    fn read_literal(&mut self, start: usize) -> Segment {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == BACKQUOTE {
                break;
            }
            self.chars.next();
        }
        let end = self.current_position();
        Segment::Literal(self.input[start..end].to_string())
    }

    /// Read expression text until the closing back-quote and consume it.
    fn read_expression(&mut self, start: usize) -> Result<String, SubstError> {
        let content_start = self.current_position();
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == BACKQUOTE {
                let content = self.input[content_start..pos].to_string();
                self.chars.next(); // consume closing `
                return Ok(content);
            }
            self.chars.next();
        }

        Err(SubstError::MismatchedDelimiter {
            span: Span::new(start, self.input.len()),
        })
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
