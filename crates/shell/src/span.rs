// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking within a raw command line.

/// A byte-offset range in the raw command line.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Extract the spanned text from the command line.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the command line with a caret line under `span`.
///
/// At most `context_chars` characters are shown on either side of the span
/// start. Line breaks inside the shown window are flattened to spaces so the
/// caret column stays aligned.
///
/// ```text
/// echo `date
///      ^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let span_start = span.start.min(input.len());

    let start = input[..span_start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(span_start);

    let end = input[span_start..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| span_start + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet: String = input[start..end]
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let caret_pos = input[start..span_start].chars().count();
    let caret_end = span.end.clamp(span_start, end);
    let caret_len = Span::new(span_start, caret_end)
        .slice(input)
        .chars()
        .count()
        .max(1);

    format!("{}\n{}{}", snippet, " ".repeat(caret_pos), "^".repeat(caret_len))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
