// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace trimming and metacharacter escaping for substituted output.

/// Characters escaped when spliced from child output into a command line.
pub const METACHARACTERS: &[char] = &[
    '&', '<', '>', '(', ')', '[', ']', '{', '}', '^', '=', ';', '!', '\'', '+', ',', '`', '~',
];

/// Characters removed by [`trim_trailing`].
pub const TRAILING_WHITESPACE: &[char] = &[' ', '\r', '\n', '\t'];

#[inline]
pub fn is_metacharacter(ch: char) -> bool {
    METACHARACTERS.contains(&ch)
}

/// Remove trailing space, CR, LF and tab in place.
pub fn trim_trailing(buf: &mut String) {
    let len = buf.trim_end_matches(TRAILING_WHITESPACE).len();
    buf.truncate(len);
}

/// Append `line` to `buf`, placing `prefix` before every metacharacter.
///
/// The prefix itself is escaped too, so a prefix character in `line` can
/// never pair with the one inserted before a following metacharacter.
pub fn push_escaped(buf: &mut String, line: &str, prefix: char) {
    buf.reserve(line.len());
    for ch in line.chars() {
        if is_metacharacter(ch) || ch == prefix {
            buf.push(prefix);
        }
        buf.push(ch);
    }
}

/// Folds a child's output lines into one space-joined, escaped string.
///
/// Each line is escaped and appended, the result is trimmed, and a single
/// separator space follows. [`finish`](OutputFolder::finish) drops the last
/// separator.
#[derive(Debug)]
pub struct OutputFolder {
    buf: String,
    escape: char,
    lines: usize,
}

impl OutputFolder {
    pub fn new(escape: char) -> Self {
        Self {
            buf: String::new(),
            escape,
            lines: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        push_escaped(&mut self.buf, line, self.escape);
        trim_trailing(&mut self.buf);
        self.buf.push(' ');
        self.lines += 1;
    }

    /// Number of lines folded so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn finish(mut self) -> String {
        trim_trailing(&mut self.buf);
        self.buf
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
