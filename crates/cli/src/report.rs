// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debug and verbose presentation around the expansion.
//!
//! `Report` is built once from the parsed flags and handed to every place
//! that decides whether to print, so no output switch lives in globals.

use std::io::{self, Write};

/// Which diagnostic output is enabled for this invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Print arguments, flags and the resulting command.
    pub debug: bool,
    /// Echo the resulting command to stderr before running it.
    pub verbose: bool,
    /// Print the resulting command instead of running it.
    pub dry_run: bool,
}

impl Report {
    /// Debug: the raw argument vector and the parsed flags.
    pub fn write_arguments<W: Write>(&self, out: &mut W, argv: &[String]) -> io::Result<()> {
        if !self.debug {
            return Ok(());
        }
        writeln!(out, "Arguments: {:?}", argv)?;
        writeln!(
            out,
            "Flags: debug={} verbose={} dry_run={}",
            self.debug, self.verbose, self.dry_run
        )?;
        out.flush()
    }

    /// Show the expanded command according to the enabled flags.
    ///
    /// Debug output goes to `out` with the character count, as does the
    /// dry-run listing (printed once even when both are on). Verbose output
    /// goes to `err` prefixed with `+ `.
    pub fn write_expanded<W: Write, E: Write>(
        &self,
        out: &mut W,
        err: &mut E,
        command: &str,
    ) -> io::Result<()> {
        if self.debug {
            writeln!(
                out,
                "Resulting command is {} characters.",
                command.chars().count()
            )?;
            writeln!(out, "{}", command)?;
        } else if self.dry_run {
            writeln!(out, "{}", command)?;
        }
        out.flush()?;

        if self.verbose && !self.dry_run {
            writeln!(err, "+ {}", command)?;
            err.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
