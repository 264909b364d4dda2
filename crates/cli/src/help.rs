// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage banner and help text.
//!
//! Help is rendered with `Styles::plain()` so the banner and the clap
//! output look the same whether or not stderr is a terminal.

use std::io::Write;

use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    Styles::plain()
}

/// Usage line shown by `--help` and the bare banner.
pub const USAGE: &str = "csub [OPTIONS] <COMMAND>...";

/// Banner printed when csub is run without a command.
pub fn banner() -> String {
    format!(
        "\
csub: Perform command-substitution on a given command.
usage: csub <command> `<expr>` <string> ... `<expr>` <string> ...
       {USAGE}

Run 'csub --help' for options.
"
    )
}

/// Rules and examples shown after the options list.
pub fn after_help() -> String {
    "\
Substitution:
  `expr`      Run expr and insert its output, lines joined by spaces
  ``          Insert one literal back-quote
  Options are only recognized before the command. Shell metacharacters in
  substituted output are escaped for the host shell.

Environment:
  CSUB_SHELL  Interpreter for expressions and the final command
  CSUB_LOG    Log filter (e.g. debug, csub_shell=trace)

Examples:
  csub echo Text files: `ls *.txt`
  csub -n tar czf backup.tgz `git ls-files`"
        .to_string()
}

/// Print the banner to stderr.
pub fn print_banner() {
    let mut stderr = std::io::stderr();
    let _ = stderr.write_all(banner().as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
