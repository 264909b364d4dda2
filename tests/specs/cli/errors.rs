//! Error reporting and exit code specs
//!
//! Every failure kind has its own exit code and nothing is dispatched once
//! expansion fails.

use crate::prelude::*;

#[test]
fn unmatched_backquote_exits_2_with_snippet() {
    csub()
        .args(&["echo", "`missing-close"])
        .exits_with(2)
        .stdout_eq("")
        .stderr_eq(
            "Error: mismatched ` quotes at position 5\n\
             echo `missing-close\n     ^^^^^^^^^^^^^^\n",
        );
}

#[test]
fn unmatched_backquote_runs_nothing() {
    let temp = Project::empty();
    temp.csub()
        .args(&["`touch before.txt`", "touch after.txt", "`oops"])
        .exits_with(2);
    assert!(!temp.has("before.txt"), "earlier expression must not run");
    assert!(!temp.has("after.txt"), "command must not be dispatched");
}

#[test]
fn unmatched_backquote_fails_even_in_dry_run() {
    csub()
        .args(&["-n", "echo", "```"])
        .exits_with(2)
        .stdout_eq("")
        .stderr_has("mismatched ` quotes at position 7");
}

#[test]
fn missing_shell_is_launch_failure() {
    csub()
        .args(&["echo", "`date`"])
        .env("CSUB_SHELL", "/nonexistent/shell_xyz_12345")
        .exits_with(3)
        .stderr_has("couldn't open pipe for \"date\"");
}

#[test]
fn missing_shell_without_expressions_is_dispatch_failure() {
    csub()
        .args(&["echo", "hi"])
        .env("CSUB_SHELL", "/nonexistent/shell_xyz_12345")
        .exits_with(5)
        .stderr_has("failed to run `echo hi`");
}

#[test]
fn unknown_option_is_usage_error_not_mismatch() {
    csub()
        .args(&["--bogus", "echo"])
        .exits_with(64)
        .stdout_eq("")
        .stderr_has("unexpected argument '--bogus'");
}

#[test]
fn uppercase_debug_flag_is_accepted() {
    csub()
        .args(&["-D", "-n", "echo", "hi"])
        .passes()
        .stdout_has("Flags: debug=true verbose=false dry_run=true")
        .stdout_has("Resulting command is 7 characters.\necho hi\n");
}
