//! Dispatch specs: the expanded command runs through the host shell

use crate::prelude::*;

#[test]
fn substituted_command_runs() {
    csub()
        .args(&["echo", "`echo hello`", "world"])
        .passes()
        .stdout_eq("hello world\n");
}

#[test]
fn exit_code_is_propagated() {
    csub().args(&["exit", "3"]).exits_with(3);
}

#[test]
fn exit_code_from_substituted_test() {
    csub().args(&["test", "`echo 1`", "-eq", "2"]).exits_with(1);
}

#[test]
fn escaped_output_is_literal_to_the_shell() {
    // Without escaping, `;` would split the command and `b` would run.
    csub()
        .args(&["echo", "`echo 'a;b'`"])
        .passes()
        .stdout_eq("a;b\n");
}

#[test]
fn flags_after_command_reach_the_command() {
    csub()
        .args(&["printf", "'%s-%s\\n'", "-d", "-n"])
        .passes()
        .stdout_eq("-d--n\n");
}

#[test]
fn runs_in_current_directory() {
    let temp = Project::empty();
    temp.file("marker.txt", "found\n");
    temp.csub()
        .args(&["cat", "`ls marker.*`"])
        .passes()
        .stdout_eq("found\n");
}

#[test]
fn csub_shell_overrides_interpreter() {
    // echo as "shell" prints its flag and command string instead of running it.
    csub()
        .args(&["run", "`anything`"])
        .env("CSUB_SHELL", "/bin/echo")
        .passes()
        .stdout_eq("-c run -c anything\n");
}
