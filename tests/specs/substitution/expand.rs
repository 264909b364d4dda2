//! Expansion specs, observed through `--dry-run`

use crate::prelude::*;

#[test]
fn plain_command_is_unchanged() {
    csub()
        .args(&["-n", "echo", "a|b", "> out.txt"])
        .passes()
        .stdout_eq("echo a|b > out.txt\n");
}

#[test]
fn listing_is_joined_onto_one_line() {
    let temp = Project::empty();
    temp.file("CMakeLists.txt", "");
    temp.file("LICENSE.txt", "");
    temp.file("notes.md", "");

    temp.csub()
        .args(&["-n", "echo", "Text", "files:", "`ls *.txt`"])
        .passes()
        .stdout_eq("echo Text files: CMakeLists.txt LICENSE.txt\n");
}

#[test]
fn doubled_backquote_is_literal() {
    csub()
        .args(&["-n", "echo", "``", "done"])
        .passes()
        .stdout_eq("echo ` done\n");
}

#[test]
fn empty_output_leaves_single_space() {
    csub()
        .args(&["-n", "echo", "`true`", "done"])
        .passes()
        .stdout_eq("echo done\n");
}

#[test]
fn metacharacters_in_output_are_escaped() {
    csub()
        .args(&["-n", "echo", "`echo 'foo&bar (x)'`"])
        .passes()
        .stdout_eq("echo foo\\&bar \\(x\\)\n");
}

#[test]
fn several_expressions_in_order() {
    csub()
        .args(&["-n", "`echo one`", "`printf 'two\\nthree\\n'`", "four"])
        .passes()
        .stdout_eq("one two three four\n");
}

#[test]
fn failing_expression_contributes_its_output() {
    csub()
        .args(&["-n", "echo", "`echo partial; exit 4`", "end"])
        .passes()
        .stdout_eq("echo partial end\n");
}

#[test]
fn caret_in_output_is_escaped() {
    csub()
        .args(&["-n", "echo", "`echo '^'`"])
        .passes()
        .stdout_eq("echo \\^\n");
}
