//! Help, version and usage banner specs

use crate::prelude::*;

#[test]
fn no_arguments_prints_banner_and_succeeds() {
    csub()
        .passes()
        .stdout_eq("")
        .stderr_has("csub: Perform command-substitution on a given command.")
        .stderr_has("usage: csub <command> `<expr>` <string>");
}

#[test]
fn flags_without_command_print_banner() {
    csub().args(&["-d"]).passes().stderr_has("usage: csub");
}

#[test]
fn help_shows_usage_and_options() {
    csub()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage: csub [OPTIONS] <COMMAND>...")
        .stdout_has("-d, --debug")
        .stdout_has("-v, --verbose")
        .stdout_has("-n, --dry-run")
        .stdout_has("CSUB_SHELL");
}

#[test]
fn version_shows_package_version() {
    csub()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("csub {}\n", env!("CARGO_PKG_VERSION")));
}
