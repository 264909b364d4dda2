// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use csub_shell::HostShell;

// --- Host shell ---

/// Raw CSUB_SHELL value, if set and non-empty.
pub fn shell_program() -> Option<String> {
    std::env::var("CSUB_SHELL").ok().filter(|s| !s.trim().is_empty())
}

/// Resolve host shell: CSUB_SHELL > platform default (`sh` or `cmd`).
pub fn host_shell() -> HostShell {
    shell_program().map(HostShell::new).unwrap_or_default()
}

// --- Logging ---

/// Tracing filter directive from CSUB_LOG.
pub fn log_filter() -> Option<String> {
    std::env::var("CSUB_LOG").ok().filter(|s| !s.is_empty())
}
