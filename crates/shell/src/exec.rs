// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running expressions and the expanded command through the host shell.
//!
//! Children are spawned with [`tokio::process::Command`]. Only standard
//! output is captured; standard input and standard error are inherited from
//! the calling process. An expression's exit status is traced but never
//! turns into an error: only a failure to start or read the child does.

use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::Instrument;

use crate::text::OutputFolder;
use crate::{Span, SubstError};

/// How commands are handed to the host command interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostShell {
    /// Interpreter program, e.g. `sh` or `cmd`.
    pub program: String,
    /// Flag that makes the program run its next argument as a command.
    pub flag: String,
    /// Prefix placed before metacharacters in substituted output.
    pub escape: char,
}

impl HostShell {
    /// Configure an interpreter by program name.
    ///
    /// `cmd` and `cmd.exe` run commands with `/C` and escape with `^`;
    /// every other program is treated as a POSIX shell (`-c`, `\`).
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        if is_cmd(&program) {
            Self {
                program,
                flag: "/C".to_string(),
                escape: '^',
            }
        } else {
            Self {
                program,
                flag: "-c".to_string(),
                escape: '\\',
            }
        }
    }

    /// Override the escape prefix.
    pub fn escape(mut self, prefix: char) -> Self {
        self.escape = prefix;
        self
    }

    /// Build a process that runs `command` through this interpreter.
    fn command(&self, command: &str) -> Command {
        let mut process = Command::new(&self.program);
        #[cfg(windows)]
        {
            if is_cmd(&self.program) {
                // cmd.exe does its own parsing; MSVC-style quoting would mangle it.
                process.raw_arg(&self.flag).raw_arg(command);
                return process;
            }
        }
        process.arg(&self.flag).arg(command);
        process
    }

    /// Run the expanded command with inherited stdio and return its exit code.
    ///
    /// A process terminated by a signal reports `128 + signal`.
    pub async fn dispatch(&self, command: &str) -> Result<i32, SubstError> {
        let cmd_span = tracing::info_span!(
            "csub.dispatch",
            shell = %self.program,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let start = Instant::now();

        let status = self
            .command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .instrument(cmd_span.clone())
            .await
            .map_err(|source| SubstError::DispatchFailed {
                command: command.to_string(),
                source,
            })?;

        let exit_code = exit_code(status);
        cmd_span.record("exit_code", exit_code);
        cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);
        Ok(exit_code)
    }
}

impl Default for HostShell {
    #[cfg(windows)]
    fn default() -> Self {
        Self::new("cmd")
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self::new("sh")
    }
}

fn is_cmd(program: &str) -> bool {
    let name = std::path::Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program);
    name.eq_ignore_ascii_case("cmd") || name.eq_ignore_ascii_case("cmd.exe")
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Produces the substitution text for one expression.
#[async_trait]
pub trait Evaluate: Send {
    /// Run `expression` and return its normalized, escaped output.
    ///
    /// `span` locates the expression in the raw command line for errors.
    async fn evaluate(&mut self, expression: &str, span: Span) -> Result<String, SubstError>;
}

/// Evaluates expressions by running them through a [`HostShell`].
#[derive(Debug, Clone, Default)]
pub struct ShellEvaluator {
    shell: HostShell,
}

impl ShellEvaluator {
    pub fn new(shell: HostShell) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl Evaluate for ShellEvaluator {
    async fn evaluate(&mut self, expression: &str, span: Span) -> Result<String, SubstError> {
        let cmd_span = tracing::info_span!(
            "csub.expr",
            expr = %expression,
            lines = tracing::field::Empty,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        self.capture(expression, span).instrument(cmd_span).await
    }
}

impl ShellEvaluator {
    async fn capture(&self, expression: &str, span: Span) -> Result<String, SubstError> {
        let start = Instant::now();
        let capture_failed = |source| SubstError::CaptureFailed {
            expression: expression.to_string(),
            source,
            span,
        };

        let mut child = self
            .shell
            .command(expression)
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SubstError::LaunchFailed {
                expression: expression.to_string(),
                source,
                span,
            })?;

        let mut folder = OutputFolder::new(self.shell.escape);
        if let Err(source) = read_lines(&mut child, &mut folder).await {
            // Reap before reporting so no zombie outlives the call.
            let _ = child.kill().await;
            return Err(capture_failed(source));
        }
        let status = child.wait().await.map_err(capture_failed)?;

        let exit_code = exit_code(status);
        let current = tracing::Span::current();
        current.record("lines", folder.lines());
        current.record("exit_code", exit_code);
        current.record("duration_ms", start.elapsed().as_millis() as u64);
        if exit_code != 0 {
            tracing::debug!(exit_code, "expression exited non-zero; output used as is");
        }

        Ok(folder.finish())
    }
}

/// Stream the child's stdout into `folder` until end of stream.
///
/// Lines are split on `\n` and decoded lossily so non-UTF-8 output still
/// substitutes; a trailing `\r` is removed by the folder's trimming.
async fn read_lines(child: &mut Child, folder: &mut OutputFolder) -> std::io::Result<()> {
    let Some(stdout) = child.stdout.take() else {
        return Ok(());
    };
    let mut lines = BufReader::new(stdout).split(b'\n');
    while let Some(line) = lines.next_segment().await? {
        folder.push_line(&String::from_utf8_lossy(&line));
    }
    Ok(())
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
