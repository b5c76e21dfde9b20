// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning, output forwarding and waiting.
//!
//! ```text
//! spawn()
//!    no Tokio runtime --> ProcessError::NoRuntime
//!    Command::spawn() --> ProcessError::SpawnFailed
//!    one reader task per OutputMode::Log stream
//!       |
//!       v
//! ProcessHandle
//!    wait_with_cancellation(token)
//!       child exits     --> code 0 ok, else NonZeroExit
//!       token cancelled --> kill, ProcessExit { interrupted: true }
//! ```

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::builder::{OutputMode, ProcessBuilder};
use crate::error::{ProcessError, Result};

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    code: i32,
    interrupted: bool,
}

impl ProcessExit {
    /// Exit code, `-1` when the child was ended by a signal.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// True when the child was killed because of a cancellation.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0 && !self.interrupted
    }
}

impl ProcessBuilder {
    /// Starts the process and returns a handle without waiting for it.
    ///
    /// Must be called from within a Tokio runtime; the child is reaped and its
    /// logged output is read by the runtime.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::NoRuntime` outside a Tokio runtime and
    /// `ProcessError::SpawnFailed` if the OS refuses to start the process
    /// (missing executable, invalid working directory, ...).
    pub fn spawn(&self) -> std::result::Result<ProcessHandle, ProcessError> {
        let command_line = self.command_line();
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(ProcessError::NoRuntime {
                command: command_line,
            });
        }

        let name = self.display_name();
        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %command_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let readers = [
            log_lines(child.stdout.take(), &name, "stdout"),
            log_lines(child.stderr.take(), &name, "stderr"),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(ProcessHandle {
            child,
            name,
            command_line,
            readers,
        })
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());
        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.stdin(Stdio::null());
        command.stdout(stdio(self.stdout_mode()));
        command.stderr(stdio(self.stderr_mode()));
        command.kill_on_drop(true);
        command
    }
}

fn stdio(mode: OutputMode) -> Stdio {
    match mode {
        OutputMode::Log => Stdio::piped(),
        OutputMode::Inherit => Stdio::inherit(),
    }
}

/// Forwards each line of a piped stream to the log.
fn log_lines<R>(
    stream: Option<R>,
    process: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let process = process.to_string();
    stream.map(|stream| {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => info!(process = %process, stream = stream_name, "{line}"),
                    Ok(None) => break,
                    Err(e) => {
                        warn!(
                            process = %process,
                            stream = stream_name,
                            error = %e,
                            "error reading stream"
                        );
                        break;
                    }
                }
            }
        })
    })
}

/// A running child process.
///
/// Dropping the handle kills the child.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
    name: String,
    command_line: String,
    readers: Vec<JoinHandle<()>>,
}

impl ProcessHandle {
    /// OS process id, if the child has not been reaped yet.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Waits for the process to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting fails or the exit code is not zero.
    pub async fn wait(self) -> Result<ProcessExit> {
        self.wait_with_cancellation(CancellationToken::new()).await
    }

    /// Waits for the process, killing it if `token` is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting fails or the process exits on its own with
    /// a non-zero code.
    pub async fn wait_with_cancellation(
        mut self,
        token: CancellationToken,
    ) -> Result<ProcessExit> {
        let (status, interrupted) = tokio::select! {
            status = self.child.wait() => (status?, false),
            () = token.cancelled() => {
                warn!(process = %self.name, "Cancellation requested, terminating process");
                self.child.kill().await.ok();
                let status = self
                    .child
                    .wait()
                    .await
                    .with_context(|| format!("failed waiting for process {} to exit", self.name))?;
                (status, true)
            }
        };

        for reader in self.readers.drain(..) {
            reader.await.ok();
        }

        let exit = ProcessExit {
            code: status.code().unwrap_or(-1),
            interrupted,
        };
        if !interrupted && exit.code != 0 {
            return Err(ProcessError::NonZeroExit {
                command: self.command_line.clone(),
                code: exit.code,
            }
            .into());
        }

        trace!(process = %self.name, exit_code = exit.code, interrupted, "completed");
        Ok(exit)
    }
}
