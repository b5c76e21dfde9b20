// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line, working directory and stream routing of a child process.

use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Where one output stream of the child ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Piped and logged line by line at info level.
    #[default]
    Log,
    /// Shared with this process, written straight to the terminal.
    Inherit,
}

/// Builder for a toolchain child process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    stdout: OutputMode,
    stderr: OutputMode,
    name: Option<String>,
}

impl ProcessBuilder {
    /// Starts a builder for `program`.
    ///
    /// A bare name is looked up in PATH by the OS at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            stdout: OutputMode::default(),
            stderr: OutputMode::default(),
            name: None,
        }
    }

    /// Starts a builder for `program` resolved through PATH now.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if PATH has no such program.
    pub fn which(program: &str) -> std::result::Result<Self, ProcessError> {
        which::which(program)
            .map(Self::new)
            .map_err(|_| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn stdout(mut self, mode: OutputMode) -> Self {
        self.stdout = mode;
        self
    }

    #[must_use]
    pub const fn stderr(mut self, mode: OutputMode) -> Self {
        self.stderr = mode;
        self
    }

    /// Names the process in log lines (defaults to the program's file stem).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    #[must_use]
    pub const fn stdout_mode(&self) -> OutputMode {
        self.stdout
    }

    #[must_use]
    pub const fn stderr_mode(&self) -> OutputMode {
        self.stderr
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program
                .file_stem()
                .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
        })
    }

    /// Program and arguments as one string; arguments with spaces are quoted.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program.display().to_string();
        for arg in &self.args {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }
}
