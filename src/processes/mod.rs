// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain processes launched for a project.
//!
//! ```text
//! (Project, Operation, args)
//!        |
//!        v
//! match project.toolchain()
//!   (Rust, Cargo)       --> CargoToolchain   cargo fmt | build | ...
//!   (TypeScript, Yarn)  --> YarnToolchain    yarn build | lint
//!   otherwise           --> no command (UnsupportedToolchain)
//!        |
//!        v
//! Launch { ProcessBuilder, cwd = base_dir + "/" + args[2], stderr inherited,
//!          stdout: fmt --> log, other operations --> inherited }
//!        |
//!        v
//! start() --> ProcessHandle (running, owned by the caller)
//! ```

pub mod cargo;
pub mod yarn;

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;
use crate::error::{ProcessError, Result};
use crate::process::{OutputMode, ProcessBuilder, ProcessHandle};
use crate::project::{BuildTool, Project, ProjectType};

use cargo::CargoToolchain;
use yarn::YarnToolchain;

/// Position of the project directory in the launcher argument list.
///
/// The list is `[program, operation, directory, ...]`.
pub const WORKDIR_ARG_INDEX: usize = 2;

/// Operation requested for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Build,
    Check,
    Clippy,
    Fmt,
    Test,
    Lint,
}

impl Operation {
    /// Where the child's stdout goes: logged for `fmt`, the terminal otherwise.
    #[must_use]
    pub const fn stdout_mode(self) -> OutputMode {
        match self {
            Self::Fmt => OutputMode::Log,
            Self::Build | Self::Check | Self::Clippy | Self::Test | Self::Lint => {
                OutputMode::Inherit
            }
        }
    }

    /// Returns the command-line spelling of this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Check => "check",
            Self::Clippy => "clippy",
            Self::Fmt => "fmt",
            Self::Test => "test",
            Self::Lint => "lint",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context shared by every launch of one invocation.
#[derive(Clone)]
pub struct ProcessContext {
    config: Arc<Config>,
    cancel_token: CancellationToken,
    dry_run: bool,
    base_dir: Option<PathBuf>,
}

impl ProcessContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            config,
            cancel_token,
            dry_run,
            base_dir: None,
        }
    }

    /// Resolves project directories against `dir` instead of the current directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// When true, launches are logged instead of started.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Directory the project argument is relative to.
    ///
    /// # Errors
    ///
    /// Returns an error if no base directory was set and the current
    /// directory cannot be determined.
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to read the current directory"),
        }
    }
}

/// A build tool that knows the command line for each operation it supports.
pub trait Toolchain: Send + Sync {
    /// Returns the name of the tool (e.g. "cargo").
    fn name(&self) -> &'static str;

    /// Returns the arguments after the program for `operation`, or `None`
    /// when the tool has no such command.
    fn command(&self, operation: Operation, project: &Project) -> Option<Vec<&'static str>>;

    /// Returns a builder for the tool's executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable has to be looked up in PATH and is
    /// not there.
    fn program(&self, ctx: &ProcessContext) -> Result<ProcessBuilder>;
}

/// Builder for a configured tool path.
///
/// An empty path resolves `name` through PATH up front.
fn tool_builder(path: &Path, name: &str) -> Result<ProcessBuilder> {
    if path.as_os_str().is_empty() {
        Ok(ProcessBuilder::which(name)?)
    } else {
        Ok(ProcessBuilder::new(path))
    }
}

/// Picks the toolchain for a project's type/tool pair.
#[must_use]
pub fn toolchain_for(project: &Project) -> Option<&'static dyn Toolchain> {
    match project.toolchain() {
        (ProjectType::Rust, BuildTool::Cargo) => Some(&CargoToolchain),
        (ProjectType::TypeScript, BuildTool::Yarn) => Some(&YarnToolchain),
        _ => None,
    }
}

/// Joins the directory argument onto `base`.
///
/// The argument is always taken relative to `base`: root and drive prefix
/// components (`/x`, `C:x`, `C:\x`) are dropped before joining.
///
/// # Errors
///
/// Returns `ProcessError::MissingArgument` when `args` has no entry at
/// [`WORKDIR_ARG_INDEX`].
pub fn working_dir(base: &Path, args: &[String]) -> std::result::Result<PathBuf, ProcessError> {
    let dir = args
        .get(WORKDIR_ARG_INDEX)
        .ok_or(ProcessError::MissingArgument {
            index: WORKDIR_ARG_INDEX,
            len: args.len(),
        })?;
    let relative: PathBuf = Path::new(dir)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    Ok(base.join(relative))
}

/// A fully resolved process for one project operation, not yet started.
#[derive(Debug, Clone)]
pub struct Launch {
    project: String,
    operation: Operation,
    builder: ProcessBuilder,
}

impl Launch {
    /// Resolves the command line and working directory for `operation`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::UnsupportedToolchain` when the project's
    /// type/tool pair has no command for `operation`, and
    /// `ProcessError::MissingArgument` when `args` has no directory.
    pub fn plan(
        ctx: &ProcessContext,
        project: &Project,
        operation: Operation,
        args: &[String],
    ) -> Result<Self> {
        let unsupported = || ProcessError::UnsupportedToolchain {
            operation: operation.to_string(),
            project_type: project.project_type(),
            build_tool: project.build_tool(),
        };

        let toolchain = toolchain_for(project).ok_or_else(unsupported)?;
        let command = toolchain
            .command(operation, project)
            .ok_or_else(unsupported)?;
        let cwd = working_dir(&ctx.base_dir()?, args)?;

        let builder = toolchain
            .program(ctx)?
            .args(command)
            .cwd(cwd)
            .stdout(operation.stdout_mode())
            .stderr(OutputMode::Inherit)
            .name(format!("{}:{operation}", project.name()));

        Ok(Self {
            project: project.name().to_string(),
            operation,
            builder,
        })
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the command line, e.g. `cargo fmt`.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.builder.command_line()
    }

    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.builder.working_dir().map(PathBuf::as_path)
    }

    #[must_use]
    pub const fn builder(&self) -> &ProcessBuilder {
        &self.builder
    }

    /// Starts the process and hands back its handle.
    ///
    /// In dry-run mode nothing is started and `None` is returned. Otherwise
    /// this must run inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no Tokio runtime or the OS fails to start
    /// the process.
    pub fn start(&self, ctx: &ProcessContext) -> Result<Option<ProcessHandle>> {
        if ctx.is_dry_run() {
            let cwd = self
                .working_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default();
            info!(
                "[dry-run] Would run '{}' in {cwd} for {}",
                self.command_line(),
                self.project
            );
            return Ok(None);
        }

        let handle = self
            .builder
            .spawn()
            .with_context(|| format!("failed to start {} for {}", self.operation, self.project))?;
        info!(project = %self.project, pid = ?handle.id(), "Started {}", self.operation);
        Ok(Some(handle))
    }
}

/// Plans and starts `operation` for `project` in one step.
///
/// # Errors
///
/// See [`Launch::plan`] and [`Launch::start`].
pub fn start(
    ctx: &ProcessContext,
    project: &Project,
    operation: Operation,
    args: &[String],
) -> Result<Option<ProcessHandle>> {
    Launch::plan(ctx, project, operation, args)?.start(ctx)
}
