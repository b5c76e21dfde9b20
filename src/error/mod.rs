// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       BuildError (<= 24 bytes)
//!             |
//!     +-------+-------+
//!     |       |       |
//!     v       v       v
//!   Bail     Cfg     Proc
//!  Box<str>  Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config   InvalidValue, UnknownProject
//!   Process  ExecutableNotFound, NoRuntime, SpawnFailed, NonZeroExit,
//!            UnsupportedToolchain, MissingArgument
//! ```

use thiserror::Error;

use crate::project::{BuildTool, ProjectType};

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// Sub-errors are boxed so the enum stays at three words.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

/// Create a fatal [`BuildError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> BuildError {
    BuildError::Bailed(message.into().into_boxed_str())
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BuildError {
                fn from(err: $error) -> Self {
                    BuildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// No `[projects.<name>]` table for the requested project.
    #[error("project '{0}' is not defined in any [projects] table")]
    UnknownProject(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// `spawn` was called without a Tokio runtime to drive the child.
    #[error("cannot start '{command}' outside a Tokio runtime")]
    NoRuntime { command: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The project's type/tool pair has no command line for this operation.
    #[error("no '{operation}' command for {project_type} projects built with {build_tool}")]
    UnsupportedToolchain {
        operation: String,
        project_type: ProjectType,
        build_tool: BuildTool,
    },

    /// A positional argument the launcher depends on was not supplied.
    #[error("missing positional argument at index {index} (got {len} arguments)")]
    MissingArgument { index: usize, len: usize },
}
