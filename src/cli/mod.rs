// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for hartex-build using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hartex-build [global options] <command>
//! build|check|clippy|fmt|test|lint <PROJECT>
//! list [PATTERN]
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod project;


use crate::cli::global::GlobalOptions;
use crate::cli::project::{ListArgs, ProjectArgs};
use crate::processes::Operation;
use clap::{Parser, Subcommand};

/// HarTex Build System
///
/// Runs cargo and yarn for the projects of the HarTex repository.
#[derive(Debug, Parser)]
#[command(
    name = "hartex-build",
    author,
    version,
    about = "HarTex Build System",
    long_about = "hartex-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs cargo and yarn for the projects of the HarTex repository.\n\n\
                  `hartex-build fmt discord-frontend` runs `cargo fmt` in the\n\
                  discord-frontend directory below the current one. See\n\
                  `hartex-build <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  Projects are declared as [projects.<name>] tables in `hartex.toml`\n\
                  in the current directory. Additional files can be given with\n\
                  --config, those are loaded after `hartex.toml`. HARTEX_* environment\n\
                  variables (e.g. HARTEX_GLOBAL__DRY=true) and --set override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Lists configured projects.
    List(ListArgs),

    /// Builds a project.
    Build(ProjectArgs),

    /// Type-checks a Rust project.
    Check(ProjectArgs),

    /// Runs clippy on a Rust project.
    Clippy(ProjectArgs),

    /// Formats a Rust project with rustfmt.
    Fmt(ProjectArgs),

    /// Runs the tests of a Rust project.
    Test(ProjectArgs),

    /// Lints a TypeScript project.
    Lint(ProjectArgs),
}

impl Command {
    /// Splits a process command into its operation and arguments.
    #[must_use]
    pub const fn as_process(&self) -> Option<(Operation, &ProjectArgs)> {
        match self {
            Self::Build(args) => Some((Operation::Build, args)),
            Self::Check(args) => Some((Operation::Check, args)),
            Self::Clippy(args) => Some((Operation::Clippy, args)),
            Self::Fmt(args) => Some((Operation::Fmt, args)),
            Self::Test(args) => Some((Operation::Test, args)),
            Self::Lint(args) => Some((Operation::Lint, args)),
            Self::Version | Self::Options | Self::Configs | Self::List(_) => None,
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
