// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the project commands.

use clap::Args;

use crate::processes::Operation;

/// Arguments for `build`, `check`, `clippy`, `fmt`, `test` and `lint`.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project name; also the directory below the current one it lives in.
    #[arg(value_name = "PROJECT")]
    pub project: String,
}

impl ProjectArgs {
    /// Rebuilds the launcher argument list `[program, operation, project]`.
    #[must_use]
    pub fn launcher_args(&self, operation: Operation) -> Vec<String> {
        vec![
            env!("CARGO_PKG_NAME").to_string(),
            operation.to_string(),
            self.project.clone(),
        ]
    }
}

/// Arguments for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only list projects whose name matches this glob.
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Prints the projects as a JSON array.
    #[arg(long)]
    pub json: bool,
}
