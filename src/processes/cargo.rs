// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cargo commands for Rust projects.
//!
//! ```text
//! fmt                      --> cargo fmt
//! build|check|clippy|test  --> cargo <op> [--release]
//! lint                     --> (none)
//! ```

use super::{Operation, ProcessContext, Toolchain, tool_builder};
use crate::error::Result;
use crate::process::ProcessBuilder;
use crate::project::Project;

/// Cargo, the Rust build tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoToolchain;

impl Toolchain for CargoToolchain {
    fn name(&self) -> &'static str {
        "cargo"
    }

    fn command(&self, operation: Operation, project: &Project) -> Option<Vec<&'static str>> {
        let mut command = match operation {
            // never takes a profile
            Operation::Fmt => return Some(vec!["fmt"]),
            Operation::Build | Operation::Check | Operation::Clippy | Operation::Test => {
                vec![operation.as_str()]
            }
            Operation::Lint => return None,
        };
        if project.is_release() {
            command.push("--release");
        }
        Some(command)
    }

    fn program(&self, ctx: &ProcessContext) -> Result<ProcessBuilder> {
        tool_builder(&ctx.config().tools.cargo, self.name())
    }
}
