// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Yarn scripts for TypeScript projects.

use super::{Operation, ProcessContext, Toolchain, tool_builder};
use crate::error::Result;
use crate::process::ProcessBuilder;
use crate::project::Project;

/// Yarn, running the `build` and `lint` scripts of `package.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YarnToolchain;

impl Toolchain for YarnToolchain {
    fn name(&self) -> &'static str {
        "yarn"
    }

    fn command(&self, operation: Operation, _project: &Project) -> Option<Vec<&'static str>> {
        match operation {
            Operation::Build | Operation::Lint => Some(vec![operation.as_str()]),
            _ => None,
        }
    }

    fn program(&self, ctx: &ProcessContext) -> Result<ProcessBuilder> {
        tool_builder(&ctx.config().tools.yarn, self.name())
    }
}
