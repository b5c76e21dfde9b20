// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child processes started for a toolchain command.
//!
//! ```text
//! ProcessBuilder::new("cargo")
//!   .args(["fmt"]) .cwd(dir) .stderr(OutputMode::Inherit)
//!   .spawn()                      --> ProcessHandle (running)
//!        stdout Log     --> info!(line) per output line
//!        stdout Inherit --> parent's stdout
//!   handle.wait() / wait_with_cancellation(token)
//!        --> ProcessExit { code, interrupted }  (non-zero --> NonZeroExit)
//! ```

mod builder;
mod handle;
#[cfg(test)]
mod tests;

pub use builder::{OutputMode, ProcessBuilder};
pub use handle::{ProcessExit, ProcessHandle};
