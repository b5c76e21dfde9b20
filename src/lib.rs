// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            run / list / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, [projects] tables  |
//!              '------------+--------------'
//!                           v
//!                project (type, build tool)
//!                           |
//!                           v
//!                processes (cargo, yarn)
//!                  Operation --> Launch
//!
//!   +-----------------------------------------+
//!   |  process   spawn, ProcessHandle, wait   |
//!   +-----------------------------------------+
//!   |  foundation     error, logging          |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod processes;
pub mod project;

#[cfg(test)]
pub(crate) mod test_utils;
