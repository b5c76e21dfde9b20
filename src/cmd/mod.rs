// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build|check|clippy|fmt|test|lint --> run
//!   list                             --> list
//!   options, configs                 --> config
//! ```

pub mod config;
pub mod list;
pub mod run;
