// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for hartex-build.
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, projects
//! projects: name --> ProjectConfig { type, build_tool, release }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::project::{BuildTool, Project, ProjectType};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log commands instead of starting them.
    pub dry: bool,
    /// Console log level (0-5).
    pub output_log_level: LogLevel,
    /// File log level (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Tool paths configuration.
///
/// An empty path means "resolve through PATH before spawning".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Cargo executable.
    pub cargo: PathBuf,
    /// Yarn executable.
    pub yarn: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            cargo: PathBuf::from("cargo"),
            yarn: PathBuf::from("yarn"),
        }
    }
}

/// A `[projects.<name>]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project language.
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Tool that builds the project.
    pub build_tool: BuildTool,
    /// Build with the release profile.
    #[serde(default)]
    pub release: bool,
}

impl ProjectConfig {
    /// Builds the descriptor for the project named `name`.
    #[must_use]
    pub fn to_project(&self, name: &str) -> Project {
        Project::new(name, self.project_type, self.build_tool).with_release(self.release)
    }
}
