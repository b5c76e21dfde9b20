// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project descriptors.
//!
//! ```text
//! [projects.<name>]          Project
//!   type = "rust"        --> { name, project_type, build_tool }
//!   build_tool = "cargo"           |
//!                                  v
//!                          toolchain() --> (Rust, Cargo)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Language of a project in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Rust,
    TypeScript,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rust => write!(f, "rust"),
            Self::TypeScript => write!(f, "typescript"),
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" => Ok(Self::Rust),
            "typescript" => Ok(Self::TypeScript),
            _ => Err(ConfigError::InvalidValue {
                section: "projects".to_string(),
                key: "type".to_string(),
                message: format!("expected 'rust' or 'typescript', got '{s}'"),
            }),
        }
    }
}

/// Build tool driving a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Cargo,
    Yarn,
}

impl std::fmt::Display for BuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Yarn => write!(f, "yarn"),
        }
    }
}

impl std::str::FromStr for BuildTool {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cargo" => Ok(Self::Cargo),
            "yarn" => Ok(Self::Yarn),
            _ => Err(ConfigError::InvalidValue {
                section: "projects".to_string(),
                key: "build_tool".to_string(),
                message: format!("expected 'cargo' or 'yarn', got '{s}'"),
            }),
        }
    }
}

/// A project known to the build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    #[serde(rename = "type")]
    project_type: ProjectType,
    build_tool: BuildTool,
    release: bool,
}

impl Project {
    /// Creates a debug-profile project descriptor.
    pub fn new(name: impl Into<String>, project_type: ProjectType, build_tool: BuildTool) -> Self {
        Self {
            name: name.into(),
            project_type,
            build_tool,
            release: false,
        }
    }

    /// Sets whether profile-aware operations build in release mode.
    #[must_use]
    pub const fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    #[must_use]
    pub const fn build_tool(&self) -> BuildTool {
        self.build_tool
    }

    #[must_use]
    pub const fn is_release(&self) -> bool {
        self.release
    }

    /// Returns the type/tool pair that selects a command line.
    #[must_use]
    pub const fn toolchain(&self) -> (ProjectType, BuildTool) {
        (self.project_type, self.build_tool)
    }
}
