// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for hartex-build.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. hartex.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. HARTEX_* env vars
//! 5. CLI overrides (--set, --dry, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! HARTEX_GLOBAL__DRY=true       → global.dry = true
//! HARTEX_TOOLS__CARGO=/bin/cargo → tools.cargo = "/bin/cargo"
//! ```
//!
//! # Projects
//!
//! ```toml
//! [projects.discord-frontend]
//! type = "rust"
//! build_tool = "cargo"
//!
//! [projects.web]
//! type = "typescript"
//! build_tool = "yarn"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wax::Program as _;

use crate::error::{ConfigError, Result};
use crate::project::Project;

use loader::ConfigLoader;
use types::{GlobalConfig, ProjectConfig, ToolsConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "hartex.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Project descriptors keyed by project name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hartex_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("hartex.toml")
    ///     .with_env_prefix("HARTEX")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Looks up the descriptor of a configured project.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProject` if no `[projects.<name>]` table exists.
    pub fn project(&self, name: &str) -> std::result::Result<Project, ConfigError> {
        self.projects
            .get(name)
            .map(|project| project.to_project(name))
            .ok_or_else(|| ConfigError::UnknownProject(name.to_string()))
    }

    /// Returns all configured projects whose name matches `pattern`.
    ///
    /// Without a pattern every project is returned, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn matching_projects(&self, pattern: Option<&str>) -> Result<Vec<Project>> {
        let glob = pattern
            .map(|p| {
                wax::Glob::new(p).map_err(|e| anyhow::anyhow!("Invalid glob pattern '{p}': {e}"))
            })
            .transpose()?;

        Ok(self
            .projects
            .iter()
            .filter(|(name, _)| glob.as_ref().is_none_or(|g| g.is_match(name.as_str())))
            .map(|(name, project)| project.to_project(name))
            .collect())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_project_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.cargo".into(), self.tools.cargo.display().to_string());
        options.insert("tools.yarn".into(), self.tools.yarn.display().to_string());
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, project) in &self.projects {
            options.insert(
                format!("projects.{name}.type"),
                project.project_type.to_string(),
            );
            options.insert(
                format!("projects.{name}.build_tool"),
                project.build_tool.to_string(),
            );
            options.insert(
                format!("projects.{name}.release"),
                project.release.to_string(),
            );
        }
    }
}
