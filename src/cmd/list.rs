// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for hartex-build.

use crate::cli::project::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::project::Project;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid glob or JSON output fails.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let projects = config.matching_projects(args.pattern.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else if projects.is_empty() {
        println!("No projects found");
    } else {
        for line in format_projects(&projects) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Formats projects as `name  type/tool` with aligned names.
#[must_use]
pub fn format_projects(projects: &[Project]) -> Vec<String> {
    let width = projects.iter().map(|p| p.name().len()).max().unwrap_or(0);
    projects
        .iter()
        .map(|p| {
            format!(
                "{:<width$}  {}/{}",
                p.name(),
                p.project_type(),
                p.build_tool()
            )
        })
        .collect()
}
