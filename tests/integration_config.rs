// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::fs;

use hartex_build::config::Config;
use hartex_build::config::loader::ConfigLoader;
use hartex_build::error::ConfigError;
use hartex_build::logging::LogLevel;
use hartex_build::project::{BuildTool, ProjectType};

const REPOSITORY: &str = r#"
[global]
output_log_level = 4

[tools]
cargo = "/opt/rust/bin/cargo"

[projects.discord-frontend]
type = "rust"
build_tool = "cargo"

[projects.api-backend]
type = "rust"
build_tool = "cargo"
release = true

[projects.web]
type = "typescript"
build_tool = "yarn"
"#;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let toml = r#"
[projects.web]
type = "typescript"
build_tool = "yarn"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      dry: false
      output_log_level: 3
      file_log_level: 5
    tools:
      cargo: cargo
      yarn: yarn
    projects:
      web:
        type: typescript
        build_tool: yarn
        release: false
    ");
}

#[test]
fn config_parse_repository() {
    let config = Config::parse(REPOSITORY).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Debug);
    assert_eq!(config.tools.cargo.display().to_string(), "/opt/rust/bin/cargo");
    assert_eq!(config.projects.len(), 3);

    let backend = config.project("api-backend").unwrap();
    assert_eq!(backend.toolchain(), (ProjectType::Rust, BuildTool::Cargo));
    assert!(backend.is_release());
}

#[test]
fn config_unknown_project() {
    let config = Config::parse(REPOSITORY).unwrap();
    assert!(matches!(
        config.project("cache"),
        Err(ConfigError::UnknownProject(name)) if name == "cache"
    ));
}

#[test]
fn config_unknown_build_tool_rejected() {
    let toml = r#"
[projects.web]
type = "typescript"
build_tool = "npm"
"#;
    assert!(Config::parse(toml).is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("hartex.toml");
    let local = dir.path().join("local.toml");
    fs::write(&base, REPOSITORY).unwrap();
    fs::write(
        &local,
        "[projects.discord-frontend]\ntype = \"rust\"\nbuild_tool = \"cargo\"\nrelease = true\n",
    )
    .unwrap();

    let config = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert!(config.project("discord-frontend").unwrap().is_release());
    assert!(config.project("web").is_ok());
}

#[test]
fn config_overrides_beat_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hartex.toml");
    fs::write(&path, REPOSITORY).unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&path)
        .set_overrides(["tools.cargo=cargo", "projects.web.release=true"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.tools.cargo.display().to_string(), "cargo");
    assert!(config.project("web").unwrap().is_release());
}

#[test]
fn config_missing_required_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_loaded_files_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hartex.toml");
    fs::write(&path, REPOSITORY).unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&path)
        .add_toml_file_optional(dir.path().join("absent.toml"));
    let files = loader.format_loaded_files();

    assert_eq!(files, [format!("1. [optional] {}", path.display())]);
}
