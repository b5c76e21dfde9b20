// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use crate::project::{BuildTool, ProjectType};

const PROJECTS: &str = r#"
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

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert!(config.global.log_file.is_none());
    assert!(config.projects.is_empty());
    assert_eq!(config.tools.cargo.display().to_string(), "cargo");
}

#[test]
fn test_config_parse_projects() {
    let config = Config::parse(PROJECTS).unwrap();

    let frontend = config.project("discord-frontend").unwrap();
    assert_eq!(frontend.toolchain(), (ProjectType::Rust, BuildTool::Cargo));
    assert!(!frontend.is_release());

    assert!(config.project("api-backend").unwrap().is_release());
    assert_eq!(
        config.project("web").unwrap().toolchain(),
        (ProjectType::TypeScript, BuildTool::Yarn)
    );
}

#[test]
fn test_unknown_project() {
    let config = Config::parse(PROJECTS).unwrap();
    let err = config.project("bors").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r"
    project 'bors' is not defined in any [projects] table
    ");
}

#[test]
fn test_project_missing_build_tool_rejected() {
    let toml = r#"
[projects.cache]
type = "rust"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_unknown_project_type_rejected() {
    let toml = r#"
[projects.buildsystem]
type = "kotlin"
build_tool = "cargo"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_unknown_section_rejected() {
    assert!(Config::parse("[versions]\nrust = \"1.92\"\n").is_err());
}

#[test]
fn test_matching_projects() {
    let config = Config::parse(PROJECTS).unwrap();

    let all: Vec<_> = config
        .matching_projects(None)
        .unwrap()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    insta::assert_debug_snapshot!(all, @r#"
    [
        "api-backend",
        "discord-frontend",
        "web",
    ]
    "#);

    let filtered: Vec<_> = config
        .matching_projects(Some("*-*"))
        .unwrap()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(filtered, ["api-backend", "discord-frontend"]);
}

#[test]
fn test_overrides_take_precedence() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false\noutput_log_level = 2\n")
        .set_overrides(["global.dry=true", "global.output_log_level = 4"])
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::Debug);
}

#[test]
fn test_log_level_by_name() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\nfile_log_level = \"warn\"\n")
        .set_overrides(["global.output_log_level=trace"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Trace);
    assert_eq!(config.global.file_log_level, LogLevel::Warn);
}

#[test]
fn test_malformed_override_rejected() {
    let err = ConfigLoader::new()
        .set_overrides(["global.dry"])
        .err()
        .expect("override without '=' must fail");
    insta::assert_snapshot!(err.to_string(), @r"
    invalid value for 'set' in section '[cli]': expected 'section.key=value', got 'global.dry'
    ");
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[global]
log_file = "build.log"

[projects.web]
type = "typescript"
build_tool = "yarn"
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.dry              = false
    global.file_log_level   = 5
    global.log_file         = build.log
    global.output_log_level = 3
    projects.web.build_tool = yarn
    projects.web.release    = false
    projects.web.type       = typescript
    tools.cargo             = cargo
    tools.yarn              = yarn
    ");
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new()
        .add_toml_str(PROJECTS)
        .add_toml_file_optional("/definitely/missing/hartex.toml");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}
