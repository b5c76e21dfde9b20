// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::{OutputMode, ProcessBuilder};
use crate::error::ProcessError;
use crate::test_utils::run_with_logs_async;

#[cfg(not(windows))]
#[tokio::test(flavor = "current_thread")]
async fn test_logged_stdout_reaches_info() -> Result<()> {
    let logs = run_with_logs_async(|| async {
        let exit = ProcessBuilder::new("echo")
            .args(["Would reformat: src/lib.rs"])
            .spawn()?
            .wait()
            .await?;
        assert!(exit.success());
        Ok(())
    })
    .await?;

    assert!(logs.contains("Would reformat: src/lib.rs"), "logs: {logs}");
    Ok(())
}

#[cfg(not(windows))]
#[tokio::test(flavor = "current_thread")]
async fn test_inherited_stdout_is_not_logged() -> Result<()> {
    let logs = run_with_logs_async(|| async {
        ProcessBuilder::new("echo")
            .args(["test result: ok"])
            .stdout(OutputMode::Inherit)
            .spawn()?
            .wait()
            .await?;
        Ok(())
    })
    .await?;

    assert!(!logs.contains("test result: ok"), "logs: {logs}");
    Ok(())
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_non_zero_exit_rejected() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .spawn()
        .unwrap()
        .wait()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::NonZeroExit { code: 3, .. })
    ));
    insta::assert_snapshot!(err.to_string(), @r#"
    process '/bin/sh -c "exit 3"' exited with code 3
    "#);
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_spawn_runs_in_working_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("Cargo.toml"), "")?;

    // `test -f` only succeeds relative to the working directory
    let handle = ProcessBuilder::new("test")
        .args(["-f", "Cargo.toml"])
        .cwd(dir.path())
        .spawn()?;
    assert!(handle.id().is_some());

    let exit = handle.wait().await?;
    assert_eq!(exit.code(), 0);
    Ok(())
}

#[tokio::test]
async fn test_spawn_missing_working_directory_fails() {
    let err = ProcessBuilder::new("cargo")
        .args(["fmt"])
        .cwd("/definitely/not/a/real/dir/hartex")
        .spawn()
        .unwrap_err();

    assert!(matches!(err, ProcessError::SpawnFailed { .. }));
    assert!(
        err.to_string().starts_with("failed to spawn process 'cargo fmt'"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_spawn_missing_executable_fails() {
    let result = ProcessBuilder::new("nonexistent_program_12345").spawn();
    assert!(matches!(result, Err(ProcessError::SpawnFailed { .. })));
}

#[test]
fn test_spawn_outside_runtime_is_an_error() {
    let err = ProcessBuilder::new("cargo").args(["fmt"]).spawn().unwrap_err();

    assert!(matches!(err, ProcessError::NoRuntime { .. }));
    insta::assert_snapshot!(err.to_string(), @"cannot start 'cargo fmt' outside a Tokio runtime");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_wait_with_cancellation_kills_child() {
    let token = CancellationToken::new();
    let handle = ProcessBuilder::new("sleep")
        .args(["30"])
        .spawn()
        .expect("sleep should spawn");

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let exit = handle
        .wait_with_cancellation(token)
        .await
        .expect("interrupted processes are not failures");
    assert!(exit.is_interrupted());
    assert!(!exit.success());
}

#[test]
fn test_builder_configuration() {
    let builder = ProcessBuilder::new("cargo")
        .args(["fmt"])
        .cwd("/work/hartex")
        .stderr(OutputMode::Inherit);

    insta::assert_snapshot!(builder.command_line(), @"cargo fmt");
    assert_eq!(builder.display_name(), "cargo");
    assert_eq!(builder.stdout_mode(), OutputMode::Log);
    assert_eq!(builder.stderr_mode(), OutputMode::Inherit);
    assert_eq!(
        builder.working_dir().map(|p| p.display().to_string()),
        Some("/work/hartex".to_string())
    );
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("yarn")
        .args(["run", "build all"])
        .name("frontend");
    insta::assert_snapshot!(builder.command_line(), @r#"yarn run "build all""#);
    assert_eq!(builder.display_name(), "frontend");
}

#[test]
fn test_executable_lookup_found() {
    // cargo is on PATH whenever these tests run
    let builder = ProcessBuilder::which("cargo").expect("cargo should be found in PATH");
    assert!(builder.program().is_absolute());
    assert!(builder.program().exists());
}

#[test]
fn test_executable_lookup_not_found() {
    let err = ProcessBuilder::which("nonexistent_program_12345").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'nonexistent_program_12345' (not in PATH)"
    );
}
