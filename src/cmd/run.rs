// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process commands: build, check, clippy, fmt, test and lint.
//!
//! ```text
//! project name --> Config::project --> Launch::plan
//!   dry run: log command, done
//!   else:    start --> ProcessHandle
//!            Ctrl+C --> CancellationToken --> kill
//!            wait --> exit status
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::cli::project::ProjectArgs;
use crate::config::Config;
use crate::error::{Result, bail_out};
use crate::processes::{Launch, Operation, ProcessContext};

/// Runs `operation` for the project named in `args` and waits for it.
///
/// # Errors
///
/// Returns an error if the project is unknown, its toolchain has no command
/// for `operation`, the process cannot be started, exits unsuccessfully, or
/// is interrupted with Ctrl+C.
pub async fn run_process_command(
    operation: Operation,
    args: &ProjectArgs,
    config: Arc<Config>,
    dry_run: bool,
) -> Result<()> {
    let project = config.project(&args.project)?;
    let ctx = ProcessContext::new(config, CancellationToken::new(), dry_run);
    let launch = Launch::plan(&ctx, &project, operation, &args.launcher_args(operation))?;

    let Some(handle) = launch.start(&ctx)? else {
        return Ok(());
    };

    let cancel_token = ctx.cancel_token().clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, stopping process...");
            cancel_token.cancel();
        }
    });

    let result = handle
        .wait_with_cancellation(ctx.cancel_token().clone())
        .await
        .with_context(|| format!("{operation} failed for {}", project.name()));
    watcher.abort();

    let output = result?;
    if output.is_interrupted() {
        return Err(bail_out(format!("{operation} interrupted for {}", project.name())).into());
    }

    tracing::info!(
        project = %project.name(),
        "{} completed successfully",
        launch.command_line()
    );
    Ok(())
}
