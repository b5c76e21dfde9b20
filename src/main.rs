// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   build|check|clippy|fmt|test|lint | list | options | configs | version
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use hartex_build::cli::global::GlobalOptions;
use hartex_build::cli::{self, Command};
use hartex_build::cmd::config::{run_configs_command, run_options_command};
use hartex_build::cmd::list::run_list_command;
use hartex_build::cmd::run::run_process_command;
use hartex_build::config::loader::ConfigLoader;
use hartex_build::config::{Config, DEFAULT_CONFIG_FILE};
use hartex_build::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // [global] log settings live in the config, so it is loaded first
    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = LogConfig::from_global(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, Arc::new(config)).await
}

async fn dispatch_command(cli: &cli::Cli, config: Arc<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(&config);
            Ok(())
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::List(args)) => run_list_command(args, &config),
        Some(command) => match command.as_process() {
            Some((operation, args)) => {
                let dry_run = config.global.dry;
                run_process_command(operation, args, config, dry_run).await
            }
            None => Err(anyhow::anyhow!("Unhandled command")),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("HARTEX")
}

fn load_config(global: &GlobalOptions) -> hartex_build::error::Result<Config> {
    build_config_loader(global)
        .set_overrides(global.to_config_overrides())?
        .build()
}
