// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging for launched toolchain processes.
//!
//! ```text
//! [global] output_log_level --> console layer (stderr, ANSI, RUST_LOG refines)
//! [global] file_log_level   --> file layer    (log_file, plain, non-blocking)
//!                                   |
//!                                   v
//!                           LogGuard flushes on drop
//!
//! LogLevel: 0 silent  1 error  2 warn  3 info  4 debug  5 trace
//!           (a number or the name, e.g. `-l 4` or `-l debug`)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use bon::Builder;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt as layer_fmt, layer::SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

/// Verbosity of one log destination.
///
/// At `info` the launcher reports started processes and the output of
/// `cargo fmt`; `debug` adds command lines and working directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    const NAMES: [&'static str; 6] = ["silent", "error", "warn", "info", "debug", "trace"];

    /// Level for a number in `0..=5`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything above 5.
    pub fn new(level: u64) -> std::result::Result<Self, ConfigError> {
        match level {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Error),
            2 => Ok(Self::Warn),
            3 => Ok(Self::Info),
            4 => Ok(Self::Debug),
            5 => Ok(Self::Trace),
            _ => Err(invalid_level(&level.to_string())),
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

fn invalid_level(value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "log_level".to_string(),
        message: format!("expected 0-5 or a level name, got '{value}'"),
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u64>() {
            return Self::new(level);
        }
        Self::NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .and_then(|index| u64::try_from(index).ok())
            .and_then(|level| Self::new(level).ok())
            .ok_or_else(|| invalid_level(s))
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

struct LogLevelVisitor;

impl Visitor<'_> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a log level 0-5 or its name")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<LogLevel, E> {
        LogLevel::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<LogLevel, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(invalid_level(&v.to_string())))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<LogLevel, E> {
        v.parse().map_err(E::custom)
    }
}

// TOML gives integers, `--set` and environment overrides give strings.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}

/// Where logs go and how much of them.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Builds the logging setup described by the `[global]` table.
    #[must_use]
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self::builder()
            .with_console_level(global.output_log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(global.log_file.clone())
            .build()
    }

    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Console filter: the configured level, refined by `RUST_LOG` directives.
    fn console_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.console_level.level_filter().into())
            .from_env_lossy()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use hartex_build::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Info)
///     .with_file_level(LogLevel::Debug)
///     .with_log_file("hartex-build.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("Logging initialized");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = layer_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_filter(config.console_filter());

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            let layer = layer_fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(config.file_level().level_filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
