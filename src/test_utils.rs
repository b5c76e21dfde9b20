// hartex-build: HarTex Build System
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for tests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn subscriber(buffer: &Arc<Mutex<Vec<u8>>>) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish()
}

fn collect(buffer: &Arc<Mutex<Vec<u8>>>) -> Result<String> {
    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok(String::from_utf8_lossy(&guard)
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Runs `f` with a thread-local subscriber and returns what it logged at INFO
/// and above, one message per line without timestamps.
pub(crate) fn run_with_logs<F>(f: F) -> Result<String>
where
    F: FnOnce() -> Result<()>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    tracing::subscriber::with_default(subscriber(&buffer), f)?;
    collect(&buffer)
}

/// Async variant of [`run_with_logs`].
///
/// Tasks spawned by `f` are only captured on a `current_thread` runtime.
pub(crate) async fn run_with_logs_async<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    {
        let _guard = tracing::subscriber::set_default(subscriber(&buffer));
        f().await?;
    }
    collect(&buffer)
}
