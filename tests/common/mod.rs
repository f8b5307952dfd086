//! Shared infrastructure for the integration suites.
//!
//! Provides a one-shot tracing subscriber, recording handlers that append
//! every invocation to a shared log, and canned failing handlers/hooks.

#![allow(dead_code)]

use async_trait::async_trait;
use playercmd::{Context, ErrorContext, ErrorHook, Handler, HandlerResult};
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary; `RUST_LOG` controls
/// verbosity.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub tag: &'static str,
    pub player: u32,
    pub args: Vec<String>,
}

pub type Log = Arc<Mutex<Vec<LogEntry>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<LogEntry> {
    log.lock().unwrap().clone()
}

fn record(log: &Log, tag: &'static str, ctx: &Context<'_>) {
    log.lock().unwrap().push(LogEntry {
        tag,
        player: ctx.player.id,
        args: ctx.args.iter().map(|s| s.to_string()).collect(),
    });
}

/// Appends every invocation to the shared log and succeeds.
pub struct RecordingHandler {
    pub tag: &'static str,
    pub log: Log,
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        record(&self.log, self.tag, ctx);
        Ok(())
    }
}

/// Records the invocation, then fails with the given message.
pub struct FailingHandler {
    pub tag: &'static str,
    pub message: &'static str,
    pub log: Log,
}

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        record(&self.log, self.tag, ctx);
        Err(anyhow::anyhow!(self.message))
    }
}

/// Error hook that records `(command name, error text)` and returns a fixed
/// continue/abort decision.
pub struct DecidingErrorHook {
    pub decision: bool,
    pub seen: Arc<Mutex<Vec<(String, String)>>>,
}

impl DecidingErrorHook {
    pub fn new(decision: bool) -> Self {
        Self {
            decision,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ErrorHook for DecidingErrorHook {
    async fn on_error(&self, ctx: ErrorContext<'_>) -> bool {
        self.seen
            .lock()
            .unwrap()
            .push((ctx.command.name.clone(), ctx.error.to_string()));
        self.decision
    }
}
