//! The dispatch pipeline: before hook, handlers, after hook, error hook.

use crate::command::Command;
use crate::handler::Handler;
use crate::registry::{Registry, Resolved};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Opaque handle for a connected player, delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub id: u32,
}

/// Invocation context passed to hooks and handlers.
///
/// Built fresh for every dispatch and dropped when the pipeline finishes;
/// the argument tokens borrow from the raw event text.
#[derive(Debug)]
pub struct Context<'t> {
    /// The player whose text triggered the dispatch.
    pub player: Player,
    /// Argument tokens following the command name. May be empty.
    pub args: Vec<&'t str>,
}

/// Passed to the error hook when a handler fails.
pub struct ErrorContext<'a> {
    /// Metadata of the command whose handler failed.
    pub command: &'a Command,
    /// The handler-supplied error.
    pub error: &'a anyhow::Error,
}

/// Decides whether dispatch continues after a handler error.
#[async_trait]
pub trait ErrorHook: Send + Sync {
    /// Return `true` to continue with the next handler, `false` to abort
    /// the dispatch.
    async fn on_error(&self, ctx: ErrorContext<'_>) -> bool;
}

/// Runs the callback pipeline for resolved commands.
///
/// Each hook slot holds at most one callback; the setters overwrite any
/// previous value. The dispatcher itself is stateless across invocations,
/// so one instance can serve any number of registries.
#[derive(Default)]
pub struct Dispatcher {
    before: Option<Arc<dyn Handler>>,
    after: Option<Arc<dyn Handler>>,
    error: Option<Arc<dyn ErrorHook>>,
}

impl Dispatcher {
    /// Create a dispatcher with no hooks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the hook fired before the first handler. An error from it
    /// aborts the whole dispatch; no handler and no after hook runs.
    pub fn set_before(&mut self, hook: impl Handler + 'static) {
        self.before = Some(Arc::new(hook));
    }

    /// Install the hook fired after the last handler. An error from it
    /// turns the dispatch result into "not handled".
    pub fn set_after(&mut self, hook: impl Handler + 'static) {
        self.after = Some(Arc::new(hook));
    }

    /// Install the hook consulted when a handler fails. Without one, any
    /// handler failure aborts the dispatch.
    pub fn set_error(&mut self, hook: impl ErrorHook + 'static) {
        self.error = Some(Arc::new(hook));
    }

    /// Resolve `text` against `registry` and run the pipeline.
    ///
    /// Returns `true` only when the text resolved to a registered command
    /// and every stage completed without an aborting failure. Unresolved
    /// text and stage failures are indistinguishable in the result; the
    /// difference is only logged.
    pub async fn dispatch(&self, registry: &Registry, player: Player, text: &str) -> bool {
        let Some(Resolved { command, handlers, args }) = registry.resolve(text) else {
            trace!(player = player.id, text, "no command resolved");
            return false;
        };
        let ctx = Context { player, args };

        if let Some(before) = &self.before
            && let Err(error) = before.handle(&ctx).await
        {
            debug!(command = %command.name, %error, "before hook aborted dispatch");
            return false;
        }

        for handler in handlers {
            if let Err(error) = handler.handle(&ctx).await {
                match &self.error {
                    Some(hook) => {
                        if !hook.on_error(ErrorContext { command, error: &error }).await {
                            debug!(command = %command.name, %error, "error hook aborted dispatch");
                            return false;
                        }
                    }
                    None => {
                        warn!(command = %command.name, %error, "handler failed with no error hook");
                        return false;
                    }
                }
            }
        }

        if let Some(after) = &self.after
            && let Err(error) = after.handle(&ctx).await
        {
            debug!(command = %command.name, %error, "after hook failed");
            return false;
        }

        true
    }
}
