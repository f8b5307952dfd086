//! The handler trait implemented by command callbacks.

use crate::dispatch::Context;
use crate::error::HandlerResult;
use async_trait::async_trait;

/// Trait implemented by command handlers and the before/after hooks.
///
/// Handlers receive a borrowed [`Context`] whose arguments slice directly
/// into the raw event text. A handler may `tokio::spawn` detached work, but
/// dispatch only observes what `handle` itself returns.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one invocation.
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult;
}

/// Adapter wrapping a plain synchronous closure as a [`Handler`].
pub struct FnHandler<F>(pub F);

#[async_trait]
impl<F> Handler for FnHandler<F>
where
    F: Fn(&Context<'_>) -> HandlerResult + Send + Sync,
{
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        (self.0)(ctx)
    }
}
