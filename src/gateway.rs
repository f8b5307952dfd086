//! Glue between the host runtime's text events and the dispatcher.
//!
//! The host runtime delivers two kinds of player text: input it already
//! recognized as a command, and ordinary chat. Both are routed to the same
//! dispatch entry point, mirroring how game scripting runtimes expose
//! `playerCommandText` and `playerText` callbacks side by side.

use crate::config::DispatchConfig;
use crate::dispatch::{Dispatcher, Player};
use crate::registry::Registry;
use tokio::sync::mpsc;
use tracing::{info, trace};

/// A raw-text event delivered by the host runtime.
#[derive(Debug, Clone)]
pub enum TextEvent {
    /// Text the host already recognized as command input.
    Command { player: Player, text: String },
    /// Ordinary chat text.
    Chat { player: Player, text: String },
}

impl TextEvent {
    fn parts(&self) -> (Player, &str) {
        match self {
            Self::Command { player, text } | Self::Chat { player, text } => (*player, text.as_str()),
        }
    }
}

/// Owns a registry and dispatcher and feeds host events through them.
///
/// Registration happens before the engine starts draining events; once
/// [`Engine::run`] takes over, it is the single dispatch worker, which is
/// what serializes all registry and hook-slot access.
pub struct Engine {
    config: DispatchConfig,
    registry: Registry,
    dispatcher: Dispatcher,
}

impl Engine {
    /// Create an engine with the configured default prefix pre-seeded into
    /// its registry.
    pub fn new(config: DispatchConfig) -> Self {
        let mut registry = Registry::new();
        registry.seed_prefix(&config.default_prefix);
        Self {
            config,
            registry,
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// Route one event through the dispatcher.
    ///
    /// Chat text is only scanned when `forward_chat` is enabled; command
    /// input is always dispatched. Returns the dispatch result.
    pub async fn handle_event(&self, event: TextEvent) -> bool {
        if let TextEvent::Chat { .. } = &event
            && !self.config.forward_chat
        {
            return false;
        }
        let (player, text) = event.parts();
        self.dispatcher.dispatch(&self.registry, player, text).await
    }

    /// Drain events until the channel closes.
    pub async fn run(self, mut events: mpsc::Receiver<TextEvent>) {
        info!(prefix = %self.config.default_prefix, "command engine started");
        while let Some(event) = events.recv().await {
            let handled = self.handle_event(event).await;
            trace!(handled, "text event processed");
        }
        info!("command engine stopped, event channel closed");
    }
}
