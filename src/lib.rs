//! playercmd - command dispatch for multiplayer game servers.
//!
//! Parses chat/command text from connected players, matches it against a
//! registry of named commands (with aliases and prefixes), and runs the
//! before/handler/after callback pipeline with an optional error-recovery
//! hook. The host game runtime is treated as a black box that delivers
//! `(player, text)` events; see [`Engine`] for the glue.
//!
//! ```
//! use playercmd::{Command, Context, Dispatcher, FnHandler, HandlerResult, Player, Registry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), playercmd::RegistryError> {
//! let mut registry = Registry::new();
//! let cmd = Command::builder().name("heal").alias("hp").build();
//! registry.register(
//!     cmd,
//!     FnHandler(|ctx: &Context<'_>| -> HandlerResult {
//!         println!("healing player {} ({:?})", ctx.player.id, ctx.args);
//!         Ok(())
//!     }),
//! )?;
//!
//! let dispatcher = Dispatcher::new();
//! assert!(dispatcher.dispatch(&registry, Player { id: 7 }, "/heal full").await);
//! assert!(dispatcher.dispatch(&registry, Player { id: 7 }, "/hp").await);
//! assert!(!dispatcher.dispatch(&registry, Player { id: 7 }, "hello there").await);
//! # Ok(())
//! # }
//! ```

mod command;
mod config;
mod dispatch;
mod error;
mod gateway;
mod handler;
mod registry;
mod resolve;

pub use command::{Command, CommandBuilder, DEFAULT_PREFIX};
pub use config::{ConfigError, DispatchConfig};
pub use dispatch::{Context, Dispatcher, ErrorContext, ErrorHook, Player};
pub use error::{HandlerResult, RegistryError};
pub use gateway::{Engine, TextEvent};
pub use handler::{FnHandler, Handler};
pub use registry::{Registry, Resolved};
