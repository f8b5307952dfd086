//! Error types for registration and dispatch.

use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The command's name was empty at register or update time.
    #[error("command is missing a name")]
    InvalidCommand,

    /// An update was requested for a key with no prior registration.
    #[error("no command registered under {0:?}")]
    NotRegistered(String),
}

/// Result type for command handlers and the before/after hooks.
///
/// The error side is opaque and handler-supplied; the dispatcher never
/// inspects it, it only routes it to the error hook (if one is set) and
/// collapses the outcome into the boolean dispatch result.
pub type HandlerResult = anyhow::Result<()>;
