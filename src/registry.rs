//! Command registry: name/alias keys, handler lists, known prefixes.

use crate::command::{Command, DEFAULT_PREFIX};
use crate::error::RegistryError;
use crate::handler::Handler;
use crate::resolve::{Candidate, split_command};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// One registered command: its metadata and ordered handler list.
struct CommandEntry {
    command: Command,
    handlers: Vec<Arc<dyn Handler>>,
}

/// A successful resolution of raw text against the registry.
pub struct Resolved<'r, 't> {
    /// Metadata of the matched command.
    pub command: &'r Command,
    /// Handlers in registration order.
    pub(crate) handlers: &'r [Arc<dyn Handler>],
    /// Argument tokens, borrowed from the raw text.
    pub args: Vec<&'t str>,
}

/// Maps command names and aliases to their handler lists and tracks every
/// prefix seen so far.
///
/// The registry carries no internal synchronization; the host application
/// owns it and serializes access (see [`Engine`](crate::Engine), which
/// funnels every event through a single worker). Aliases share the entry of
/// their canonical name through an index indirection, so a handler appended
/// under the name is immediately visible under every alias.
#[derive(Default)]
pub struct Registry {
    /// Canonical name -> entry.
    entries: HashMap<String, CommandEntry>,
    /// Every bound key (canonical name or alias) -> canonical name.
    index: HashMap<String, String>,
    /// Insertion-ordered, deduplicated. Prefixes are never removed.
    prefixes: Vec<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes known so far, in insertion order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether `key` (name or alias) is currently bound.
    pub fn is_registered(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Metadata of the command bound under `key`, if any.
    pub fn command(&self, key: &str) -> Option<&Command> {
        let canonical = self.index.get(key)?;
        self.entries.get(canonical).map(|e| &e.command)
    }

    /// Add a prefix to the known set without registering a command. Used to
    /// seed the configured default prefix into a fresh registry.
    pub fn seed_prefix(&mut self, prefix: &str) {
        self.push_prefix(prefix);
    }

    fn push_prefix(&mut self, prefix: &str) {
        // An empty prefix would strip from every text.
        if prefix.is_empty() {
            return;
        }
        if !self.prefixes.iter().any(|p| p == prefix) {
            self.prefixes.push(prefix.to_string());
        }
    }

    /// Register `handler` for `cmd`.
    ///
    /// Re-registering an existing name appends to its handler list rather
    /// than replacing it; all handlers run in registration order. The
    /// command's aliases resolve to the same handler list as the canonical
    /// name. An empty prefix falls back to [`DEFAULT_PREFIX`].
    pub fn register(
        &mut self,
        cmd: Command,
        handler: impl Handler + 'static,
    ) -> Result<(), RegistryError> {
        let mut cmd = cmd;
        if cmd.name.is_empty() {
            return Err(RegistryError::InvalidCommand);
        }
        if cmd.prefix.is_empty() {
            cmd.prefix = DEFAULT_PREFIX.to_string();
        }
        self.push_prefix(&cmd.prefix);

        for key in cmd.keys() {
            self.index.insert(key.to_string(), cmd.name.clone());
        }

        info!(
            command = %cmd.name,
            aliases = ?cmd.aliases,
            prefix = %cmd.prefix,
            "registered command handler"
        );

        match self.entries.get_mut(&cmd.name) {
            Some(entry) => {
                entry.command = cmd;
                entry.handlers.push(Arc::new(handler));
            }
            None => {
                let name = cmd.name.clone();
                self.entries.insert(
                    name,
                    CommandEntry { command: cmd, handlers: vec![Arc::new(handler)] },
                );
            }
        }
        Ok(())
    }

    /// Replace the metadata of the command currently bound under `key`.
    ///
    /// The handler list is untouched, so a command can be renamed or given
    /// a new prefix or alias set without re-registering its handlers. Keys
    /// that no longer belong to the command are unbound; the old prefix
    /// stays in the known set.
    pub fn update(&mut self, key: &str, cmd: Command) -> Result<(), RegistryError> {
        let mut cmd = cmd;
        if cmd.name.is_empty() {
            return Err(RegistryError::InvalidCommand);
        }
        let Some(old_name) = self.index.get(key).cloned() else {
            return Err(RegistryError::NotRegistered(key.to_string()));
        };
        let Some(mut entry) = self.entries.remove(&old_name) else {
            return Err(RegistryError::NotRegistered(key.to_string()));
        };

        if cmd.prefix.is_empty() {
            cmd.prefix = DEFAULT_PREFIX.to_string();
        }
        self.push_prefix(&cmd.prefix);

        // Rebuild the binding set from the updated command; every key that
        // pointed at the old entry is dropped first so stale aliases do not
        // survive.
        self.index.retain(|_, canonical| canonical != &old_name);
        for k in cmd.keys() {
            self.index.insert(k.to_string(), cmd.name.clone());
        }

        debug!(old = %old_name, new = %cmd.name, prefix = %cmd.prefix, "updated command binding");

        let name = cmd.name.clone();
        entry.command = cmd;
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Resolve raw text to a registered command.
    ///
    /// Prefixes are tried in insertion order; the first one that literally
    /// leads the text and whose stripped command token is a bound key wins.
    /// Text starting with no known prefix never resolves.
    pub fn resolve<'r, 't>(&'r self, text: &'t str) -> Option<Resolved<'r, 't>> {
        if self.entries.is_empty() {
            return None;
        }
        for prefix in &self.prefixes {
            let Some(rest) = text.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let Candidate { name, args } = split_command(rest);
            let Some(canonical) = self.index.get(name) else {
                continue;
            };
            let entry = self.entries.get(canonical)?;
            return Some(Resolved {
                command: &entry.command,
                handlers: &entry.handlers,
                args,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Context;
    use crate::error::HandlerResult;
    use crate::handler::FnHandler;

    fn noop() -> FnHandler<impl Fn(&Context<'_>) -> HandlerResult + Send + Sync> {
        FnHandler(|_: &Context<'_>| -> HandlerResult { Ok(()) })
    }

    #[test]
    fn register_rejects_empty_name() {
        let mut registry = Registry::new();
        let cmd = Command::builder().alias("ghost").build();
        assert_eq!(registry.register(cmd, noop()), Err(RegistryError::InvalidCommand));
        assert!(!registry.is_registered("ghost"));
    }

    #[test]
    fn update_before_register_is_rejected() {
        let mut registry = Registry::new();
        let cmd = Command::builder().name("tp").build();
        assert_eq!(
            registry.update("tp", cmd),
            Err(RegistryError::NotRegistered("tp".into()))
        );
    }

    #[test]
    fn aliases_resolve_to_the_canonical_entry() {
        let mut registry = Registry::new();
        let cmd = Command::builder().name("foo").aliases(["bar", "baz"]).build();
        registry.register(cmd, noop()).unwrap();

        for key in ["foo", "bar", "baz"] {
            let text = format!("/{key} x y");
            let resolved = registry.resolve(&text).unwrap();
            assert_eq!(resolved.command.name, "foo");
            assert_eq!(resolved.args, vec!["x", "y"]);
            assert_eq!(resolved.handlers.len(), 1);
        }
    }

    #[test]
    fn reregistration_appends_handlers() {
        let mut registry = Registry::new();
        registry.register(Command::builder().name("kick").build(), noop()).unwrap();
        registry.register(Command::builder().name("kick").build(), noop()).unwrap();
        assert_eq!(registry.resolve("/kick").unwrap().handlers.len(), 2);
    }

    #[test]
    fn prefixes_are_deduplicated_and_ordered() {
        let mut registry = Registry::new();
        registry.seed_prefix("/");
        registry.register(Command::builder().name("a").prefix("!").build(), noop()).unwrap();
        registry.register(Command::builder().name("b").prefix("/").build(), noop()).unwrap();
        registry.register(Command::builder().name("c").prefix("!").build(), noop()).unwrap();
        assert_eq!(registry.prefixes(), &["/".to_string(), "!".to_string()]);
    }

    #[test]
    fn empty_prefix_is_ignored() {
        let mut registry = Registry::new();
        registry.seed_prefix("");
        assert!(registry.prefixes().is_empty());
    }

    #[test]
    fn unprefixed_text_never_resolves() {
        let mut registry = Registry::new();
        registry.register(Command::builder().name("foo").build(), noop()).unwrap();
        assert!(registry.resolve("foo x").is_none());
        assert!(registry.resolve("/foo x").is_some());
    }

    #[test]
    fn update_unbinds_stale_aliases() {
        let mut registry = Registry::new();
        let cmd = Command::builder().name("foo").aliases(["bar", "baz"]).build();
        registry.register(cmd, noop()).unwrap();

        let updated = Command::builder().name("foo").alias("qux").build();
        registry.update("foo", updated).unwrap();

        assert!(registry.is_registered("foo"));
        assert!(registry.is_registered("qux"));
        assert!(!registry.is_registered("bar"));
        assert!(!registry.is_registered("baz"));
    }

    #[test]
    fn update_renames_without_losing_handlers() {
        let mut registry = Registry::new();
        registry.register(Command::builder().name("foo").build(), noop()).unwrap();
        registry.register(Command::builder().name("foo").build(), noop()).unwrap();

        registry.update("foo", Command::builder().name("bar").build()).unwrap();

        assert!(!registry.is_registered("foo"));
        let resolved = registry.resolve("/bar").unwrap();
        assert_eq!(resolved.command.name, "bar");
        assert_eq!(resolved.handlers.len(), 2);
    }

    #[test]
    fn update_keeps_old_prefix_in_known_set() {
        let mut registry = Registry::new();
        registry.register(Command::builder().name("foo").build(), noop()).unwrap();
        registry.update("foo", Command::builder().name("foo").prefix("$").build()).unwrap();

        assert_eq!(registry.prefixes(), &["/".to_string(), "$".to_string()]);
        // The command itself now carries the new prefix.
        assert_eq!(registry.command("foo").unwrap().prefix, "$");
        assert!(registry.resolve("$foo").is_some());
    }
}
