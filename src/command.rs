//! Command metadata and the fluent builder used to construct it.

/// Prefix assumed when a command is registered without one.
pub const DEFAULT_PREFIX: &str = "/";

/// A named chat command: canonical name, aliases, and the prefix that
/// distinguishes it from ordinary chat.
///
/// `Command` is a plain value. Renaming, re-prefixing, or re-aliasing a
/// registered command means building a new value and calling
/// [`Registry::update`](crate::Registry::update) with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Canonical name; must be non-empty at registration or update time.
    pub name: String,
    /// Alternate names resolving to the same handler list.
    pub aliases: Vec<String>,
    /// Literal prefix expected to lead the command text.
    pub prefix: String,
}

impl Command {
    /// Start building a command. The prefix defaults to [`DEFAULT_PREFIX`].
    pub fn builder() -> CommandBuilder {
        CommandBuilder::default()
    }

    /// Every registry key this command binds: the canonical name plus each alias.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Consuming builder for [`Command`].
#[derive(Debug, Default)]
pub struct CommandBuilder {
    name: String,
    aliases: Vec<String>,
    prefix: Option<String>,
}

impl CommandBuilder {
    /// Set the canonical name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append one alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Replace the whole alias list.
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Finish the command. An unset prefix becomes [`DEFAULT_PREFIX`].
    pub fn build(self) -> Command {
        Command {
            name: self.name,
            aliases: self.aliases,
            prefix: self.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        }
    }
}
