//! Tokenization of prefix-stripped command text.

/// A tokenized command candidate: the name token and its arguments.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Candidate<'t> {
    pub name: &'t str,
    pub args: Vec<&'t str>,
}

/// Split prefix-stripped text on single-space boundaries.
///
/// Exactly one token means a bare command with no arguments; otherwise the
/// first token is the command name and the rest are the argument list.
/// Consecutive spaces yield empty argument tokens; handlers see the raw
/// split, nothing is trimmed or collapsed.
pub(crate) fn split_command(rest: &str) -> Candidate<'_> {
    let mut tokens = rest.split(' ');
    // split() always yields at least one item
    let name = tokens.next().unwrap_or("");
    Candidate { name, args: tokens.collect() }
}
