//! Command string tokenizer
//!
//! Splits a raw command string into an action (the first token) and the
//! arguments that follow it. Tokens are separated by runs of whitespace;
//! there is no quoting or escaping.

use serde::{Deserialize, Serialize};

/// Tokenizer for a single command string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdParser {
    /// Raw input, stored verbatim
    command: String,

    action: String,
    args: Vec<String>,
    parsed: bool,
}

/// Snapshot of a parsed command
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedCommand {
    pub action: String,
    pub args: Vec<String>,
}

impl CmdParser {
    /// Create a tokenizer for the given command string
    pub fn new(command: impl Into<String>) -> Self {
        CmdParser {
            command: command.into(),
            ..Default::default()
        }
    }

    /// Split the command into action and arguments
    ///
    /// Calling this again recomputes the same result.
    pub fn parse(&mut self) {
        let mut tokens = self.command.split_whitespace().map(str::to_string);

        self.action = tokens.next().unwrap_or_default();
        self.args = tokens.collect();
        self.parsed = true;
    }

    /// The raw command string
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The action token, empty until [`parse`](Self::parse) has run
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The argument tokens, empty until [`parse`](Self::parse) has run
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether [`parse`](Self::parse) has run
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Copy out the current action and arguments
    pub fn parsed(&self) -> ParsedCommand {
        ParsedCommand {
            action: self.action.clone(),
            args: self.args.clone(),
        }
    }
}

impl ParsedCommand {
    /// Replace the action, keeping the arguments
    pub fn with_action(mut self, action: String) -> Self {
        self.action = action;
        self
    }

    /// Action and arguments joined by single spaces
    pub fn normalized(&self) -> String {
        std::iter::once(self.action.as_str())
            .chain(self.args.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
