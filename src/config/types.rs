//! Core configuration types
//!
//! This module defines the data structures that represent a cmdln.yml configuration file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// How parsed commands are printed
    #[serde(default)]
    pub output: OutputFormat,

    /// Action aliases (alias -> action)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, String>,
}

/// Rendering format for parsed commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `action:` and `args:` lines per command
    #[default]
    Text,
    /// A YAML sequence of commands
    Yaml,
}

impl Config {
    /// Look up the action an alias stands for
    ///
    /// Only one hop is taken; actions without an alias map to themselves.
    pub fn resolve_alias<'a>(&'a self, action: &'a str) -> &'a str {
        self.aliases
            .get(action)
            .map(String::as_str)
            .unwrap_or(action)
    }
}
