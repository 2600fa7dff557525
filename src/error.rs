//! Error types for cmdln
//!
//! Tokenizing never fails; these cover loading configuration and reading input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cmdln operations
pub type Result<T> = std::result::Result<T, CmdlnError>;

/// Main error type for cmdln
#[derive(Error, Debug)]
pub enum CmdlnError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing or rendering errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
