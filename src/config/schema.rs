//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for (name, target) in &config.aliases {
        validate_alias(name, target)?;
    }

    Ok(())
}

/// Validate a single alias entry
pub fn validate_alias(name: &str, target: &str) -> ConfigResult<()> {
    if !is_single_token(name) {
        return Err(ConfigError::Invalid(format!(
            "Alias name '{}' must be a single non-empty token",
            name
        )));
    }

    if !is_single_token(target) {
        return Err(ConfigError::Invalid(format!(
            "Alias '{}' must map to a single non-empty token, got '{}'",
            name, target
        )));
    }

    if name == target {
        return Err(ConfigError::Invalid(format!(
            "Alias '{}' maps to itself",
            name
        )));
    }

    Ok(())
}

fn is_single_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
