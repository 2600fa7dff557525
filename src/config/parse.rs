//! Configuration file parsing and discovery

use crate::config::schema::validate_config;
use crate::config::types::Config;
use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["cmdln.yml", "cmdln.yaml"];

/// Find the configuration file by searching a directory and its parents
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = Some(start_dir);

    while let Some(dir) = current_dir {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        current_dir = dir.parent();
    }

    None
}

/// Configuration file in the user's config directory, if one exists
pub fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "cmdln")?;

    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config> {
    // An empty file is a valid, default configuration
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load and validate configuration
///
/// An explicit path must exist. Otherwise the project file found from the
/// current directory is used, then the user config file, then defaults.
/// Returns the config together with the file it came from.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => env::current_dir()
            .ok()
            .and_then(|dir| find_config_file_from(&dir))
            .or_else(user_config_file),
    };

    let config = match &path {
        Some(path) => parse_config_file(path)?,
        None => Config::default(),
    };
    validate_config(&config)?;

    Ok((config, path))
}
