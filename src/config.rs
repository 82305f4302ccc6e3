//! Configuration loading
//!
//! Reads `~/.config/wordsuggest/config.toml`. A missing file means defaults;
//! an unreadable or invalid file also means defaults, plus a warning the
//! caller can show.

mod types;

pub use types::{Config, SuggestConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SuggestError;

const CONFIG_DIR: &str = "wordsuggest";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus any problem encountered while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return ConfigResult::default();
        }
        Err(e) => {
            let warning = format!("Failed to read {}: {}", path.display(), SuggestError::from(e));
            log::warn!("{}", warning);
            return ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            let warning = format!("{} ({}), using defaults", e, path.display());
            log::warn!("{}", warning);
            ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            }
        }
    }
}

/// Parse and validate TOML config content
pub fn parse_config(content: &str) -> Result<Config, SuggestError> {
    let config: Config =
        toml::from_str(content).map_err(|e| SuggestError::InvalidConfig(e.message().to_string()))?;
    config.suggest.validate()?;
    Ok(config)
}
