//! Configuration loading
//!
//! Reads `~/.config/city-suggest/config.toml`. A missing file yields the
//! defaults; an unreadable or invalid file yields the defaults plus a
//! warning for the caller to surface.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, NearConfig, NoResultsPolicy, SearchConfig, UiConfig};

use crate::error::CitySuggestError;

const CONFIG_DIR: &str = "city-suggest";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the configuration file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, CitySuggestError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents).map_err(|message| CitySuggestError::InvalidConfig {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
