//! CLI configuration at ~/.config/schedboard/config.toml.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings. Every field has a default, so a missing file just
/// means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where the event-list snapshot lives. Defaults to the platform data
    /// directory.
    pub events_path: Option<PathBuf>,

    /// Where the inventory snapshot lives. Defaults to the platform data
    /// directory.
    pub inventory_path: Option<PathBuf>,

    /// Remote schedule source returning the instructor's rows as a JSON
    /// array of flat objects.
    pub schedule_endpoint: Option<String>,

    /// Remote source for the administrative count summary.
    pub count_endpoint: Option<String>,

    /// Role code from the identity provider (1 = admin, 2 = instructor).
    pub role: Option<u8>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(Config::default());
        };
        let path = config_dir.join("schedboard").join("config.toml");

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }
}
