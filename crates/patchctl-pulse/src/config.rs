//! Facade configuration.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Facade configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// External tool settings
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// External graph tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Node creation/destruction tool
    #[serde(default = "default_node_tool")]
    pub node_tool: String,
    /// Port linking tool
    #[serde(default = "default_link_tool")]
    pub link_tool: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { node_tool: default_node_tool(), link_tool: default_link_tool() }
    }
}

fn default_node_tool() -> String {
    "pw-cli".to_string()
}

fn default_link_tool() -> String {
    "pw-link".to_string()
}

/// Load configuration from file or defaults.
pub fn load_config() -> Result<Config> {
    let config_path = config_path()?;

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("Failed to read {config_path:?}: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {config_path:?}: {e}")))?;
        Ok(config)
    } else {
        info!(?config_path, "Config file not found, using defaults");
        Ok(Config::default())
    }
}

/// Get the configuration file path.
fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "patchctl", "Patchctl")
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
    Ok(dirs.config_dir().join("config.toml"))
}
