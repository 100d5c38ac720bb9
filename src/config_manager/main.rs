use serde::{Deserialize, Serialize};
use crate::config_manager::cli::CliConfig;
use crate::config_manager::provider::ProviderConfig;

/// Main configuration for the application using JSON-LD format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub context: Option<serde_json::Value>,

    #[serde(rename = "provider_config")]
    #[serde(default)]
    pub provider_config: ProviderConfig,

    #[serde(rename = "cli_config")]
    #[serde(default)]
    pub cli_config: CliConfig,
}

impl Config {
    /// Load configuration from a JSON-LD, JSON or YAML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_value, validate_config};
        let value = read_config_value(path)?;
        validate_config(&value)
    }
}
