use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "TRANSLIT_CONFIG";

/// Configuration file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "translit.jsonld";

/// Read a configuration file with environment variable substitution.
/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON(-LD).
pub fn read_config_value(config_path: &str) -> Result<Value> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    let content = substitute_env_vars(&content)?;

    let path_lower = config_path.to_lowercase();
    let value = if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", config_path))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", config_path))?
    };
    Ok(value)
}

/// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as-is.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Deserialize and validate configuration data
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data.clone())?;
    config
        .provider_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid provider_config: {}", e))?;
    Ok(config)
}

/// Load a text file, stripping a UTF-8 BOM and falling back to lossy decoding
pub fn load_text_file(file_path: &str) -> Result<String> {
    let mut buffer = fs::read(file_path)
        .with_context(|| format!("Failed to read configuration file: {}", file_path))?;

    if buffer.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buffer.drain(0..3);
    }

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", file_path);
            let (cow, _, _) = encoding_rs::UTF_8.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

/// Resolve which configuration file to load, if any.
///
/// An explicit path always wins; otherwise the default file is used only if it exists.
pub fn resolve_config_path(explicit: Option<String>) -> Option<String> {
    explicit.or_else(|| {
        Path::new(DEFAULT_CONFIG_FILE)
            .exists()
            .then(|| DEFAULT_CONFIG_FILE.to_string())
    })
}

/// Load configuration from `TRANSLIT_CONFIG` or the default file, else use built-in defaults
pub fn load_config() -> Result<Config> {
    match resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok()) {
        Some(path) => {
            let config = Config::load(&path)?;
            debug!("Loaded configuration from: {}", path);
            Ok(config)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
