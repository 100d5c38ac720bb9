use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transform identifier the provider uses for Roman -> Kannada.
pub const KANNADA_TRANSFORM_ID: &str = "kn-t-i0-und";

pub const GOOGLE_INPUT_TOOLS: &str = "google_input_tools";

/// Transliteration provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(rename = "transform_id")]
    #[serde(default = "default_transform_id")]
    pub transform_id: String,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Value sent as the `app` query parameter
    #[serde(default = "default_client_tag")]
    pub client_tag: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_provider() -> String {
    GOOGLE_INPUT_TOOLS.to_string()
}

fn default_endpoint() -> String {
    "https://inputtools.google.com/request".to_string()
}

fn default_transform_id() -> String {
    KANNADA_TRANSFORM_ID.to_string()
}

fn default_max_suggestions() -> usize {
    crate::transliterate::DEFAULT_MAX_SUGGESTIONS
}

fn default_client_tag() -> String {
    "demopage".to_string()
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_suggestions == 0 {
            return Err("max_suggestions must be at least 1".to_string());
        }
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.transform_id.trim().is_empty() {
            return Err("transform_id must not be empty".to_string());
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0 when set".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
            transform_id: default_transform_id(),
            max_suggestions: default_max_suggestions(),
            client_tag: default_client_tag(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_kannada() {
        let config = ProviderConfig::default();
        assert_eq!(config.transform_id, "kn-t-i0-und");
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.client_tag, "demopage");
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_suggestions_is_rejected() {
        let config = ProviderConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"max_suggestions": 3, "timeout_secs": 10}"#).unwrap();
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.endpoint, "https://inputtools.google.com/request");
    }
}
