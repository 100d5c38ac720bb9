use serde::{Deserialize, Serialize};

/// Settings for the interactive front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(rename = "log_filter")]
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "kannada_translit=info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}
