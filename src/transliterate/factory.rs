use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use super::client::GoogleInputToolsClient;
use super::interface::TransliterationInterface;
use crate::config_manager::{ProviderConfig, GOOGLE_INPUT_TOOLS};

/// Factory for creating transliteration clients
pub struct TransliteratorFactory;

impl TransliteratorFactory {
    /// Create a transliteration client based on configuration
    ///
    /// # Arguments
    /// * `provider_config` - Provider section of the application config
    ///
    /// # Returns
    /// Shared TransliterationInterface implementation
    pub fn create_transliterator(
        provider_config: &ProviderConfig,
    ) -> Result<Arc<dyn TransliterationInterface>> {
        provider_config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid provider configuration: {}", e))?;

        info!(
            "Initializing transliterator: provider={}, endpoint={}, itc={}",
            provider_config.provider, provider_config.endpoint, provider_config.transform_id
        );

        match provider_config.provider.as_str() {
            GOOGLE_INPUT_TOOLS => Ok(Arc::new(GoogleInputToolsClient::new(provider_config)?)),
            other => Err(anyhow::anyhow!("Unsupported transliteration provider: {}", other)),
        }
    }
}
