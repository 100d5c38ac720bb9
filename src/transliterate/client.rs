use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{TransliterationInterface, TransliterationRequest, TransliterationResult};
use super::response::parse_suggestions;
use crate::config_manager::ProviderConfig;
use crate::error::{Result, TranslitError};

/// Client for the Google Input Tools transliteration endpoint
#[derive(Debug, Clone)]
pub struct GoogleInputToolsClient {
    client: Client,
    endpoint: String,
    transform_id: String,
    max_suggestions: usize,
    client_tag: String,
}

impl GoogleInputToolsClient {
    /// Create a new client from provider configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.max_suggestions == 0 {
            return Err(TranslitError::InvalidRequest(
                "max_suggestions must be at least 1".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            transform_id: config.transform_id.clone(),
            max_suggestions: config.max_suggestions,
            client_tag: config.client_tag.clone(),
        })
    }

    /// Request built from this client's defaults
    pub fn request_for(&self, text: &str) -> TransliterationRequest {
        TransliterationRequest {
            input_text: text.to_string(),
            target_script: self.transform_id.clone(),
            max_suggestions: self.max_suggestions,
        }
    }

    async fn fetch(&self, request: &TransliterationRequest) -> Result<Value> {
        let num = request.max_suggestions.to_string();
        let params = [
            ("text", request.input_text.as_str()),
            ("itc", request.target_script.as_str()),
            ("num", num.as_str()),
            ("cp", "0"),
            ("cs", "1"),
            ("ie", "utf-8"),
            ("oe", "utf-8"),
            ("app", self.client_tag.as_str()),
        ];

        debug!(
            "Sending transliteration request: text={}, itc={}, num={}",
            request.input_text, request.target_script, num
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => Err(TranslitError::Decode { body, source }),
        }
    }
}

#[async_trait]
impl TransliterationInterface for GoogleInputToolsClient {
    async fn transliterate(
        &self,
        request: &TransliterationRequest,
    ) -> Result<TransliterationResult> {
        if request.input_text.is_empty() {
            return Ok(Vec::new());
        }
        if request.max_suggestions == 0 {
            return Err(TranslitError::InvalidRequest(
                "max_suggestions must be at least 1".to_string(),
            ));
        }

        let data = self.fetch(request).await?;
        let suggestions = parse_suggestions(&data, request.max_suggestions)?;
        debug!("Received {} suggestion(s)", suggestions.len());
        Ok(suggestions)
    }

    async fn transliterate_text(&self, text: &str) -> Result<TransliterationResult> {
        self.transliterate(&self.request_for(text)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_input_skips_network() {
        // Nothing listens on port 9; a request would fail with a transport error.
        let config = ProviderConfig {
            endpoint: "http://127.0.0.1:9/request".to_string(),
            ..Default::default()
        };
        let client = GoogleInputToolsClient::new(&config).unwrap();
        assert!(client.transliterate_text("").await.unwrap().is_empty());
    }

    #[test]
    fn request_uses_configured_defaults() {
        let config = ProviderConfig {
            max_suggestions: 3,
            ..Default::default()
        };
        let client = GoogleInputToolsClient::new(&config).unwrap();
        let request = client.request_for("namaskara");
        assert_eq!(request.target_script, "kn-t-i0-und");
        assert_eq!(request.max_suggestions, 3);
    }

    #[test]
    fn zero_suggestions_rejected_at_construction() {
        let config = ProviderConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(GoogleInputToolsClient::new(&config).is_err());
    }
}
