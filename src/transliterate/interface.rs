use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config_manager::KANNADA_TRANSFORM_ID;
use crate::error::{Result, TranslitError};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A single transliteration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationRequest {
    pub input_text: String,
    /// Provider transform identifier, e.g. `kn-t-i0-und`
    pub target_script: String,
    pub max_suggestions: usize,
}

impl TransliterationRequest {
    pub fn new(
        input_text: impl Into<String>,
        target_script: impl Into<String>,
        max_suggestions: usize,
    ) -> Result<Self> {
        if max_suggestions == 0 {
            return Err(TranslitError::InvalidRequest(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            input_text: input_text.into(),
            target_script: target_script.into(),
            max_suggestions,
        })
    }

    /// Kannada request with the default suggestion count
    pub fn kannada(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            target_script: KANNADA_TRANSFORM_ID.to_string(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Suggestions ranked best first; possibly empty
pub type TransliterationResult = Vec<String>;

/// Transliteration interface trait
#[async_trait]
pub trait TransliterationInterface: Send + Sync {
    /// Transliterate the request's input into ranked suggestions.
    ///
    /// Empty input yields an empty result without contacting the provider.
    async fn transliterate(
        &self,
        request: &TransliterationRequest,
    ) -> Result<TransliterationResult>;

    /// Transliterate `text` using the implementation's configured defaults
    async fn transliterate_text(&self, text: &str) -> Result<TransliterationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_suggestions() {
        let err = TransliterationRequest::new("namaskara", KANNADA_TRANSFORM_ID, 0).unwrap_err();
        assert!(matches!(err, TranslitError::InvalidRequest(_)));
    }

    #[test]
    fn kannada_defaults() {
        let request = TransliterationRequest::kannada("kannada");
        assert_eq!(request.target_script, "kn-t-i0-und");
        assert_eq!(request.max_suggestions, 5);
    }
}
