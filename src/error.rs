use serde_json::Value;
use thiserror::Error;

/// Errors produced by a single transliteration call.
///
/// An empty suggestion list is not an error: it is returned as `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum TranslitError {
    /// The request could not complete (connection, DNS, timeout or a non-2xx status).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("could not decode JSON response: {source}. Response text: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response was JSON but did not have the expected shape.
    #[error("malformed provider response ({reason}). Response data: {data}")]
    MalformedResponse { reason: String, data: Value },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl TranslitError {
    pub(crate) fn malformed(reason: impl Into<String>, data: &Value) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            data: data.clone(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

pub type Result<T> = std::result::Result<T, TranslitError>;
