//! Structural validation of the provider's response.
//!
//! Observed shapes:
//!
//! ```text
//! ["SUCCESS", [["kannada", ["ಕನ್ನಡ", "ಕಾನ್ನಡ"], [], {}]]]
//! ["SUCCESS", []]
//! ```

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, TranslitError};

pub const SUCCESS_STATUS: &str = "SUCCESS";

/// Extract at most `max_suggestions` suggestions from a decoded response.
///
/// A non-`SUCCESS` status or an empty payload is an empty result, not an error.
pub fn parse_suggestions(data: &Value, max_suggestions: usize) -> Result<Vec<String>> {
    let top = data
        .as_array()
        .ok_or_else(|| TranslitError::malformed("top level is not an array", data))?;

    let status = top
        .first()
        .ok_or_else(|| TranslitError::malformed("missing status element", data))?;

    // The payload of a non-success response is never inspected.
    if status.as_str() != Some(SUCCESS_STATUS) {
        warn!("Provider returned status {}, treating as no suggestions", status);
        return Ok(Vec::new());
    }

    let payload = top
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslitError::malformed("payload is not an array", data))?;

    let entry = match payload.first() {
        Some(entry) => entry,
        None => return Ok(Vec::new()),
    };

    let suggestions = entry
        .as_array()
        .and_then(|entry| entry.get(1))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TranslitError::malformed("first payload entry has no suggestion list", data)
        })?;

    let mut suggestions = suggestions
        .iter()
        .map(|s| {
            s.as_str()
                .map(str::to_string)
                .ok_or_else(|| TranslitError::malformed("suggestion is not a string", data))
        })
        .collect::<Result<Vec<String>>>()?;
    suggestions.truncate(max_suggestions);
    Ok(suggestions)
}
