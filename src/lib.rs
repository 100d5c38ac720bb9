//! Romanized text to Kannada script suggestions via the Google Input Tools API.

pub mod config_manager;
pub mod error;
pub mod session;
pub mod transliterate;

pub use error::TranslitError;
pub use transliterate::{
    GoogleInputToolsClient, TransliterationInterface, TransliterationRequest,
    TransliterationResult, TransliteratorFactory,
};
