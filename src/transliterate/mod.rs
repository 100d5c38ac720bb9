pub mod interface;
pub mod client;
pub mod factory;
pub mod response;

pub use interface::{
    TransliterationInterface, TransliterationRequest, TransliterationResult,
    DEFAULT_MAX_SUGGESTIONS,
};
pub use client::GoogleInputToolsClient;
pub use factory::TransliteratorFactory;
pub use response::parse_suggestions;
