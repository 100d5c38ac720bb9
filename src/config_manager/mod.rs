pub mod cli;
pub mod main;
pub mod provider;
pub mod utils;

pub use cli::CliConfig;
pub use main::Config;
pub use provider::{ProviderConfig, GOOGLE_INPUT_TOOLS, KANNADA_TRANSFORM_ID};
pub use utils::load_config;
