mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Environment variable holding the AI service API key. When set it takes
/// precedence over `llm.api_key` from the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from_path(&config_path).await?;

    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.is_empty() {
            config.llm.api_key = key;
        }
    }

    Ok(config)
}

pub async fn load_from_path(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
