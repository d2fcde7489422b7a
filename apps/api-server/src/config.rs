//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use muse_infra::gemini::DEFAULT_MODEL;

/// Generation service settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the persisted stores.
    pub data_dir: PathBuf,
    /// Generation settings; generation endpoints fail until this is set.
    pub gemini: Option<GeminiConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let gemini = env::var("MUSE_GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key,
                model: env::var("MUSE_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("MUSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            gemini,
        }
    }
}
