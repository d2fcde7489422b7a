//! Application state - shared across all handlers.

use std::sync::Arc;

use muse_core::error::GenerationError;
use muse_core::ports::{GenerationReply, GenerationRequest, KeyValueStore, TextGenerator};
use muse_infra::gemini::GeminiClient;
use muse_infra::storage::{InMemoryKeyValueStore, JsonFileStore};
use muse_infra::stores::{CalendarStore, CredentialStore, HistoryStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub calendar: Arc<CalendarStore>,
    pub history: Arc<HistoryStore>,
    pub credentials: Arc<CredentialStore>,
}

/// Fallback generator for when no API key is configured: every call fails
/// with a message telling the operator what to set.
struct UnconfiguredGenerator;

#[async_trait::async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError> {
        Err(GenerationError::Transport(
            "the generation service is not configured; set MUSE_GEMINI_API_KEY".to_string(),
        ))
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let persistent: Arc<dyn KeyValueStore> = match JsonFileStore::open(&config.data_dir) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    "Failed to open data directory: {e}. Falling back to in-memory storage."
                );
                Arc::new(InMemoryKeyValueStore::new())
            }
        };
        // Short-lived session tier lives and dies with the process.
        let session: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());

        let generator: Arc<dyn TextGenerator> = match &config.gemini {
            Some(gemini) => Arc::new(GeminiClient::new(
                gemini.api_key.as_str(),
                gemini.model.as_str(),
            )),
            None => {
                tracing::warn!(
                    "MUSE_GEMINI_API_KEY not set; generation endpoints will fail until it is configured"
                );
                Arc::new(UnconfiguredGenerator)
            }
        };

        let calendar = Arc::new(CalendarStore::load(persistent.clone()).await);
        let history = Arc::new(HistoryStore::new(persistent.clone()));
        let credentials = Arc::new(CredentialStore::new(session, persistent));

        tracing::info!("Application state initialized");

        Self {
            generator,
            calendar,
            history,
            credentials,
        }
    }

    /// State over in-memory storage and an explicit generator.
    #[cfg(test)]
    pub async fn for_tests(generator: Arc<dyn TextGenerator>) -> Self {
        let persistent: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let session: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());

        Self {
            generator,
            calendar: Arc::new(CalendarStore::load(persistent.clone()).await),
            history: Arc::new(HistoryStore::new(persistent.clone())),
            credentials: Arc::new(CredentialStore::new(session, persistent)),
        }
    }
}
