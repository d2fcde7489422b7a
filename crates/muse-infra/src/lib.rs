//! # Muse Infrastructure
//!
//! Concrete implementations of the ports defined in `muse-core`:
//! key-value storage backends, the stores built on top of them, and the
//! Gemini text-generation client.

pub mod gemini;
pub mod storage;
pub mod stores;

pub use gemini::GeminiClient;
pub use storage::{InMemoryKeyValueStore, JsonFileStore};
pub use stores::{CalendarStore, CredentialStore, HistoryStore};
