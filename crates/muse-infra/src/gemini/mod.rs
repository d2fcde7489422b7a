//! Gemini text-generation adapter.

mod client;
mod types;

pub use client::{DEFAULT_MODEL, GeminiClient};
