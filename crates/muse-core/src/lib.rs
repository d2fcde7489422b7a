//! # Muse Core
//!
//! The domain layer of Muse.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! domain types, the ports that infrastructure implements, prompt construction,
//! and the local keyword-density computation.

pub mod density;
pub mod domain;
pub mod error;
pub mod ports;
pub mod prompt;

pub use error::{GenerationError, KeyValueError};
