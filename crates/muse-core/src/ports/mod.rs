//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod key_value;

pub use generator::{
    Attachment, GenerationReply, GenerationRequest, GeoPoint, GroundingCitation, TextGenerator,
};
pub use key_value::KeyValueStore;
