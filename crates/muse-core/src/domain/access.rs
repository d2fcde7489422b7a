use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A device granted access to the optimizer by an admin.
///
/// At most one record exists per device id; re-issuing a key replaces the
/// prior record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub device_id: String,
    pub access_key: String,
}

static DEVICE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("device id pattern compiles")
});

/// Device ids must have the hyphenated UUID shape (case-insensitive).
pub fn is_valid_device_id(device_id: &str) -> bool {
    DEVICE_ID_PATTERN.is_match(device_id.trim())
}
