//! Postal addresses

use serde::{Deserialize, Serialize};

/// Postal address in the shape the platform expects.
///
/// `line2` is part of the required field set even when blank; only `county`
/// may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    pub line1: String,
    pub line2: String,
    pub post_code: String,
}
