//! Free-form order metadata

use serde::{Deserialize, Serialize};

/// Typed name/value pair carried in `order_details`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: serde_json::Value,
}

/// Value types the platform accepts in order details.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Currency,
    Country,
    Number,
    Boolean,
    Uuid,
    Uri,
    Date,
    Time,
    Object,
    Array,
    Null,
}
