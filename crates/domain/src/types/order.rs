//! Delivery orders and their response envelopes

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::customer::Customer;
use super::field::Field;
use super::parcel::Parcel;
use super::schedule::ScheduleSlot;

/// Delivery order as submitted to and echoed by the platform.
///
/// `order_id` and `tracking_id` are assigned upstream and only appear on
/// orders read back from the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_value: Option<f32>,
    pub customer: Customer,
    pub delivery_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    pub delivery_type: String,
    #[serde(rename = "expected_delivery_ts")]
    pub expected_delivery: ScheduleSlot,
    #[serde(rename = "expected_pick_up_ts")]
    pub expected_pick_up: ScheduleSlot,
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_value: Option<f32>,
    pub parcels: Vec<Parcel>,
    pub pick_up_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_up_instructions: Option<String>,
    pub service_type: String,
    /// Absent means "not specified": the platform applies its own
    /// undeliverable-parcel handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeliverable_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeliverable_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_details: Vec<Field>,
}

/// Envelope returned by order creation and retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub success: OrderConfirmation,
}

/// Tracking identifier assigned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub tracking_id: String,
}

/// Envelope returned by order updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateResponse {
    pub success: bool,
}

/// Envelope returned by order cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelResponse {
    pub success: bool,
}
