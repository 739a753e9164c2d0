//! Shipping label requests

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::customer::Customer;
use super::parcel::Parcel;
use super::schedule::ScheduleSlot;

/// Shipping label request.
///
/// Every field is optional on the wire; the label service validates the
/// combination server-side. The response body is the rendered document
/// itself (PDF or ZPL), never JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(rename = "expected_delivery_ts", default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<ScheduleSlot>,
    #[serde(rename = "expected_pick_up_ts", default, skip_serializing_if = "Option::is_none")]
    pub expected_pick_up: Option<ScheduleSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parcels: Vec<Parcel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_up_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_up_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeliverable_address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use crate::types::schedule::Schedule;

    use super::*;

    #[test]
    fn empty_label_serializes_to_empty_object() {
        let value = serde_json::to_value(Label::default()).expect("label serializes");
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn set_fields_use_wire_names() {
        let label = Label {
            external_id: Some("LB-77".to_string()),
            expected_delivery: Some(ScheduleSlot {
                start: Schedule { date: "2024-03-08".to_string(), time: "18:00:00".to_string() },
                end: Schedule { date: "2024-03-08".to_string(), time: "20:00:00".to_string() },
            }),
            ..Label::default()
        };

        let value = serde_json::to_value(&label).expect("label serializes");
        let object = value.as_object().expect("label is an object");

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("expected_delivery_ts"));
    }
}
