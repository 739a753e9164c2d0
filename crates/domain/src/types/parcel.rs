//! Parcel dimensions and manifests

use serde::{Deserialize, Serialize};

/// Single parcel with identification and physical dimensions.
///
/// Dimensions are integer units as defined by the platform (cm / g).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parcel {
    pub barcode: String,
    pub height: u32,
    pub length: u32,
    #[serde(rename = "type")]
    pub parcel_type: String,
    pub volumetric_weight: u32,
    pub weight: u32,
    pub width: u32,
}

/// Manifest wrapper the replace-parcels endpoint expects as its payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parcels {
    pub parcels: Vec<Parcel>,
}

/// Result envelope for a parcel-manifest replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplaceParcelsResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parcel_type_uses_wire_name() {
        let parcel = Parcel {
            barcode: "BC-1".to_string(),
            height: 84,
            length: 33,
            parcel_type: "standard".to_string(),
            volumetric_weight: 3475,
            weight: 83,
            width: 22,
        };

        let value = serde_json::to_value(&parcel).expect("parcel serializes");
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("standard"));
        assert!(value.get("parcel_type").is_none());
    }
}
