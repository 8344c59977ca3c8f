//! REST API types for frontend integration.
//!
//! The response keys are camelCase, matching what the Leptos frontend
//! deserializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::pinata::PinReceipt;

/// Response sent to the frontend after a successful pin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinResponse {
    /// Content identifier of the pinned JSON
    pub cid: String,

    /// Pinned size in bytes
    pub pin_size: u64,

    /// When Pinata recorded the pin
    pub timestamp: DateTime<Utc>,

    /// Link through the dedicated gateway
    pub gateway_url: String,
}

impl PinResponse {
    /// Build the wire response from a receipt and its gateway link.
    pub fn from_receipt(receipt: PinReceipt, gateway_url: String) -> Self {
        Self {
            cid: receipt.cid,
            pin_size: receipt.pin_size,
            timestamp: receipt.timestamp,
            gateway_url,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pin_response_wire_keys() {
        let receipt = PinReceipt {
            cid: "QmX".to_string(),
            pin_size: 312,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 2, 10, 14, 5).unwrap(),
        };
        let response = PinResponse::from_receipt(
            receipt,
            "https://example.mypinata.cloud/ipfs/QmX".to_string(),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cid"], "QmX");
        assert_eq!(json["pinSize"], 312);
        assert!(json["gatewayUrl"].as_str().unwrap().ends_with("/ipfs/QmX"));
        // snake_case keys must not leak onto the wire
        assert!(json.get("pin_size").is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response("Metadata must be a JSON object");
        assert_eq!(value["error"], "Metadata must be a JSON object");
    }
}
