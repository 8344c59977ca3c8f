//! HTTP service for pinning metadata through the pin gateway.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::PIN_API_URL;
use crate::metadata::NftMetadata;
use crate::types::{AppError, AppResult, PinReceipt};

/// Error body returned by the pin gateway on failure.
#[derive(Debug, Deserialize)]
struct PinErrorBody {
    error: String,
}

/// Pin a composed metadata document and return the gateway's receipt.
pub async fn pin_metadata(metadata: &NftMetadata) -> AppResult<PinReceipt> {
    let url = format!("{}/api/pin", PIN_API_URL);
    let request = Request::post(&url)
        .json(metadata)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Upload(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let message = match response.json::<PinErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("Pin gateway returned status {}", status),
        };
        return Err(AppError::Upload(message));
    }

    let receipt = response
        .json::<PinReceipt>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))?;

    ensure_pinned(receipt)
}

/// Reject receipts without a content identifier; a pin that returned
/// no CID cannot be referenced from a contract.
fn ensure_pinned(receipt: PinReceipt) -> AppResult<PinReceipt> {
    if receipt.cid.is_empty() {
        return Err(AppError::Upload(
            "Upload failed, no content identifier returned.".to_string(),
        ));
    }
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_with_cid_is_accepted() {
        let receipt: PinReceipt =
            serde_json::from_str(r#"{"cid": "QmX", "pinSize": 42}"#).unwrap();

        let accepted = ensure_pinned(receipt).unwrap();
        assert_eq!(accepted.cid, "QmX");
    }

    #[test]
    fn test_empty_cid_is_rejected() {
        let receipt: PinReceipt = serde_json::from_str(r#"{"cid": ""}"#).unwrap();

        match ensure_pinned(receipt) {
            Err(AppError::Upload(msg)) => assert!(msg.contains("no content identifier")),
            other => panic!("expected upload error, got {:?}", other),
        }
    }

    #[test]
    fn test_gateway_error_body_shape() {
        let body: PinErrorBody =
            serde_json::from_str(r#"{"error": "Pinata API error (401): invalid token"}"#).unwrap();
        assert!(body.error.contains("401"));
    }
}
