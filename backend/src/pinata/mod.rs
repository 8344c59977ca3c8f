//! Pinata client for pinning JSON to IPFS.
//!
//! Wraps the `pinJSONToIPFS` endpoint of the Pinata REST API. The
//! credentials live server-side only; browsers talk to this gateway,
//! never to Pinata directly.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mintkit::pinata::PinataClient;
//! use serde_json::json;
//!
//! let client = PinataClient::from_env()?;
//! let receipt = client.pin_json(&json!({"name": "My NFT"}), None).await?;
//! println!("{}", client.gateway_url(&receipt.cid));
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;

use crate::error::{PinataError, PinataResult};

/// Base URL of the Pinata REST API.
const PINATA_API_URL: &str = "https://api.pinata.cloud";

/// Name given to pins whose content carries no usable name.
pub const DEFAULT_PIN_NAME: &str = "mintkit-metadata";

/// Pinata API client.
#[derive(Clone)]
pub struct PinataClient {
    jwt: String,
    gateway: String,
    api_url: String,
    http: reqwest::Client,
}

/// Outcome of a successful pin.
#[derive(Debug, Clone)]
pub struct PinReceipt {
    /// Content identifier of the pinned JSON.
    pub cid: String,
    /// Pinned size in bytes.
    pub pin_size: u64,
    /// When Pinata recorded the pin.
    pub timestamp: DateTime<Utc>,
}

/// Pinata `pinJSONToIPFS` response structure.
#[derive(Debug, Deserialize)]
struct PinJsonResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
    #[serde(rename = "PinSize")]
    pin_size: u64,
    #[serde(rename = "Timestamp")]
    timestamp: DateTime<Utc>,
}

/// Pinata API error response.
#[derive(Debug, Deserialize)]
struct PinataErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: String,
    #[serde(default)]
    details: String,
}

impl PinataClient {
    /// Create a new client with explicit credentials.
    ///
    /// `gateway` is the bare host of the dedicated gateway, e.g.
    /// `example.mypinata.cloud`.
    pub fn new(jwt: String, gateway: String) -> Self {
        Self {
            jwt,
            gateway,
            api_url: PINATA_API_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from the `PINATA_JWT` and `PINATA_GATEWAY`
    /// environment variables. Both are required.
    pub fn from_env() -> PinataResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let jwt = env::var("PINATA_JWT")
            .map_err(|_| PinataError::MissingCredentials("PINATA_JWT not set".to_string()))?;
        let gateway = env::var("PINATA_GATEWAY")
            .map_err(|_| PinataError::MissingCredentials("PINATA_GATEWAY not set".to_string()))?;

        Ok(Self::new(jwt, gateway))
    }

    /// Override the API base URL (for tests).
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Pin a JSON document to IPFS.
    ///
    /// `name` labels the pin in the Pinata dashboard; when `None`, the
    /// content's own `name` field is used if it has one.
    pub async fn pin_json(&self, content: &Value, name: Option<&str>) -> PinataResult<PinReceipt> {
        let body = build_pin_body(content, name);

        println!("   📡 Calling Pinata API...");

        let response = self
            .http
            .post(format!("{}/pinning/pinJSONToIPFS", self.api_url))
            .header("Content-Type", "application/json")
            .bearer_auth(&self.jwt)
            .json(&body)
            .send()
            .await
            .map_err(|e| PinataError::RequestFailed(e.to_string()))?;

        let status = response.status();
        println!("      Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| PinataError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            // Try to parse error
            if let Ok(error) = serde_json::from_str::<PinataErrorBody>(&body) {
                println!("      ✗ API error: {}", error.error.reason);
                return Err(PinataError::ApiError(describe_error(&error)));
            }
            println!("      ✗ HTTP error: {}", status);
            return Err(PinataError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let response: PinJsonResponse =
            serde_json::from_str(&body).map_err(|e| PinataError::InvalidResponse(e.to_string()))?;

        println!("      ✓ Pinned as {} ({} bytes)", response.ipfs_hash, response.pin_size);

        Ok(PinReceipt {
            cid: response.ipfs_hash,
            pin_size: response.pin_size,
            timestamp: response.timestamp,
        })
    }

    /// Browsable URL of a CID through the dedicated gateway.
    pub fn gateway_url(&self, cid: &str) -> String {
        format!("https://{}/ipfs/{}", self.gateway, cid)
    }
}

/// Build the `pinJSONToIPFS` request body.
fn build_pin_body(content: &Value, name: Option<&str>) -> Value {
    let pin_name = name
        .or_else(|| content.get("name").and_then(Value::as_str))
        .unwrap_or(DEFAULT_PIN_NAME);

    json!({
        "pinataContent": content,
        "pinataMetadata": { "name": pin_name }
    })
}

/// One-line description of a Pinata error body.
fn describe_error(body: &PinataErrorBody) -> String {
    if body.error.details.is_empty() {
        body.error.reason.clone()
    } else {
        format!("{}: {}", body.error.reason, body.error.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_body_with_explicit_name() {
        let content = json!({"name": "Sample ERC721 NFT", "image": "https://example.com/i.png"});
        let body = build_pin_body(&content, Some("my-pin"));

        assert_eq!(body["pinataMetadata"]["name"], "my-pin");
        assert_eq!(body["pinataContent"]["image"], "https://example.com/i.png");
    }

    #[test]
    fn test_pin_body_falls_back_to_content_name() {
        let content = json!({"name": "Sample ERC721 NFT"});
        let body = build_pin_body(&content, None);

        assert_eq!(body["pinataMetadata"]["name"], "Sample ERC721 NFT");
    }

    #[test]
    fn test_pin_body_default_name() {
        let content = json!({"description": "nameless"});
        let body = build_pin_body(&content, None);

        assert_eq!(body["pinataMetadata"]["name"], DEFAULT_PIN_NAME);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "IpfsHash": "QmTzQ1Nj5xkUyHcBjZk4fb7rrCTrEWMBgsNSDBJOe47fvZ",
            "PinSize": 312,
            "Timestamp": "2025-03-02T10:14:05.123Z"
        }"#;

        let response: PinJsonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.ipfs_hash, "QmTzQ1Nj5xkUyHcBjZk4fb7rrCTrEWMBgsNSDBJOe47fvZ");
        assert_eq!(response.pin_size, 312);
        assert_eq!(response.timestamp.to_rfc3339(), "2025-03-02T10:14:05.123+00:00");
    }

    #[test]
    fn test_error_body_decoding() {
        let json = r#"{"error": {"reason": "INVALID_API_KEYS", "details": "Invalid API key provided"}}"#;

        let body: PinataErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(describe_error(&body), "INVALID_API_KEYS: Invalid API key provided");
    }

    #[test]
    fn test_error_body_without_details() {
        let json = r#"{"error": {"reason": "PAID_FEATURE_ONLY"}}"#;

        let body: PinataErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(describe_error(&body), "PAID_FEATURE_ONLY");
    }

    #[test]
    fn test_gateway_url() {
        let client = PinataClient::new("jwt".to_string(), "example.mypinata.cloud".to_string());
        assert_eq!(
            client.gateway_url("QmX"),
            "https://example.mypinata.cloud/ipfs/QmX"
        );
    }

    #[test]
    fn test_api_url_override_strips_trailing_slash() {
        let client = PinataClient::new("jwt".to_string(), "g".to_string())
            .with_api_url("http://localhost:9999/");
        assert_eq!(client.api_url, "http://localhost:9999");
    }
}
