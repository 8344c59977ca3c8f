//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Token Standards** - the two contract flavors the deploy API accepts
//! - **API Types** - wire structures for the pin gateway and deploy API
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::IPFS_GATEWAY;

// =============================================================================
// Token Standards
// =============================================================================

/// Contract standard understood by the deploy API.
///
/// ERC-721 mints unique tokens; ERC-1155 mixes fungible and
/// non-fungible items in one contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TokenStandard {
    /// Unique, non-fungible items.
    #[serde(rename = "ERC721")]
    Erc721,
    /// Mixed fungible/non-fungible items.
    #[serde(rename = "ERC1155")]
    Erc1155,
}

impl TokenStandard {
    /// Wire name, as the deploy API expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStandard::Erc721 => "ERC721",
            TokenStandard::Erc1155 => "ERC1155",
        }
    }

    /// Ticker symbol sent alongside the deploy request.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenStandard::Erc721 => "NFT",
            TokenStandard::Erc1155 => "MULTI",
        }
    }
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// API Types - deploy
// =============================================================================

/// Body of `POST /api/deploy`.
///
/// Key casing is dictated by the deploy API (`type`, `baseURI`).
#[derive(Clone, Debug, Serialize)]
pub struct DeployRequest {
    /// Contract standard to deploy.
    #[serde(rename = "type")]
    pub standard: TokenStandard,
    /// Contract name (taken from the metadata name field).
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Metadata URI baked into the contract.
    #[serde(rename = "baseURI")]
    pub base_uri: String,
}

impl DeployRequest {
    /// Build a request for `standard`, deriving the symbol from it.
    pub fn new(standard: TokenStandard, name: impl Into<String>, base_uri: impl Into<String>) -> Self {
        Self {
            standard,
            name: name.into(),
            symbol: standard.symbol().to_string(),
            base_uri: base_uri.into(),
        }
    }
}

/// Response from the deploy API.
///
/// The API reports failures both as non-2xx statuses and as
/// `success: false` bodies; all optional fields default to `None`.
#[derive(Clone, Debug, Deserialize)]
pub struct DeployResponse {
    /// Whether the deployment went through.
    pub success: bool,
    /// Address of the deployed contract.
    #[serde(default)]
    pub contract_address: Option<String>,
    /// Address of the wallet the API created for the deployment.
    #[serde(default)]
    pub wallet_address: Option<String>,
    /// Remaining wallet balance in ETH, as a decimal string.
    #[serde(default)]
    pub wallet_balance: Option<String>,
    /// Server-side error description when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// API Types - pinning
// =============================================================================

/// Receipt returned by the pin gateway after a successful pin.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinReceipt {
    /// Content identifier of the pinned JSON.
    pub cid: String,
    /// Pinned size in bytes.
    #[serde(default)]
    pub pin_size: Option<u64>,
    /// When the pin was recorded, RFC 3339.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Link through the gateway's dedicated IPFS gateway.
    #[serde(default)]
    pub gateway_url: Option<String>,
}

impl PinReceipt {
    /// Browsable link to the pinned content.
    ///
    /// Prefers the gateway-provided URL, falls back to the public
    /// IPFS gateway.
    pub fn link(&self) -> String {
        match &self.gateway_url {
            Some(url) => url.clone(),
            None => format!("{}/{}", IPFS_GATEWAY, self.cid),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. `Validation` and
/// `Parse` are surfaced as blocking prompts before any network call;
/// `Upload` and `Deploy` end up in the inline error card.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A required metadata field is empty.
    Validation(String),
    /// The attributes field is not valid JSON.
    Parse(String),
    /// Pinning failed or returned no content identifier.
    Upload(String),
    /// Deploy request failed or the API reported a failure.
    Deploy(String),
}

impl AppError {
    /// Message without the kind prefix, for blocking prompts.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Parse(msg)
            | AppError::Upload(msg)
            | AppError::Deploy(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Deploy(msg) => write!(f, "Deploy error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_request_wire_keys() {
        let request = DeployRequest::new(TokenStandard::Erc721, "My NFT", "https://ipfs.io/ipfs/Qm123");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["type"], "ERC721");
        assert_eq!(json["name"], "My NFT");
        assert_eq!(json["symbol"], "NFT");
        assert_eq!(json["baseURI"], "https://ipfs.io/ipfs/Qm123");
        // snake_case key must not leak onto the wire
        assert!(json.get("base_uri").is_none());
    }

    #[test]
    fn test_deploy_request_symbol_per_standard() {
        let multi = DeployRequest::new(TokenStandard::Erc1155, "Game Items", "ipfs://x");
        assert_eq!(multi.symbol, "MULTI");
        assert_eq!(serde_json::to_value(&multi).unwrap()["type"], "ERC1155");
    }

    #[test]
    fn test_deploy_response_success_payload() {
        let json = r#"{
            "success": true,
            "contract_address": "0xabc",
            "wallet_address": "0xdef",
            "wallet_balance": "0.01",
            "status": "DEPLOYMENT_COMPLETE"
        }"#;

        let response: DeployResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.contract_address.as_deref(), Some("0xabc"));
        assert_eq!(response.wallet_balance.as_deref(), Some("0.01"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_deploy_response_error_payload() {
        let json = r#"{"success": false, "error": "Wallet creation failed: FAUCET_TIMEOUT", "step": "WALLET_CREATION"}"#;

        let response: DeployResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Wallet creation failed: FAUCET_TIMEOUT"));
        assert!(response.contract_address.is_none());
    }

    #[test]
    fn test_pin_receipt_camel_case() {
        let json = r#"{
            "cid": "QmTzQ1Nj5xkUyHcBjZk4fb7rrCTrEWMBgsNSDBJOe47fvZ",
            "pinSize": 312,
            "timestamp": "2025-03-02T10:14:05Z",
            "gatewayUrl": "https://gateway.example.cloud/ipfs/QmTzQ1Nj5xkUyHcBjZk4fb7rrCTrEWMBgsNSDBJOe47fvZ"
        }"#;

        let receipt: PinReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.pin_size, Some(312));
        assert!(receipt.link().starts_with("https://gateway.example.cloud/ipfs/"));
    }

    #[test]
    fn test_pin_receipt_link_falls_back_to_public_gateway() {
        let receipt: PinReceipt = serde_json::from_str(r#"{"cid": "QmX"}"#).unwrap();
        assert_eq!(receipt.link(), "https://ipfs.io/ipfs/QmX");
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::Upload("no content identifier returned".to_string());
        assert_eq!(error.to_string(), "Upload error: no content identifier returned");
        assert_eq!(error.message(), "no content identifier returned");
    }
}
