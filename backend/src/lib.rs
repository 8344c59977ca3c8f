//! # Mintkit - IPFS pinning gateway for NFT metadata
//!
//! Mintkit pins ERC-721/ERC-1155 metadata documents to IPFS through a
//! Pinata account, keeping the Pinata credentials server-side. The
//! frontend composes the metadata; contract deployment is handled by
//! the external deploy API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Metadata JSON│────▶│  Pin gateway │────▶│ Pinata / IPFS│
//! │  (frontend)  │     │ (this crate) │     │   (pinned)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mintkit::PinataClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PinataClient::from_env().unwrap();
//!     let receipt = client.pin_json(&json!({"name": "My NFT"}), None).await.unwrap();
//!     println!("pinned as {}", receipt.cid);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`pinata`] - Pinata REST client
//! - [`api`] - HTTP API server

// Core modules
pub mod error;

// Pinata client
pub mod pinata;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{PinataError, PinataResult, ServerError, ServerResult};

// =============================================================================
// Re-exports - Pinata Client
// =============================================================================

pub use pinata::{PinataClient, PinReceipt};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, PinResponse};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
