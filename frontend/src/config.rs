//! Application configuration.
//!
//! Centralized configuration for the Mintkit frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Pinning gateway base URL.
///
/// The mintkit backend that holds the Pinata credentials and pins
/// metadata on our behalf.
pub const PIN_API_URL: &str = "http://localhost:3000";

/// Deploy API base URL.
///
/// External service that creates a funded wallet and deploys the
/// contract. Not part of this repository.
pub const DEPLOY_API_URL: &str = "http://localhost:3001";

/// Public IPFS gateway used to link pinned metadata.
///
/// Fallback when the pinning gateway does not return a dedicated link.
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";

/// Block explorer for the target network.
pub const EXPLORER_URL: &str = "https://sepolia.basescan.org";

/// Network the deploy API targets.
///
/// Display only; the network is chosen by the deploy API itself.
pub const NETWORK_NAME: &str = "Base Sepolia";

/// Application name.
pub const APP_NAME: &str = "Mintkit";

/// Cadence of the deployment progress animation, in milliseconds.
///
/// The step list advances on this fixed interval while the deploy
/// request is in flight. It carries no information about real
/// deployment progress.
pub const TICK_INTERVAL_MS: u64 = 5_000;
