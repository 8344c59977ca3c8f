//! Error types for the Mintkit pin gateway.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`PinataError`] - Pinata client errors
//! - [`ServerError`] - Top-level HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Pinata Client Errors
// =============================================================================

/// Errors from the Pinata client.
#[derive(Debug, Error)]
pub enum PinataError {
    /// Missing credentials.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// Pinata rejected the request.
    #[error("Pinata API error: {0}")]
    ApiError(String),

    /// Response body could not be decoded.
    #[error("Invalid Pinata response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Pinata error.
    #[error("Pinata error: {0}")]
    Pinata(#[from] PinataError),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for Pinata operations.
pub type PinataResult<T> = Result<T, PinataError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // PinataError -> ServerError
        let pinata_err = PinataError::ApiError("INVALID_API_KEYS".into());
        let server_err: ServerError = pinata_err.into();
        assert!(server_err.to_string().contains("INVALID_API_KEYS"));
    }

    #[test]
    fn test_missing_credentials_format() {
        let err = PinataError::MissingCredentials("PINATA_JWT not set".into());
        assert!(err.to_string().contains("PINATA_JWT"));
    }
}
