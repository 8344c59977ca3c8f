//! HTTP service for the contract deploy API.
//!
//! The deploy API creates a fresh wallet, funds it from a faucet and
//! deploys the requested contract, all within a single long-running
//! request. It offers no idempotency key, so submitting the same
//! request twice deploys two contracts.

use gloo_net::http::Request;

use crate::config::DEPLOY_API_URL;
use crate::types::{AppError, AppResult, DeployRequest, DeployResponse};

/// Outcome of a successful deployment.
///
/// Unlike the wire [`DeployResponse`], the contract address here is
/// guaranteed to be present.
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    pub contract_address: String,
    pub wallet_address: Option<String>,
    /// Remaining balance in ETH, as reported by the API.
    pub wallet_balance: Option<String>,
}

/// Submit a deploy request and wait for the API to finish.
///
/// The API reports failures both as non-2xx statuses and as
/// `success: false` bodies with a 200, so the body is parsed before
/// the status is considered.
pub async fn request_deployment(request: &DeployRequest) -> AppResult<Deployment> {
    let url = format!("{}/api/deploy", DEPLOY_API_URL);
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| AppError::Deploy(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Deploy(format!("HTTP request failed: {}", e)))?;

    let payload = response
        .json::<DeployResponse>()
        .await
        .map_err(|e| AppError::Deploy(format!("Failed to parse response: {}", e)))?;

    into_deployment(payload)
}

/// Turn the wire payload into a [`Deployment`], treating both reported
/// failures and success responses without a contract address as
/// errors.
fn into_deployment(payload: DeployResponse) -> AppResult<Deployment> {
    if !payload.success {
        let message = payload
            .error
            .unwrap_or_else(|| "Failed to deploy contract".to_string());
        return Err(AppError::Deploy(message));
    }

    let contract_address = payload
        .contract_address
        .filter(|address| !address.is_empty())
        .ok_or_else(|| {
            AppError::Deploy("Deploy API reported success without a contract address".to_string())
        })?;

    Ok(Deployment {
        contract_address,
        wallet_address: payload.wallet_address,
        wallet_balance: payload.wallet_balance,
    })
}
