//! HTTP Server for the Mintkit pin gateway.
//!
//! Provides the REST endpoint the frontend pins metadata through.
//! Contract deployment is handled by the external deploy API, not here.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                          |
//! |--------|-------------------|--------------------------------------|
//! | GET    | `/health`         | Health check                         |
//! | POST   | `/api/pin`        | Pin a metadata JSON document         |

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

use super::types::{error_response, PinResponse};
use crate::error::PinataError;
use crate::pinata::{PinataClient, DEFAULT_PIN_NAME};

/// Start the HTTP server.
///
/// The client is built by the caller so credential problems surface
/// before the port is bound.
pub async fn start_server(
    port: u16,
    client: PinataClient,
) -> Result<(), Box<dyn std::error::Error>> {
    // Permissive CORS for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/pin", post(pin_metadata))
        .layer(cors)
        .with_state(Arc::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 Mintkit pin gateway running on http://localhost:{}", port);
    println!("   POST /api/pin - Pin metadata JSON to IPFS");
    println!("   GET  /health  - Health check");
    println!();
    println!("📝 Contract deployment via the external deploy API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mintkit",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "pin": "POST /api/pin"
        }
    }))
}

/// Pin endpoint: accepts a metadata JSON object and pins it through
/// the configured Pinata account.
async fn pin_metadata(
    State(client): State<Arc<PinataClient>>,
    Json(content): Json<Value>,
) -> Result<Json<PinResponse>, (StatusCode, Json<Value>)> {
    if !content.is_object() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(error_response("Metadata must be a JSON object")),
        ));
    }

    let name = content
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PIN_NAME);
    println!("\n📌 NEW PIN: \"{}\"", name);

    let receipt = client.pin_json(&content, None).await.map_err(|e| {
        eprintln!("❌ Pin error: {}", e);
        (error_status(&e), Json(error_response(&e.to_string())))
    })?;

    let gateway_url = client.gateway_url(&receipt.cid);
    println!("✅ Pinned {} -> {}", receipt.cid, gateway_url);

    Ok(Json(PinResponse::from_receipt(receipt, gateway_url)))
}

/// Status the gateway reports for a Pinata failure. Upstream problems
/// are a bad gateway from the frontend's point of view.
fn error_status(error: &PinataError) -> StatusCode {
    match error {
        PinataError::RequestFailed(_)
        | PinataError::ApiError(_)
        | PinataError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        PinataError::MissingCredentials(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
