//! Axum HTTP proving service.
//!
//! Routes:
//!   POST /api/generate-proof: run the prover for a name and report the outcome
//!   GET  /health: health check
//!
//! Every proof request spawns its own prover process and holds the response
//! until that process exits. Nothing bounds how many run at once.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use roast_proof_core::{
    build_response, require_name, ErrorResponse, HealthResponse, ProofResponse, ProverRun,
    NAME_REQUIRED,
};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use tracing::{error, info, warn};

use crate::runner::ProofRunner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn ProofRunner>,
}

/// Errors surfaced to HTTP callers. Failed proofs are not errors.
#[derive(Debug)]
pub enum ApiError {
    /// Rejected before any prover ran.
    Validation(&'static str),
    /// Anything unexpected while handling the request.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            Self::Internal(message) => {
                error!("Proof generation error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Build the Axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-proof", post(handle_generate_proof))
        .route("/health", get(handle_health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Run the prover for `name` and synthesize the response.
///
/// A prover that cannot be started counts as a failed proof.
pub async fn generate_proof(runner: &dyn ProofRunner, name: &str) -> ProofResponse {
    info!(name = %name, "Running SP1 proof generator");

    let run = match runner.run(name).await {
        Ok(run) => run,
        Err(e) => {
            error!(name = %name, "Failed to launch prover: {}", e);
            ProverRun::not_started()
        }
    };

    info!(stdout = %run.stdout, "SP1 output");
    if !run.stderr.is_empty() {
        warn!(stderr = %run.stderr, "SP1 errors");
    }

    let response = build_response(name, run);
    if response.success {
        info!(proof_hash = %response.proof_hash, "Real SP1 proof generated");
    } else {
        warn!(proof_hash = %response.proof_hash, "Proof generation failed");
    }
    response
}

/// POST /api/generate-proof: prove a name.
async fn handle_generate_proof(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProofResponse>, ApiError> {
    let body = body.map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
    let body = parse_body(&headers, &body)?;

    let name = extract_name(&body)?;
    info!(name = %name, "Received proof request");

    Ok(Json(generate_proof(state.runner.as_ref(), &name).await))
}

/// Decode a request body as JSON.
///
/// Bodies that are empty or not sent as JSON are ignored and read as `null`,
/// so they fail name validation rather than parsing.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::Internal(format!("Failed to parse the request body as JSON: {}", e))
    })
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Pull a usable name out of a request body.
///
/// Absent, `null`, `false`, `0` and `""` all count as missing. Any other
/// non-string value is a malformed request.
fn extract_name(body: &Value) -> Result<String, ApiError> {
    match body.get("name").unwrap_or(&Value::Null) {
        Value::String(name) => {
            require_name(Some(name.as_str())).ok_or(ApiError::Validation(NAME_REQUIRED))
        }
        Value::Null | Value::Bool(false) => Err(ApiError::Validation(NAME_REQUIRED)),
        Value::Number(n) if n.as_f64() == Some(0.0) => Err(ApiError::Validation(NAME_REQUIRED)),
        other => Err(ApiError::Internal(format!(
            "name must be a string, got {}",
            other
        ))),
    }
}

/// GET /health: health check.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Turn a panic inside a handler into a 500 with the panic message.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    ApiError::Internal(message).into_response()
}
