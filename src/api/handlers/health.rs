//! Health check handlers.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::state::AppState;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness probe.
///
/// The service is stateless; once it can answer requests it is ready.
pub async fn ready() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "ready": true
        }
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
