//! Router setup and configuration.

use axum::http::{HeaderValue, Request};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{document, health, remessa, tracking};
use crate::api::state::AppState;

/// One UUID v4 per request, stamped into `x-request-id`.
#[derive(Debug, Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Document validation routes
    let document_routes = Router::new().route("/validate", post(document::validate));

    // Tracking-number routes
    let tracking_routes = Router::new()
        .route("/generate", get(tracking::generate))
        .route("/verify", post(tracking::verify));

    // Remessa/retorno file routes
    let remessa_routes = Router::new()
        .route("/build", post(remessa::build))
        .route("/parse", post(remessa::parse));

    // Combine all routes. CORS stays permissive: the consumer is a
    // browser form front-end served from another origin.
    Router::new()
        .merge(health_routes)
        .nest("/v1/document", document_routes)
        .nest("/v1/tracking", tracking_routes)
        .nest("/v1/remessa", remessa_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
