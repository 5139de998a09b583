use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;
use crate::services::catalog::CatalogIndex;

pub mod recommendations;
pub mod titles;

/// Creates the application router with all routes
///
/// The catalog index is injected once at startup and shared read-only across
/// handlers; no handler mutates it.
pub fn create_router(catalog: Arc<CatalogIndex>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes(catalog))
        .layer(TraceLayer::new_for_http().make_span_with(request_id::make_span))
        .layer(middleware::from_fn(request_id::propagate_request_id))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes(catalog: Arc<CatalogIndex>) -> Router {
    Router::new()
        .route("/titles/match", get(titles::match_title))
        .route("/recommendations", post(recommendations::recommend))
        .with_state(catalog)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
