//! API routes
//!
//! - [`health`] - liveness check
//! - [`auto_code`] - code previews and counter listing
//! - [`suppliers`] - supplier intake (assigns supplierCode)

pub mod auto_code;
pub mod health;
pub mod suppliers;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no global middleware)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Health API
        .merge(health::router())
        // Auto code generator API
        .merge(auto_code::router())
        // Supplier API - supplierCode assigned before the handler runs
        .merge(suppliers::router().route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::assign_supplier_code,
        )))
        .fallback(|| async { AppError::not_found("Route") })
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        // ========== Tower HTTP Middleware ==========
        // CORS - dashboard runs on another origin
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static("x-request-id")))
        // Generate unique ID for each request (outermost, runs first)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .with_state(state)
}
