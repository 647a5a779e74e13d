//! Health check route
//!
//! | Path | Method | Description |
//! |------|------|------|
//! | /health | GET | liveness + counter store backend |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "backend": "redb", "environment": "development" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Counter store backend (redb | postgres | memory)
    backend: &'static str,
    environment: String,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.generator.backend(),
        environment: state.config.environment.clone(),
    })
}
