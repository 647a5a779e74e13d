//! Supplier API Module
//!
//! | Path | Method | Description |
//! |------|------|------|
//! | /suppliers | POST | create supplier (assigns supplierCode) |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Supplier router
///
/// `supplierCode` assignment is layered on in `api::build_router`.
pub fn router() -> Router<ServerState> {
    Router::new().nest("/suppliers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
