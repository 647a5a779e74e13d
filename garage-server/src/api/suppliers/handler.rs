use axum::{Extension, Json, http::StatusCode};
use serde_json::Value;
use shared::models::SequenceCode;

/// POST /suppliers - supplier intake
///
/// `supplierCode` is already in the body, written by the middleware. Supplier
/// persistence lives elsewhere; the accepted payload is echoed back.
pub async fn create(
    Extension(code): Extension<SequenceCode>,
    Json(supplier): Json<Value>,
) -> (StatusCode, Json<Value>) {
    tracing::info!(supplier_code = %code, "Supplier accepted");
    (StatusCode::CREATED, Json(supplier))
}
