use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};
use shared::models::{CodeDomain, SequenceCounter};

use crate::core::ServerState;
use crate::utils::CodeApiError;

/// GET /auto-code-generator/{slug} - preview the next code
///
/// Read-only: never creates or advances a counter
pub async fn preview(state: ServerState, domain: CodeDomain) -> Result<Json<Value>, CodeApiError> {
    let code = state
        .generator
        .peek_current_code(domain)
        .await
        .map_err(CodeApiError::Preview)?;

    let mut body = Map::new();
    body.insert(
        domain.response_key().to_string(),
        Value::String(code.to_string()),
    );
    Ok(Json(Value::Object(body)))
}

/// GET /auto-code-generator/counters/{domain} - all yearly counters of a domain
pub async fn counters(
    State(state): State<ServerState>,
    Path(domain): Path<String>,
) -> Result<Json<Vec<SequenceCounter>>, CodeApiError> {
    let domain: CodeDomain = domain.parse().map_err(CodeApiError::UnknownDomain)?;
    let counters = state
        .generator
        .counters(domain)
        .await
        .map_err(CodeApiError::Listing)?;
    Ok(Json(counters))
}
