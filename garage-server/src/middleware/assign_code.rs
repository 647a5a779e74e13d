//! Code assignment middleware
//!
//! Mints a code before a create handler runs and writes it into the JSON
//! request body. The downstream handler sees the code as if the client had
//! sent it; a client-supplied value under the same field is overwritten.
//!
//! The body is validated before generation, so a malformed request never
//! consumes a sequence number.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use shared::models::{CodeDomain, SequenceCode};

use crate::core::ServerState;
use crate::sequence::CodeGenerator;
use crate::utils::CodeApiError;

/// Largest request body the middleware will buffer
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Which domain to mint for, and where the code goes in the body
#[derive(Debug, Clone)]
pub struct AssignCode {
    pub generator: CodeGenerator,
    pub domain: CodeDomain,
    pub field: &'static str,
}

impl AssignCode {
    pub fn new(generator: CodeGenerator, domain: CodeDomain, field: &'static str) -> Self {
        Self {
            generator,
            domain,
            field,
        }
    }
}

/// Generic assignment layer: `from_fn_with_state(AssignCode::new(..), assign_code)`
pub async fn assign_code(
    State(assign): State<AssignCode>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    assign_into_request(&assign.generator, assign.domain, assign.field, request, next).await
}

/// Supplier creation: `supplierCode` on the body
pub async fn assign_supplier_code(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    assign_into_request(
        &state.generator,
        CodeDomain::Supplier,
        CodeDomain::Supplier.response_key(),
        request,
        next,
    )
    .await
}

async fn assign_into_request(
    generator: &CodeGenerator,
    domain: CodeDomain,
    field: &'static str,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let (mut parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            tracing::warn!(domain = %domain, "Failed to read request body: {e}");
            CodeApiError::InvalidBody("Failed to read request body".into()).into_response()
        })?;
    let mut object = parse_object(&bytes).map_err(IntoResponse::into_response)?;

    let code = generator.generate_code(domain).await.map_err(|e| {
        tracing::error!(domain = %domain, error = %e, "Code assignment failed");
        CodeApiError::Assign(e).into_response()
    })?;

    object.insert(field.to_string(), Value::String(code.to_string()));
    let payload = serde_json::to_vec(&Value::Object(object)).map_err(|e| {
        tracing::error!(domain = %domain, "Failed to re-encode request body: {e}");
        CodeApiError::InvalidBody("Failed to encode request body".into()).into_response()
    })?;

    tracing::debug!(domain = %domain, field, code = %code, "Code assigned to request");

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.extensions.insert::<SequenceCode>(code);

    let request = Request::from_parts(parts, Body::from(payload));
    Ok(next.run(request).await)
}

/// Empty body counts as `{}`; anything but a JSON object is rejected
fn parse_object(bytes: &Bytes) -> Result<Map<String, Value>, CodeApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CodeApiError::InvalidBody(
            "Request body must be a JSON object".into(),
        )),
        Err(e) => Err(CodeApiError::InvalidBody(format!("Invalid JSON body: {e}"))),
    }
}
