//! Auto Code Generator API Module
//!
//! | Path | Method | Response key |
//! |------|------|--------|
//! | /auto-code-generator/ticket-code | GET | ticketCode |
//! | /auto-code-generator/techcian-job-code | GET | jobCode |
//! | /auto-code-generator/employee-code | GET | employeeCode |
//! | /auto-code-generator/supplier-code | GET | supplierCode |
//! | /auto-code-generator/customer-invoice-code | GET | customerInvoiceCode |
//! | /auto-code-generator/quotation-auto-code | GET | quotationCode |
//! | /auto-code-generator/counters/{domain} | GET | - |
//!
//! `techcian-job-code` is the path the dashboard calls; keep the spelling.

mod handler;

use axum::{Router, extract::State, routing::get};
use shared::models::CodeDomain;

use crate::core::ServerState;

/// Auto code generator router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/auto-code-generator", routes())
}

fn routes() -> Router<ServerState> {
    let mut router = Router::new().route("/counters/{domain}", get(handler::counters));

    for domain in CodeDomain::ALL {
        router = router.route(
            &format!("/{}", domain.route_slug()),
            get(move |State(state): State<ServerState>| handler::preview(state, domain)),
        );
    }

    router
}
