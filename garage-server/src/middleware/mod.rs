//! HTTP middleware

pub mod assign_code;
pub mod logging;

pub use assign_code::{AssignCode, assign_code, assign_supplier_code};
pub use logging::logging_middleware;
