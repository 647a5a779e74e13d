//! Utilities
//!
//! - [`CodeApiError`] - HTTP errors of the sequence code endpoints
//! - logger initialization

pub mod error;
pub mod logger;

pub use error::CodeApiError;
