//! Unified error system
//!
//! - [`ErrorCode`]: numeric error codes with an HTTP status mapping
//! - [`AppError`]: error with code, message and details
//! - [`ErrorResponse`]: JSON body produced from an `AppError`
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Sequence code errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::with_message(ErrorCode::UnknownCodeDomain, "Unknown code domain: car")
//!     .with_detail("domain", "car");
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, 6003);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, ErrorResponse};
