//! Shared types for the garage back office
//!
//! Domain types for business sequence codes, the unified error system and
//! small time utilities used by the server and its consumers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use models::{CodeDomain, SequenceCode, SequenceCounter};
pub use serde::{Deserialize, Serialize};
