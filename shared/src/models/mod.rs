//! Data models
//!
//! Shared between garage-server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod sequence;

// Re-exports
pub use sequence::*;
