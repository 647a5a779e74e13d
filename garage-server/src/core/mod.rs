//! Core - server config, state and errors
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared server state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup and runtime errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{ClockKind, Config, CounterBackend};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
