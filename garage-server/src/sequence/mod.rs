//! Sequence code generation
//!
//! - [`CodeGenerator`]: mints (`generate_code`) and previews (`peek_current_code`) codes
//! - [`Clock`]: where the year comes from
//! - [`SequenceError`]: generation / read failures, tagged with the domain

mod clock;
mod generator;

pub use clock::{Clock, FixedClock, LocalClock, UtcClock};
pub use generator::CodeGenerator;

use shared::error::ErrorCode;
use shared::models::CodeDomain;
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum SequenceError {
    /// Atomic increment failed or returned no record
    #[error("failed to generate {} code", .domain.label())]
    Generation {
        domain: CodeDomain,
        #[source]
        source: StoreError,
    },

    /// Read-only lookup failed
    #[error("failed to get {} code", .domain.label())]
    StoreRead {
        domain: CodeDomain,
        #[source]
        source: StoreError,
    },
}

impl SequenceError {
    pub fn domain(&self) -> CodeDomain {
        match self {
            SequenceError::Generation { domain, .. } | SequenceError::StoreRead { domain, .. } => {
                *domain
            }
        }
    }

    /// Shared error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            SequenceError::Generation { .. } => ErrorCode::SequenceGenerationFailed,
            SequenceError::StoreRead { .. } => ErrorCode::SequenceReadFailed,
        }
    }
}

pub type SequenceResult<T> = Result<T, SequenceError>;
