//! Counter Store Module
//!
//! Persistence for sequence counters, one logical collection per code domain.
//!
//! | Backend | Type | Atomic increment |
//! |---------|------|------------------|
//! | `redb` | [`RedbCounterStore`] | single write transaction (writers serialize) |
//! | `postgres` | [`PgCounterStore`] | `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` |
//! | `memory` | [`MemoryCounterStore`] | DashMap entry lock |
//!
//! Every backend must implement `increment` as one atomic store operation.
//! A read followed by a separate write breaks code uniqueness under
//! concurrent requests.

pub mod memory_store;
pub mod pg_store;
pub mod redb_store;

pub use memory_store::MemoryCounterStore;
pub use pg_store::PgCounterStore;
pub use redb_store::RedbCounterStore;

use async_trait::async_trait;
use shared::models::{CodeDomain, SequenceCounter};
use thiserror::Error;

/// Counter store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Store returned no counter for {domain}/{year}")]
    NoDocument { domain: CodeDomain, year: i32 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent (domain, year) → counter mapping
#[async_trait]
pub trait CounterStore: Send + Sync + std::fmt::Debug {
    /// Backend name for logs and the health endpoint
    fn backend(&self) -> &'static str;

    /// Find-or-create the `(domain, year)` counter and add 1 to `seq` atomically.
    ///
    /// Returns the counter after the increment. `Ok(None)` means the store
    /// acknowledged the call but handed back no record.
    async fn increment(&self, domain: CodeDomain, year: i32)
    -> StoreResult<Option<SequenceCounter>>;

    /// Read the `(domain, year)` counter without creating or mutating it
    async fn current(&self, domain: CodeDomain, year: i32) -> StoreResult<Option<SequenceCounter>>;

    /// All counters of a domain, ascending by year
    async fn list(&self, domain: CodeDomain) -> StoreResult<Vec<SequenceCounter>>;
}
