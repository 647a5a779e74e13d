//! redb-based counter store
//!
//! # Tables
//!
//! One table per [`CodeDomain`], named after [`CodeDomain::collection`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `year: i32` | JSON-serialized `SequenceCounter` |
//!
//! # Atomicity
//!
//! `increment` reads, bumps and writes the counter inside one write
//! transaction. redb allows a single writer at a time, so concurrent
//! increments serialize at the store. Commits use redb's default immediate
//! durability: once `commit()` returns the new value survives power loss.
//!
//! redb calls are blocking; every operation runs on the blocking pool.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::{CodeDomain, SequenceCounter};
use shared::util::now_millis;

use super::{CounterStore, StoreResult};

/// Table definition for a domain's counters: key = year, value = JSON counter
fn counter_table(domain: CodeDomain) -> TableDefinition<'static, i32, &'static [u8]> {
    TableDefinition::new(domain.collection())
}

/// Counter store backed by an embedded redb file
#[derive(Clone)]
pub struct RedbCounterStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbCounterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbCounterStore").finish_non_exhaustive()
    }
}

impl RedbCounterStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for tests and throwaway runs)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        // Create all counter tables if they don't exist
        let write_txn = db.begin_write()?;
        for domain in CodeDomain::ALL {
            let _ = write_txn.open_table(counter_table(domain))?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn increment_blocking(
        db: &Database,
        domain: CodeDomain,
        year: i32,
    ) -> StoreResult<Option<SequenceCounter>> {
        let now = now_millis();
        let txn = db.begin_write()?;
        let counter = {
            let mut table = txn.open_table(counter_table(domain))?;
            let mut counter = match table.get(year)? {
                Some(guard) => serde_json::from_slice::<SequenceCounter>(guard.value())?,
                None => SequenceCounter::empty(year, now),
            };
            counter.bump(now);
            let value = serde_json::to_vec(&counter)?;
            table.insert(year, value.as_slice())?;
            counter
        };
        txn.commit()?;
        Ok(Some(counter))
    }

    fn current_blocking(
        db: &Database,
        domain: CodeDomain,
        year: i32,
    ) -> StoreResult<Option<SequenceCounter>> {
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(counter_table(domain))?;
        match table.get(year)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn list_blocking(db: &Database, domain: CodeDomain) -> StoreResult<Vec<SequenceCounter>> {
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(counter_table(domain))?;

        let mut counters = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            counters.push(serde_json::from_slice(value.value())?);
        }
        Ok(counters)
    }
}

#[async_trait]
impl CounterStore for RedbCounterStore {
    fn backend(&self) -> &'static str {
        "redb"
    }

    async fn increment(
        &self,
        domain: CodeDomain,
        year: i32,
    ) -> StoreResult<Option<SequenceCounter>> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || Self::increment_blocking(&db, domain, year)).await?
    }

    async fn current(&self, domain: CodeDomain, year: i32) -> StoreResult<Option<SequenceCounter>> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || Self::current_blocking(&db, domain, year)).await?
    }

    async fn list(&self, domain: CodeDomain) -> StoreResult<Vec<SequenceCounter>> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || Self::list_blocking(&db, domain)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sequence_increment() {
        let store = RedbCounterStore::open_in_memory().unwrap();

        assert!(store.current(CodeDomain::Ticket, 2025).await.unwrap().is_none());

        let c1 = store.increment(CodeDomain::Ticket, 2025).await.unwrap().unwrap();
        let c2 = store.increment(CodeDomain::Ticket, 2025).await.unwrap().unwrap();
        let c3 = store.increment(CodeDomain::Ticket, 2025).await.unwrap().unwrap();
        assert_eq!((c1.seq, c2.seq, c3.seq), (1, 2, 3));
        assert_eq!(c3.created_at, c1.created_at);

        let current = store.current(CodeDomain::Ticket, 2025).await.unwrap().unwrap();
        assert_eq!(current.seq, 3);
    }

    #[tokio::test]
    async fn test_current_never_creates() {
        let store = RedbCounterStore::open_in_memory().unwrap();
        for _ in 0..3 {
            assert!(store.current(CodeDomain::Employee, 2025).await.unwrap().is_none());
        }
        assert!(store.list(CodeDomain::Employee).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_year() {
        let store = RedbCounterStore::open_in_memory().unwrap();
        store.increment(CodeDomain::CustomerInvoice, 2026).await.unwrap();
        store.increment(CodeDomain::CustomerInvoice, 2024).await.unwrap();
        store.increment(CodeDomain::CustomerInvoice, 2025).await.unwrap();
        store.increment(CodeDomain::Quotation, 2025).await.unwrap();

        let years: Vec<i32> = store
            .list(CodeDomain::CustomerInvoice)
            .await
            .unwrap()
            .iter()
            .map(|c| c.year)
            .collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
    }

    #[tokio::test]
    async fn test_counter_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counters.redb");

        {
            let store = RedbCounterStore::open(&path).unwrap();
            for _ in 0..10 {
                store.increment(CodeDomain::Supplier, 2025).await.unwrap();
            }
        }

        let store = RedbCounterStore::open(&path).unwrap();
        let current = store.current(CodeDomain::Supplier, 2025).await.unwrap().unwrap();
        assert_eq!(current.seq, 10);
        let next = store.increment(CodeDomain::Supplier, 2025).await.unwrap().unwrap();
        assert_eq!(next.seq, 11);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_unique() {
        let store = RedbCounterStore::open_in_memory().unwrap();
        let mut handles = Vec::new();
        for _ in 0..100 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .increment(CodeDomain::TechnicianJob, 2025)
                    .await
                    .unwrap()
                    .unwrap()
                    .seq
            }));
        }

        let mut seqs = Vec::new();
        for handle in handles {
            seqs.push(handle.await.unwrap());
        }
        seqs.sort();
        assert_eq!(seqs, (1..=100).collect::<Vec<i64>>());
    }
}
