//! In-process counter store
//!
//! Counters live in a `DashMap`; the entry guard makes find-or-create plus
//! increment one atomic step. Nothing survives a restart.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{CodeDomain, SequenceCounter};
use shared::util::now_millis;

use super::{CounterStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: DashMap<(CodeDomain, i32), SequenceCounter>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (domain, year) counters created so far
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn increment(
        &self,
        domain: CodeDomain,
        year: i32,
    ) -> StoreResult<Option<SequenceCounter>> {
        let now = now_millis();
        let mut entry = self
            .counters
            .entry((domain, year))
            .or_insert_with(|| SequenceCounter::empty(year, now));
        entry.bump(now);
        Ok(Some(entry.clone()))
    }

    async fn current(&self, domain: CodeDomain, year: i32) -> StoreResult<Option<SequenceCounter>> {
        Ok(self.counters.get(&(domain, year)).map(|c| c.clone()))
    }

    async fn list(&self, domain: CodeDomain) -> StoreResult<Vec<SequenceCounter>> {
        let mut counters: Vec<SequenceCounter> = self
            .counters
            .iter()
            .filter(|entry| entry.key().0 == domain)
            .map(|entry| entry.value().clone())
            .collect();
        counters.sort_by_key(|c| c.year);
        Ok(counters)
    }
}
