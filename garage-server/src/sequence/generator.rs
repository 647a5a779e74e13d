use std::sync::Arc;

use shared::models::{CodeDomain, SequenceCode, SequenceCounter};

use super::{Clock, SequenceError, SequenceResult};
use crate::db::{CounterStore, StoreError};

/// Sequence code generator
///
/// Holds no counter state of its own: every call is a single round trip to
/// the store, whose atomic increment is what keeps codes unique across
/// concurrent requests and processes sharing the store.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    store: Arc<dyn CounterStore>,
    clock: Arc<dyn Clock>,
}

impl CodeGenerator {
    pub fn new(store: Arc<dyn CounterStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Store backend name
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Mint the next code for `domain` in the current year.
    ///
    /// Consumes a sequence number even if the caller later drops the result.
    pub async fn generate_code(&self, domain: CodeDomain) -> SequenceResult<SequenceCode> {
        let year = self.clock.current_year();

        let counter = match self.store.increment(domain, year).await {
            Ok(Some(counter)) => counter,
            Ok(None) => {
                let source = StoreError::NoDocument { domain, year };
                tracing::error!(domain = %domain, year, error = %source, "Sequence increment returned no counter");
                return Err(SequenceError::Generation { domain, source });
            }
            Err(source) => {
                tracing::error!(domain = %domain, year, error = %source, "Sequence increment failed");
                return Err(SequenceError::Generation { domain, source });
            }
        };

        let code = SequenceCode::new(domain, year, counter.seq);
        tracing::info!(domain = %domain, year, seq = counter.seq, code = %code, "Sequence code generated");
        Ok(code)
    }

    /// Preview the code the next `generate_code` would return.
    ///
    /// Never creates or mutates a counter. The result can be stale by the
    /// time it is displayed.
    pub async fn peek_current_code(&self, domain: CodeDomain) -> SequenceResult<SequenceCode> {
        let year = self.clock.current_year();

        let seq = self
            .store
            .current(domain, year)
            .await
            .map_err(|source| {
                tracing::error!(domain = %domain, year, error = %source, "Sequence counter read failed");
                SequenceError::StoreRead { domain, source }
            })?
            .map(|c| c.seq)
            .unwrap_or(0);

        Ok(SequenceCode::new(domain, year, seq + 1))
    }

    /// Every year's counter for `domain`, ascending by year
    pub async fn counters(&self, domain: CodeDomain) -> SequenceResult<Vec<SequenceCounter>> {
        let mut counters = self.store.list(domain).await.map_err(|source| {
            tracing::error!(domain = %domain, error = %source, "Sequence counter listing failed");
            SequenceError::StoreRead { domain, source }
        })?;
        counters.sort_by_key(|c| c.year);
        Ok(counters)
    }
}
