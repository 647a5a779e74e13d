use std::sync::Arc;

use crate::core::{ClockKind, Config, CounterBackend, Result, ServerError};
use crate::db::{CounterStore, MemoryCounterStore, PgCounterStore, RedbCounterStore};
use crate::sequence::{Clock, CodeGenerator, LocalClock, UtcClock};

/// Server state
///
/// | Field | Type | Description |
/// |------|------|------|
/// | config | Config | configuration (immutable) |
/// | generator | CodeGenerator | code generator (shared counter store) |
///
/// Cloning copies Arcs only; handlers and middleware hold it by value.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub generator: CodeGenerator,
}

impl ServerState {
    /// Open the configured counter store and build the generator
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn CounterStore> = match config.counter_backend {
            CounterBackend::Redb => {
                std::fs::create_dir_all(&config.work_dir)?;
                let path = config.database_path();
                let store = RedbCounterStore::open(&path)?;
                tracing::info!(path = %path.display(), "Counter store opened (redb)");
                Arc::new(store)
            }
            CounterBackend::Postgres => {
                let url = config.database_url.as_deref().ok_or_else(|| {
                    ServerError::Config("DATABASE_URL is required when COUNTER_BACKEND=postgres".into())
                })?;
                Arc::new(PgCounterStore::connect(url, config.database_max_connections).await?)
            }
            CounterBackend::Memory => {
                tracing::warn!("Counter store is in-memory; codes restart from 1 after a restart");
                Arc::new(MemoryCounterStore::new())
            }
        };

        let clock: Arc<dyn Clock> = match config.clock {
            ClockKind::Local => Arc::new(LocalClock),
            ClockKind::Utc => Arc::new(UtcClock),
        };

        Ok(Self::with_generator(config.clone(), CodeGenerator::new(store, clock)))
    }

    /// Wrap a ready generator (tests inject store and clock)
    pub fn with_generator(config: Config, generator: CodeGenerator) -> Self {
        Self { config, generator }
    }
}
