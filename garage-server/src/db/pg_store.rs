//! PostgreSQL counter store
//!
//! One table per domain (`<domain>_sequence_counter`, primary key `year`).
//! `increment` is a single upsert, so the row lock taken by
//! `ON CONFLICT DO UPDATE` serializes concurrent callers.

use async_trait::async_trait;
use shared::models::{CodeDomain, SequenceCounter};
use shared::util::now_millis;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{CounterStore, StoreResult};

/// Counter store backed by a Postgres pool
#[derive(Debug, Clone)]
pub struct PgCounterStore {
    pool: PgPool,
}

impl PgCounterStore {
    /// Connect, then apply the counter table migrations
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        tracing::info!("Database connection established (PostgreSQL)");

        sqlx::migrate!("./migrations")
            .set_ignore_missing(true)
            .run(&pool)
            .await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations are the caller's business)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for PgCounterStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn increment(
        &self,
        domain: CodeDomain,
        year: i32,
    ) -> StoreResult<Option<SequenceCounter>> {
        let table = domain.collection();
        let sql = format!(
            r#"
            INSERT INTO {table} (year, seq, created_at, updated_at)
            VALUES ($1, 1, $2, $2)
            ON CONFLICT (year)
            DO UPDATE SET seq = {table}.seq + 1, updated_at = EXCLUDED.updated_at
            RETURNING year, seq, created_at, updated_at
            "#
        );
        let row: Option<SequenceCounter> = sqlx::query_as(&sql)
            .bind(year)
            .bind(now_millis())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn current(&self, domain: CodeDomain, year: i32) -> StoreResult<Option<SequenceCounter>> {
        let sql = format!(
            "SELECT year, seq, created_at, updated_at FROM {} WHERE year = $1",
            domain.collection()
        );
        let row: Option<SequenceCounter> = sqlx::query_as(&sql)
            .bind(year)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self, domain: CodeDomain) -> StoreResult<Vec<SequenceCounter>> {
        let sql = format!(
            "SELECT year, seq, created_at, updated_at FROM {} ORDER BY year",
            domain.collection()
        );
        let rows: Vec<SequenceCounter> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
