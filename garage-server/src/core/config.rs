use std::path::PathBuf;
use std::str::FromStr;

use super::ServerError;

/// Counter store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterBackend {
    /// Embedded redb file under `WORK_DIR`
    Redb,
    /// Shared PostgreSQL (`DATABASE_URL`)
    Postgres,
    /// Process memory, lost on restart
    Memory,
}

impl FromStr for CounterBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redb" => Ok(Self::Redb),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ServerError::Config(format!(
                "unknown COUNTER_BACKEND '{other}' (expected redb, postgres or memory)"
            ))),
        }
    }
}

/// Which calendar the code year follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockKind {
    #[default]
    Local,
    Utc,
}

impl ClockKind {
    fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Self::Utc,
            _ => Self::Local,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|--------|------|
/// | WORK_DIR | ./data | working directory (redb file, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | runtime environment |
/// | COUNTER_BACKEND | redb | redb / postgres / memory |
/// | DATABASE_URL | - | required by the postgres backend |
/// | DATABASE_MAX_CONNECTIONS | 5 | PostgreSQL pool size |
/// | CODE_CLOCK | local | year source: local / utc |
/// | LOG_LEVEL | info | log level |
/// | LOG_JSON | false | JSON lines logging |
/// | LOG_TO_FILE | false | also write to WORK_DIR/logs |
///
/// # Example
///
/// ```ignore
/// COUNTER_BACKEND=memory HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub counter_backend: CounterBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub clock: ClockKind,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults. An unknown
    /// COUNTER_BACKEND, or the postgres backend without DATABASE_URL, is an error.
    pub fn from_env() -> Result<Self, ServerError> {
        let counter_backend = match std::env::var("COUNTER_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => CounterBackend::Redb,
        };
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        if counter_backend == CounterBackend::Postgres && database_url.is_none() {
            return Err(ServerError::Config(
                "DATABASE_URL is required when COUNTER_BACKEND=postgres".into(),
            ));
        }

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            counter_backend,
            database_url,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            clock: std::env::var("CODE_CLOCK")
                .map(|v| ClockKind::parse_or_default(&v))
                .unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }

    /// In-memory configuration for tests: memory backend, local clock
    pub fn for_tests() -> Self {
        Self {
            work_dir: "./data".into(),
            http_port: 0,
            environment: "test".into(),
            counter_backend: CounterBackend::Memory,
            database_url: None,
            database_max_connections: 1,
            clock: ClockKind::Local,
            log_level: "debug".into(),
            log_json: false,
            log_to_file: false,
        }
    }

    /// redb database file
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("counters.redb")
    }

    /// Log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!("redb".parse::<CounterBackend>().unwrap(), CounterBackend::Redb);
        assert_eq!("Postgres".parse::<CounterBackend>().unwrap(), CounterBackend::Postgres);
        assert_eq!(" memory ".parse::<CounterBackend>().unwrap(), CounterBackend::Memory);
        assert!(matches!(
            "mongodb".parse::<CounterBackend>(),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn test_clock_falls_back_to_local() {
        assert_eq!(ClockKind::parse_or_default("utc"), ClockKind::Utc);
        assert_eq!(ClockKind::parse_or_default("UTC"), ClockKind::Utc);
        assert_eq!(ClockKind::parse_or_default("local"), ClockKind::Local);
        assert_eq!(ClockKind::parse_or_default("mars"), ClockKind::Local);
    }

    #[test]
    fn test_paths_live_under_work_dir() {
        let mut config = Config::for_tests();
        config.work_dir = "/srv/garage".into();
        assert_eq!(config.database_path(), PathBuf::from("/srv/garage/counters.redb"));
        assert_eq!(config.log_dir(), PathBuf::from("/srv/garage/logs"));
    }
}
