//! Garage Server - sequence code service for the garage back office
//!
//! Mints `PREFIX-YYYY-NNNNNN` codes for tickets, employees, technician jobs,
//! suppliers, customer invoices and quotations, one counter per (domain, year).
//!
//! # Module layout
//!
//! ```text
//! garage-server/src/
//! ├── core/          # config, state, errors, server
//! ├── db/            # counter stores (redb / PostgreSQL / memory)
//! ├── sequence/      # code generator and clocks
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging, code assignment
//! └── utils/         # error responses, logger setup
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod sequence;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerError, ServerState};
pub use db::{CounterStore, StoreError};
pub use sequence::{CodeGenerator, SequenceError};

pub use utils::logger::init_logger_with_file;

/// Initialize logging from config (stdout or WORK_DIR/logs)
pub fn setup_environment(config: &Config) {
    let log_dir = config.log_to_file.then(|| config.log_dir());
    init_logger_with_file(Some(&config.log_level), config.log_json, log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/___ __________ _____ ____
 / / __/ __ `/ ___/ __ `/ __ `/ _ \
/ /_/ / /_/ / /  / /_/ / /_/ /  __/
\____/\__,_/_/   \__,_/\__, /\___/
                      /____/
    "#
    );
}
