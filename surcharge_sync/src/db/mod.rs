//! Database utilities for connections and schema migrations.
//!
//! - [`connection::connect_sqlite`] opens a SQLite connection with WAL,
//!   foreign_keys=ON, and a 5000ms busy_timeout applied.
//! - [`migrate::run_sqlite`] applies the embedded Diesel migrations that
//!   create the `surcharge_record` and `sync_log` tables.
//!
//! Example:
//! ```no_run
//! use surcharge_sync::db::{connection, migrate};
//!
//! let db_path = std::env::temp_dir().join("surcharge_example.db");
//! let url = db_path.to_string_lossy();
//! migrate::run_sqlite(&url).expect("migrations");
//! let _conn = connection::connect_sqlite(&url).expect("connect");
//! ```

pub mod connection;
pub mod migrate;
