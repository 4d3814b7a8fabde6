//! SQLite repository implementations.
//!
//! Queries are checked at runtime through SQLx; the schema lives in
//! `migrations/` and is embedded into the binary via [`MIGRATOR`].
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool, creating the database file if it is missing.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect_with(options)
        .await
}
