//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool wrapper with all queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbPalmTemplate, DbUser};
pub use schema::SQLITE_INIT;
pub use sqlite::{IdentityStorage, SqlitePool};

use crate::error::PalmgateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if missing) the database at `database_url` and apply the DDL.
/// Foreign keys are enabled per-connection so the palm-template cascade fires.
pub async fn connect(database_url: &str) -> Result<IdentityStorage, PalmgateError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    let storage = IdentityStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
