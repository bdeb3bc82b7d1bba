//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup plus record and user storage

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AdrRecord, DbUser, NewAdrRecord, SeverityCount};
pub use schema::SQLITE_INIT;
pub use sqlite::{AdrStorage, SqlitePool, UserStorage, connect};
