//! SQL DDL for the ADR registry.

/// SQLite schema with:
/// - `adr`: one row per report, `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `users`: login accounts, `username` UNIQUE, Argon2 PHC string in `password_hash`
/// - index on `adr(severity)` for the dashboard grouping
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS adr (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    drug TEXT NOT NULL,
    reaction TEXT NOT NULL,
    severity TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_adr_severity ON adr(severity);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);
"#;
