use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One adverse drug reaction report as stored in the `adr` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct AdrRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub drug: String,
    pub reaction: String,
    pub severity: String,
}

/// Submitted fields for add and update; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAdrRecord {
    pub name: String,
    pub age: i64,
    pub drug: String,
    pub reaction: String,
    pub severity: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, FromRow)]
pub struct SeverityCount {
    pub severity: String,
    pub count: i64,
}
