use crate::db::models::{AdrRecord, DbUser, NewAdrRecord, SeverityCount};
use crate::db::schema::SQLITE_INIT;
use crate::error::AdrError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

const MAX_CONNECTIONS: u32 = 5;

const SEARCH_FILTER: &str =
    r"name LIKE ? ESCAPE '\' OR drug LIKE ? ESCAPE '\' OR severity LIKE ? ESCAPE '\'";

/// Open the SQLite pool, creating the database file if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AdrError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;
    info!(database_url = %database_url, "database pool ready");
    Ok(pool)
}

/// Turn free search text into a `%...%` LIKE pattern that matches it literally.
pub(crate) fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct AdrStorage {
    pool: SqlitePool,
}

impl AdrStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AdrError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a record. Returns the new row id.
    pub async fn insert(&self, rec: &NewAdrRecord) -> Result<i64, AdrError> {
        let result = sqlx::query(
            "INSERT INTO adr (name, age, drug, reaction, severity) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&rec.name)
        .bind(rec.age)
        .bind(&rec.drug)
        .bind(&rec.reaction)
        .bind(&rec.severity)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<AdrRecord>, AdrError> {
        let rec = sqlx::query_as::<_, AdrRecord>(
            "SELECT id, name, age, drug, reaction, severity FROM adr WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(rec)
    }

    /// Overwrite every field of the record. Returns false when no row has this id.
    pub async fn update_by_id(&self, id: i64, rec: &NewAdrRecord) -> Result<bool, AdrError> {
        let result = sqlx::query(
            r#"UPDATE adr SET
                name = ?,
                age = ?,
                drug = ?,
                reaction = ?,
                severity = ?
              WHERE id = ?"#,
        )
        .bind(&rec.name)
        .bind(rec.age)
        .bind(&rec.drug)
        .bind(&rec.reaction)
        .bind(&rec.severity)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AdrError> {
        let result = sqlx::query("DELETE FROM adr WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of records, newest first, optionally filtered by name, drug or severity.
    pub async fn search_page(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdrRecord>, AdrError> {
        let rows = match search {
            Some(text) => {
                let pattern = like_pattern(text);
                let sql = format!(
                    "SELECT id, name, age, drug, reaction, severity FROM adr \
                     WHERE {SEARCH_FILTER} ORDER BY id DESC LIMIT ? OFFSET ?"
                );
                sqlx::query_as::<_, AdrRecord>(&sql)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, AdrRecord>(
                    "SELECT id, name, age, drug, reaction, severity FROM adr \
                     ORDER BY id DESC LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Number of records matching the same filter as `search_page`.
    pub async fn count(&self, search: Option<&str>) -> Result<i64, AdrError> {
        let rec: (i64,) = match search {
            Some(text) => {
                let pattern = like_pattern(text);
                let sql = format!("SELECT COUNT(*) FROM adr WHERE {SEARCH_FILTER}");
                sqlx::query_as(&sql)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM adr")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(rec.0)
    }

    /// Every record in id order.
    pub async fn list_all(&self) -> Result<Vec<AdrRecord>, AdrError> {
        let rows = sqlx::query_as::<_, AdrRecord>(
            "SELECT id, name, age, drug, reaction, severity FROM adr ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn severity_counts(&self) -> Result<Vec<SeverityCount>, AdrError> {
        let rows = sqlx::query_as::<_, SeverityCount>(
            r#"SELECT severity, COUNT(*) AS count FROM adr
               GROUP BY severity
               ORDER BY count DESC, severity"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the account unless the username already exists. Returns true if a row was created.
    pub async fn seed_admin(&self, username: &str, password_hash: &str) -> Result<bool, AdrError> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash) VALUES (?, ?) \
             ON CONFLICT(username) DO NOTHING",
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>, AdrError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_plain_text() {
        assert_eq!(like_pattern("aspirin"), "%aspirin%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_x\\"), r"%50\%\_x\\%");
    }
}
