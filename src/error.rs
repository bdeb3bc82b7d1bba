use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum AdrError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid ADR_SECRET_KEY: {0}")]
    InvalidSecretKey(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("ADR record {0} not found")]
    NotFound(i64),
}

impl From<argon2::password_hash::Error> for AdrError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AdrError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for AdrError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AdrError::NotFound(id) => (StatusCode::NOT_FOUND, format!("No ADR record with id {id}.")),
            AdrError::Database(_)
            | AdrError::Config(_)
            | AdrError::Csv(_)
            | AdrError::InvalidConfig(_)
            | AdrError::InvalidSecretKey(_)
            | AdrError::PasswordHash(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, views::error_page(status, &message)).into_response()
    }
}
