use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use futures::stream;
use std::convert::Infallible;
use tracing::info;

use crate::middleware::RequireLogin;
use crate::service::export::{CSV_FILENAME, csv_lines};
use crate::{AdrError, router::AdrState};

/// GET /export -> every record as a CSV attachment, streamed line by line.
pub async fn export_csv(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
) -> Result<Response, AdrError> {
    let records = state.records.list_all().await?;
    info!(count = records.len(), user = %user, "exporting ADR records");

    let lines = csv_lines(&records)?;
    let body = Body::from_stream(stream::iter(lines.into_iter().map(Ok::<_, Infallible>)));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}
