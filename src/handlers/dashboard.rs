use axum::{extract::State, response::Html};

use crate::middleware::RequireLogin;
use crate::views;
use crate::{AdrError, router::AdrState};

/// GET /dashboard -> total count and a per-severity breakdown.
pub async fn dashboard(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
) -> Result<Html<String>, AdrError> {
    let total = state.records.count(None).await?;
    let counts = state.records.severity_counts().await?;
    Ok(views::dashboard_page(&user, total, &counts))
}
