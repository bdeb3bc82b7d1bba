use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use tracing::{info, warn};

use crate::db::NewAdrRecord;
use crate::middleware::RequireLogin;
use crate::types::{AdrForm, ListQuery, Page};
use crate::views;
use crate::{AdrError, router::AdrState};

/// GET / -> one page of records, filtered when `search` is given.
pub async fn index(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AdrError> {
    let search = query.search_term();
    let total = state.records.count(search).await?;
    let page = Page::resolve(query.page, state.page_size, total);
    let records = state
        .records
        .search_page(search, page.limit(), page.offset())
        .await?;
    Ok(views::index_page(&user, &records, &page, search))
}

pub async fn add(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
    Form(form): Form<AdrForm>,
) -> Result<Redirect, AdrError> {
    let rec: NewAdrRecord = form.into();
    let id = state.records.insert(&rec).await?;
    info!(id, user = %user, "ADR record added");
    Ok(Redirect::to("/"))
}

pub async fn delete(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AdrError> {
    if state.records.delete_by_id(id).await? {
        info!(id, user = %user, "ADR record deleted");
    } else {
        warn!(id, user = %user, "delete requested for unknown ADR record");
    }
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AdrError> {
    let record = state
        .records
        .get_by_id(id)
        .await?
        .ok_or(AdrError::NotFound(id))?;
    Ok(views::edit_page(&user, &record))
}

pub async fn update(
    RequireLogin(user): RequireLogin,
    State(state): State<AdrState>,
    Path(id): Path<i64>,
    Form(form): Form<AdrForm>,
) -> Result<Redirect, AdrError> {
    let rec: NewAdrRecord = form.into();
    if !state.records.update_by_id(id, &rec).await? {
        return Err(AdrError::NotFound(id));
    }
    info!(id, user = %user, "ADR record updated");
    Ok(Redirect::to("/"))
}
