use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::{info, warn};

use crate::middleware::RequireLogin;
use crate::middleware::auth::{LOGIN_PATH, clear_session_cookie, session_cookie};
use crate::service::password::verify_login;
use crate::types::LoginForm;
use crate::views;
use crate::{AdrError, router::AdrState};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// GET /login -> renders the form, or goes home when a session already exists.
pub async fn login_form(user: Option<RequireLogin>) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    views::login_page(None, "").into_response()
}

/// POST /login -> checks the credential and starts a session on success.
pub async fn login_submit(
    State(state): State<AdrState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AdrError> {
    let user = state.users.find_by_username(&form.username).await?;
    let verified = verify_login(
        &form.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    )?;

    if !verified {
        warn!(username = %form.username, "rejected login");
        return Ok((
            StatusCode::UNAUTHORIZED,
            views::login_page(Some(INVALID_CREDENTIALS), &form.username),
        )
            .into_response());
    }

    info!(username = %form.username, "user logged in");
    let jar = jar.add(session_cookie(form.username, state.session));
    Ok((jar, Redirect::to("/")).into_response())
}

/// GET /logout -> drops the session cookie.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = jar.remove(clear_session_cookie());
    (jar, Redirect::to(LOGIN_PATH))
}
