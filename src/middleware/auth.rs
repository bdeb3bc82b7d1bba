use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use std::convert::Infallible;

use crate::router::SessionSettings;

pub const SESSION_COOKIE: &str = "adr_session";
pub const LOGIN_PATH: &str = "/login";

/// Username stored in the encrypted session cookie, if any.
pub fn session_user(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(username: String, settings: SessionSettings) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, username))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .max_age(settings.max_age)
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Extractor for protected routes. Anonymous requests are sent to the login page.
#[derive(Debug, Clone)]
pub struct RequireLogin(pub String);

impl<S> FromRequestParts<S> for RequireLogin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match <PrivateCookieJar<Key> as FromRequestParts<S>>::from_request_parts(
            parts, state,
        )
        .await
        {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        match session_user(&jar) {
            Some(user) => Ok(Self(user)),
            None => Err(Redirect::to(LOGIN_PATH).into_response()),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for RequireLogin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let jar =
            <PrivateCookieJar<Key> as FromRequestParts<S>>::from_request_parts(parts, state)
                .await?;
        Ok(session_user(&jar).map(Self))
    }
}
