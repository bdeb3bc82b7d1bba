use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::config::Config;
use crate::db::{AdrStorage, SqlitePool, UserStorage};
use crate::handlers::{auth, dashboard, export, records};

/// Session cookie settings shared by the login and logout handlers.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub secure: bool,
    pub max_age: time::Duration,
}

#[derive(Clone)]
pub struct AdrState {
    pub records: AdrStorage,
    pub users: UserStorage,
    pub key: Key,
    pub session: SessionSettings,
    pub page_size: u32,
}

impl AdrState {
    pub fn new(pool: SqlitePool, key: Key, cfg: &Config) -> Self {
        Self {
            records: AdrStorage::new(pool.clone()),
            users: UserStorage::new(pool),
            key,
            session: SessionSettings {
                secure: !cfg.insecure_cookie,
                max_age: cfg.session_max_age(),
            },
            page_size: cfg.page_size(),
        }
    }
}

impl FromRef<AdrState> for Key {
    fn from_ref(state: &AdrState) -> Self {
        state.key.clone()
    }
}

pub fn adr_router(state: AdrState) -> Router {
    Router::new()
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/", get(records::index))
        .route("/add", post(records::add))
        .route("/delete/{id}", get(records::delete))
        .route("/edit/{id}", get(records::edit_form))
        .route("/update/{id}", post(records::update))
        .route("/export", get(export::export_csv))
        .route("/dashboard", get(dashboard::dashboard))
        .with_state(state)
}
