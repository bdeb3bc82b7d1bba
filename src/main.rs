use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use adr_registry::Config;
use adr_registry::db::{self, AdrStorage, UserStorage};
use adr_registry::service::accounts::ensure_admin;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        page_size = cfg.page_size(),
        insecure_cookie = cfg.insecure_cookie,
        admin_username = %cfg.admin_username
    );

    let key = cfg.cookie_key()?;
    let pool = db::connect(&cfg.database_url).await?;
    AdrStorage::new(pool.clone()).init_schema().await?;
    ensure_admin(
        &UserStorage::new(pool.clone()),
        &cfg.admin_username,
        cfg.admin_password.as_deref(),
    )
    .await?;

    let state = adr_registry::AdrState::new(pool, key, &cfg);
    let app = adr_registry::adr_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
