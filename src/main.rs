//! Spottr backend entry point

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use spottr::api::{build_router, AppState};
use spottr::config::Config;
use spottr::logging;
use spottr::mock::MockStore;
use spottr::services::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    logging::log_startup();

    let config = Config::from_env().context("failed to load configuration")?;
    config.log_config();

    let store = Arc::new(MockStore::seed());
    tracing::info!(
        exercises = store.exercises.len(),
        templates = store.templates.len(),
        "Mock data seeded"
    );

    let state = AppState::new(store, Arc::new(SystemClock::new()));
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!("Listening on {}", config.server_url());

    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;

    Ok(())
}
