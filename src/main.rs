//! Inkpost server entry point.
//!
//! Startup sequence: load config for the selected environment, initialize
//! logging, open the database pool (refusing to start if the store is
//! unreachable), then serve.

use std::sync::Arc;

use inkpost::auth::AuthService;
use inkpost::config::AppConfig;
use inkpost::db::Database;
use inkpost::logging::init_logging;
use inkpost::server::run_server;
use inkpost::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&config);

    tracing::info!(env = %env, "starting inkpost");

    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    db.health_check().await?;

    let auth = AuthService::new(
        db.pool().clone(),
        &config.auth.jwt_secret,
        config.auth.token_ttl_days,
    );
    let state = Arc::new(AppState::new(db, auth));

    run_server(&config, state).await
}
