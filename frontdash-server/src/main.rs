//! frontdash-server — FrontDash food ordering backend
//!
//! Long-running service that:
//! - Handles restaurant registration, approval, and withdrawal
//! - Manages staff accounts, delivery drivers, menus, and business hours
//! - Prices and records customer orders, tracking delivery status

use frontdash_server::api;
use frontdash_server::config::Config;
use frontdash_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdash_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting frontdash-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("frontdash-server listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
