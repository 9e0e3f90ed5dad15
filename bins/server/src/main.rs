//! WebAdmin API Server
//!
//! Main entry point for the back-office service.

use chrono::Utc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webadmin_api::{AppState, create_router};
use webadmin_db::Repositories;
use webadmin_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webadmin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let repos = if config.data.seed_sample_data {
        info!("Loading sample data");
        Repositories::seeded(Utc::now())
    } else {
        Repositories::empty()
    };

    let state = AppState::new(repos, config.data.audit_log_default_limit);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
