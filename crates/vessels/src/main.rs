use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vessels::{config::Config, database::Database, run_server};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vessels=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    init_logging();
    if !dotenv_loaded {
        tracing::debug!("No .env file found");
    }

    let config = Config::from_env()?;
    if config.sslmode_defaulted {
        tracing::warn!(
            "DATABASE_URL has no sslmode parameter; connecting with sslmode=disable (no TLS)"
        );
    }

    tracing::info!("Connecting to database");
    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;
    db.ping().await.context("Failed to ping database")?;
    tracing::info!("Database connected successfully");

    run_server(Arc::new(db), &config).await
}
