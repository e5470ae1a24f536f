//! Default seed script - creates a year of synthetic vessel arrivals
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! `SEED_DAYS` sets the number of days per chokepoint (default 365) and
//! `SEED_END_DATE` (`YYYY-MM-DD`) the last generated day (default today).

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use test_data::prelude::*;
use time::{Date, OffsetDateTime, macros::format_description};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;

    let days = match std::env::var("SEED_DAYS") {
        Ok(value) => value.parse().context("SEED_DAYS must be a positive integer")?,
        Err(_) => 365,
    };
    let end_date = match std::env::var("SEED_END_DATE") {
        Ok(value) => Date::parse(&value, format_description!("[year]-[month]-[day]"))
            .context("SEED_END_DATE must be YYYY-MM-DD")?,
        Err(_) => OffsetDateTime::now_utc().date(),
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool);
    seeder.migrate().await?;

    let config = SeedConfig::new(end_date).with_days(days);
    let rows = generate_rows(&config);
    let inserted = seeder
        .with_batch_size(config.batch_size)
        .seed_arrivals(&rows)
        .await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Chokepoints: {}", config.chokepoints.len());
    tracing::info!("  Days per chokepoint: {}", config.days);
    tracing::info!("  Rows generated: {}", rows.len());
    tracing::info!("  Rows inserted: {}", inserted);

    Ok(())
}
