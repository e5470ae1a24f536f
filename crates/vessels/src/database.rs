use std::{future::Future, time::Duration};

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, postgres::PgPoolOptions};
use tracing::debug;

use crate::{
    config::Config,
    errors::AppError,
    models::{ArrivalRow, MonthlyRow, SummaryRow},
    query_builder::{BindParams, QueryBuilder, Statement},
    store::{ArrivalFilter, VesselStore},
};

const ARRIVAL_COLUMNS: &str = "date, chokepoint, vessel_count, container, dry_bulk, \
                               general_cargo, roro, tanker, collected_at";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
    query_timeout: Duration,
}

impl Database {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Opens a pool sized and timed according to `config`.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;

        Ok(Self::new(pool, config.query_timeout))
    }

    /// Round-trips a trivial statement to confirm the server is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.with_deadline(sqlx::query("SELECT 1").execute(&self.pool))
            .await?;
        Ok(())
    }

    async fn with_deadline<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::Timeout(self.query_timeout)),
        }
    }
}

/// Chokepoint equality plus whichever date bounds the filter carries.
fn filtered(filter: &ArrivalFilter) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.add_param_condition(filter.chokepoint.as_str(), |idx| {
        format!("chokepoint = ${idx}")
    })
    .add_date_range(
        "date",
        filter.start_date.as_deref(),
        filter.end_date.as_deref(),
    );
    qb
}

pub fn arrivals_statement(filter: &ArrivalFilter, limit: i64) -> Statement {
    let mut qb = filtered(filter);
    let limit_idx = qb.push_param(limit);
    qb.finish(|where_clause| {
        format!(
            "SELECT {ARRIVAL_COLUMNS} FROM vessel_arrivals {where_clause} \
             ORDER BY date DESC LIMIT ${limit_idx}"
        )
    })
}

pub fn summary_statement(filter: &ArrivalFilter) -> Statement {
    filtered(filter).finish(|where_clause| {
        format!(
            r#"
            SELECT COUNT(*) AS days_with_data,
                   SUM(vessel_count)::bigint AS total_vessels,
                   AVG(vessel_count)::float8 AS avg_daily_vessels,
                   SUM(container)::bigint AS total_container,
                   SUM(dry_bulk)::bigint AS total_dry_bulk,
                   SUM(general_cargo)::bigint AS total_general_cargo,
                   SUM(roro)::bigint AS total_roro,
                   SUM(tanker)::bigint AS total_tanker,
                   MAX(date) AS latest_date
            FROM vessel_arrivals
            {where_clause}
            "#
        )
    })
}

pub fn monthly_statement(filter: &ArrivalFilter) -> Statement {
    filtered(filter).finish(|where_clause| {
        format!(
            r#"
            SELECT date_trunc('month', date)::date AS month,
                   COUNT(*) AS days_with_data,
                   SUM(vessel_count)::bigint AS total_vessels,
                   AVG(vessel_count)::float8 AS avg_vessels,
                   MAX(vessel_count) AS peak_vessels,
                   MIN(vessel_count) AS min_vessels,
                   SUM(container)::bigint AS total_container,
                   SUM(dry_bulk)::bigint AS total_dry_bulk,
                   SUM(general_cargo)::bigint AS total_general_cargo,
                   SUM(roro)::bigint AS total_roro,
                   SUM(tanker)::bigint AS total_tanker
            FROM vessel_arrivals
            {where_clause}
            GROUP BY 1
            ORDER BY 1
            "#
        )
    })
}

#[async_trait]
impl VesselStore for Database {
    async fn list_arrivals(
        &self,
        filter: &ArrivalFilter,
        limit: i64,
    ) -> Result<Vec<ArrivalRow>, AppError> {
        let statement = arrivals_statement(filter, limit);
        debug!(sql = %statement.sql, params = ?statement.params, "Listing arrivals");

        self.with_deadline(
            sqlx::query_as::<Postgres, ArrivalRow>(&statement.sql)
                .bind_params(&statement.params)
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn summarize(&self, filter: &ArrivalFilter) -> Result<Option<SummaryRow>, AppError> {
        let statement = summary_statement(filter);
        debug!(sql = %statement.sql, params = ?statement.params, "Summarizing arrivals");

        self.with_deadline(
            sqlx::query_as::<Postgres, SummaryRow>(&statement.sql)
                .bind_params(&statement.params)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn monthly_breakdown(
        &self,
        filter: &ArrivalFilter,
    ) -> Result<Vec<MonthlyRow>, AppError> {
        let statement = monthly_statement(filter);
        debug!(sql = %statement.sql, params = ?statement.params, "Aggregating arrivals by month");

        self.with_deadline(
            sqlx::query_as::<Postgres, MonthlyRow>(&statement.sql)
                .bind_params(&statement.params)
                .fetch_all(&self.pool),
        )
        .await
    }
}
