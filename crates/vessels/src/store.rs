//! Datastore seam used by the HTTP handlers.
//!
//! Handlers only see [`VesselStore`]; the Postgres implementation lives in
//! [`crate::database`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{ArrivalRow, MonthlyRow, SummaryRow},
};

/// Default number of rows returned by the list endpoint.
pub const DEFAULT_LIMIT: i64 = 30;

/// Chokepoint plus optional inclusive date bounds (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalFilter {
    pub chokepoint: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ArrivalFilter {
    /// Builds a filter, treating empty date strings as absent.
    pub fn new(
        chokepoint: impl Into<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        Self {
            chokepoint: chokepoint.into(),
            start_date: start_date.filter(|s| !s.is_empty()),
            end_date: end_date.filter(|s| !s.is_empty()),
        }
    }
}

#[async_trait]
pub trait VesselStore: Send + Sync {
    /// Rows matching `filter`, newest first, at most `limit` of them.
    async fn list_arrivals(
        &self,
        filter: &ArrivalFilter,
        limit: i64,
    ) -> Result<Vec<ArrivalRow>, AppError>;

    /// Single aggregate over the rows matching `filter`.
    async fn summarize(&self, filter: &ArrivalFilter) -> Result<Option<SummaryRow>, AppError>;

    /// Per-month aggregates over the rows matching `filter`, oldest month first.
    async fn monthly_breakdown(
        &self,
        filter: &ArrivalFilter,
    ) -> Result<Vec<MonthlyRow>, AppError>;
}

pub type SharedStore = Arc<dyn VesselStore>;
