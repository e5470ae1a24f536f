//! Query parameter types for API endpoints.

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::store::{ArrivalFilter, DEFAULT_LIMIT};

/// Default row limit for the arrivals listing.
pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Parses `limit`, falling back to the default when the value is empty.
fn limit_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_LIMIT);
    }
    raw.parse().map_err(serde::de::Error::custom)
}

/// Arrivals listing query parameters.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VesselsQuery {
    /// Maximum number of rows to return
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: i64,
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl VesselsQuery {
    pub fn filter(&self, chokepoint: String) -> ArrivalFilter {
        ArrivalFilter::new(chokepoint, self.start_date.clone(), self.end_date.clone())
    }
}

/// Date range query parameters for aggregate endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    pub fn filter(&self, chokepoint: String) -> ArrivalFilter {
        ArrivalFilter::new(chokepoint, self.start_date.clone(), self.end_date.clone())
    }
}
