//! Response types for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{MonthlySummary, MonthlyVesselStats, VesselArrival};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Placeholder body for the WebSocket route.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Arrivals listing response.
#[derive(Debug, Serialize, ToSchema)]
pub struct VesselsResponse {
    pub chokepoint: String,
    pub data: Vec<VesselArrival>,
    /// Number of rows in `data`
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Monthly breakdown response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyResponse {
    pub chokepoint: String,
    pub months: Vec<MonthlyVesselStats>,
    pub summary: MonthlySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
