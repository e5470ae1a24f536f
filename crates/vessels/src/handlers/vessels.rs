//! Vessel arrival handlers: raw rows, summary, and monthly breakdown.

use axum::{
    Extension,
    extract::{Path, Query, rejection::QueryRejection},
    response::Json,
};
use tracing::info;

use crate::{
    errors::{AppError, ErrorResponse},
    models::{MonthlySummary, MonthlyVesselStats, VesselArrival, VesselSummary},
    store::SharedStore,
    types::{DateRangeQuery, MonthlyResponse, VesselsQuery, VesselsResponse},
};

const NO_DATA: &str = "No data found for this chokepoint";

/// Turns axum's plain-text query rejection into a JSON 400.
fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

/// List daily arrivals for a chokepoint, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/vessels/{chokepoint}",
    tag = "vessels",
    params(
        ("chokepoint" = String, Path, description = "Chokepoint identifier"),
        VesselsQuery
    ),
    responses(
        (status = 200, description = "Arrival rows", body = VesselsResponse),
        (status = 400, description = "Malformed query parameters", body = ErrorResponse),
        (status = 500, description = "Datastore failure", body = ErrorResponse)
    )
)]
pub async fn get_vessels(
    Extension(store): Extension<SharedStore>,
    Path(chokepoint): Path<String>,
    query: Result<Query<VesselsQuery>, QueryRejection>,
) -> Result<Json<VesselsResponse>, AppError> {
    let query = parse_query(query)?;
    let filter = query.filter(chokepoint);
    let rows = store.list_arrivals(&filter, query.limit).await?;

    let data = rows
        .into_iter()
        .map(VesselArrival::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    info!(chokepoint = %filter.chokepoint, rows = data.len(), "Listed vessel arrivals");

    Ok(Json(VesselsResponse {
        total: data.len(),
        data,
        chokepoint: filter.chokepoint,
        start_date: filter.start_date,
        end_date: filter.end_date,
    }))
}

/// Aggregate arrivals for a chokepoint over the requested range.
#[utoipa::path(
    get,
    path = "/api/v1/vessels/{chokepoint}/summary",
    tag = "vessels",
    params(
        ("chokepoint" = String, Path, description = "Chokepoint identifier"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Aggregate statistics", body = VesselSummary),
        (status = 404, description = "No rows matched", body = ErrorResponse),
        (status = 500, description = "Datastore failure", body = ErrorResponse)
    )
)]
pub async fn get_vessel_summary(
    Extension(store): Extension<SharedStore>,
    Path(chokepoint): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<VesselSummary>, AppError> {
    let query = parse_query(query)?;
    let filter = query.filter(chokepoint);
    let row = store.summarize(&filter).await?;

    row.and_then(|row| VesselSummary::from_row(filter.chokepoint, row))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NO_DATA.to_string()))
}

/// Per-month arrival statistics for a chokepoint.
#[utoipa::path(
    get,
    path = "/api/v1/vessels/{chokepoint}/monthly",
    tag = "vessels",
    params(
        ("chokepoint" = String, Path, description = "Chokepoint identifier"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Monthly statistics", body = MonthlyResponse),
        (status = 404, description = "No rows matched", body = ErrorResponse),
        (status = 500, description = "Datastore failure", body = ErrorResponse)
    )
)]
pub async fn get_vessel_monthly(
    Extension(store): Extension<SharedStore>,
    Path(chokepoint): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<MonthlyResponse>, AppError> {
    let query = parse_query(query)?;
    let filter = query.filter(chokepoint);
    let rows = store.monthly_breakdown(&filter).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(NO_DATA.to_string()));
    }

    let months: Vec<MonthlyVesselStats> = rows.into_iter().map(Into::into).collect();
    let summary = MonthlySummary::from_months(&months);

    Ok(Json(MonthlyResponse {
        chokepoint: filter.chokepoint,
        months,
        summary,
        start_date: filter.start_date,
        end_date: filter.end_date,
    }))
}
