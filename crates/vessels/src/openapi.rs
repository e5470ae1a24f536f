use axum::response::Json;
use utoipa::OpenApi;

use crate::{
    errors::ErrorResponse,
    handlers,
    models::{
        MonthlySummary, MonthlyVesselStats, VesselArrival, VesselSummary, VesselTypeTotals,
    },
    types::{HealthResponse, MessageResponse, MonthlyResponse, VesselsResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "SeeSea vessels API", description = "Chokepoint vessel arrival statistics"),
    paths(
        handlers::health_check,
        handlers::websocket_placeholder,
        handlers::get_vessels,
        handlers::get_vessel_summary,
        handlers::get_vessel_monthly,
    ),
    components(schemas(
        ErrorResponse,
        HealthResponse,
        MessageResponse,
        VesselsResponse,
        VesselArrival,
        VesselSummary,
        MonthlyResponse,
        MonthlyVesselStats,
        MonthlySummary,
        VesselTypeTotals,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "vessels", description = "Vessel arrivals by chokepoint")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
