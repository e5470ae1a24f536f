//! Health check and WebSocket placeholder handlers.

use axum::{Extension, response::Json};

use crate::{
    ServiceInfo,
    types::{HealthResponse, MessageResponse},
};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(Extension(info): Extension<ServiceInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        service: info.name.to_string(),
    })
}

/// WebSocket endpoint (not yet streaming).
#[utoipa::path(
    get,
    path = "/ws",
    tag = "health",
    responses(
        (status = 200, description = "Placeholder message", body = MessageResponse)
    )
)]
pub async fn websocket_placeholder() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "WebSocket will be implemented".to_string(),
    })
}
