pub mod config;
pub mod cors;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod query_builder;
pub mod request_id;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::{HeaderValue, StatusCode, header},
    middleware,
    routing::get,
};
use tower_http::{compression::CompressionLayer, set_header::SetResponseHeaderLayer};

use crate::{
    config::Config,
    cors::with_cors,
    errors::ErrorResponse,
    handlers::{
        get_vessel_monthly, get_vessel_summary, get_vessels, health_check, websocket_placeholder,
    },
    openapi::openapi_json,
    request_id::request_id_middleware,
    store::SharedStore,
};

/// Identity reported by the health check.
#[derive(Clone, Debug)]
pub struct ServiceInfo {
    pub name: Arc<str>,
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            details: None,
        }),
    )
}

pub fn create_router(store: SharedStore, service_name: &str) -> Router {
    let info = ServiceInfo {
        name: Arc::from(service_name),
    };

    let routes = Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(websocket_placeholder))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Vessel routes
        .route("/api/v1/vessels/{chokepoint}", get(get_vessels))
        .route(
            "/api/v1/vessels/{chokepoint}/summary",
            get(get_vessel_summary),
        )
        .route(
            "/api/v1/vessels/{chokepoint}/monthly",
            get(get_vessel_monthly),
        )
        .fallback(not_found)
        .layer(Extension(store))
        .layer(Extension(info));

    with_cors(routes)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(middleware::from_fn(request_id_middleware))
}

pub async fn run_server(store: SharedStore, config: &Config) -> anyhow::Result<()> {
    let app = create_router(store, &config.service_name);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        port = config.port,
        service = %config.service_name,
        "API server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
