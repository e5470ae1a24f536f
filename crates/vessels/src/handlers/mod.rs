//! HTTP request handlers for the vessels API.

pub mod health;
pub mod vessels;

// Re-export handlers (including utoipa __path types for OpenAPI)
pub use health::{__path_health_check, __path_websocket_placeholder, health_check, websocket_placeholder};
pub use vessels::{
    __path_get_vessel_monthly, __path_get_vessel_summary, __path_get_vessels, get_vessel_monthly,
    get_vessel_summary, get_vessels,
};
