use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Timestamp formatting error: {0}")]
    Format(#[from] time::error::Format),

    #[error("Database query timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// JSON error body. `details` carries the underlying failure for 5xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// True for failures raised while reading a row rather than running the query.
fn is_decode_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. }
    )
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Database(e) if is_decode_error(e) => {
                error!("Row decoding error: {e}");
                ErrorResponse {
                    error: "Failed to parse data".to_string(),
                    details: Some(e.to_string()),
                }
            }
            AppError::Database(e) => {
                error!("Database error: {e}");
                ErrorResponse {
                    error: "Database query failed".to_string(),
                    details: Some(e.to_string()),
                }
            }
            AppError::Format(e) => {
                error!("Formatting error: {e}");
                ErrorResponse {
                    error: "Failed to parse data".to_string(),
                    details: Some(e.to_string()),
                }
            }
            AppError::Timeout(limit) => {
                error!("Database query exceeded {limit:?}");
                ErrorResponse {
                    error: "Database query timed out".to_string(),
                    details: None,
                }
            }
            AppError::NotFound(msg) => ErrorResponse {
                error: msg.clone(),
                details: None,
            },
            AppError::InvalidInput(msg) => ErrorResponse {
                error: "Invalid query parameters".to_string(),
                details: Some(msg.clone()),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response =
            AppError::NotFound("No data found for this chokepoint".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({"error": "No data found for this chokepoint"})
        );
    }

    #[tokio::test]
    async fn test_query_failure_carries_details() {
        let response =
            AppError::Database(sqlx::Error::Protocol("relation missing".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Database query failed");
        assert!(json["details"].as_str().unwrap().contains("relation missing"));
    }

    #[tokio::test]
    async fn test_decode_failure_is_parse_error() {
        let err = sqlx::Error::ColumnNotFound("collected_at".into());
        let json = body_json(AppError::Database(err).into_response()).await;
        assert_eq!(json["error"], "Failed to parse data");
    }

    #[tokio::test]
    async fn test_timeout_is_internal_error() {
        let response = AppError::Timeout(Duration::from_secs(10)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Database query timed out");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let response = AppError::InvalidInput("limit: invalid digit".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid query parameters");
        assert_eq!(json["details"], "limit: invalid digit");
    }
}
