//! Error handler for converting AppError to HTTP responses.
//!
//! Implements the IntoResponse trait for AppError with a consistent
//! status-code mapping and sanitized messages for internal failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - Validation / BadRequest → 400
    /// - Unauthorized → 401
    /// - Forbidden → 403
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - Storage → 502
    /// - Database / Configuration / Internal → 500 (details withheld)
    /// - ConnectionPool → 503
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found_error(entity, field, value),
            ),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => (
                StatusCode::CONFLICT,
                ErrorResponse::duplicate_error(entity, field, value),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(field, reason),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", message),
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("FORBIDDEN", message),
            ),
            AppError::Storage { operation, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("STORAGE_ERROR", "Object storage operation failed")
                    .with_details(json!({ "operation": operation })),
            ),
            AppError::Database { operation, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("DATABASE_ERROR", "Database operation failed")
                    .with_details(json!({ "operation": operation })),
            ),
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("CONFIGURATION_ERROR", "Configuration error")
                    .with_details(json!({ "key": key })),
            ),
            AppError::ConnectionPool { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
            ),
            AppError::Internal { source } => {
                // Log the source; the client only sees a generic message.
                tracing::error!(error = %source, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Fallback handler for paths that match no route.
pub async fn not_found_fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "NOT_FOUND",
            "The requested resource was not found",
        )),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(
            status_of(AppError::validation("file", "bad extension")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::unauthorized("no token")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::forbidden("not yours")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("listing", "id", 7)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Duplicate {
                entity: "users".to_string(),
                field: "email".to_string(),
                value: "belle@belle.com".to_string(),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Storage {
                operation: "put object".to_string(),
                source: anyhow::anyhow!("boom"),
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::Internal {
                source: anyhow::anyhow!("boom"),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
