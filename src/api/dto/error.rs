//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    /// Human-readable description
    pub message: String,
    /// Structured context for the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
    /// Request ID for log correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Error response for a missing resource.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {}={} was not found", entity, field, value),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    /// Error response for a unique-constraint conflict.
    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE",
            &format!("{}.{} '{}' already exists", entity, field, value),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    /// Error response for an invalid field.
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION", &format!("{}: {}", field, reason)).with_details(
            serde_json::json!({
                "field": field,
                "reason": reason,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_optionals() {
        let response = ErrorResponse::new("UNAUTHORIZED", "Missing token");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "UNAUTHORIZED");
        assert!(json.get("details").is_none());
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn not_found_carries_structured_details() {
        let response = ErrorResponse::not_found_error("listing", "id", "42");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["details"]["entity"], "listing");
        assert_eq!(json["details"]["value"], "42");
    }
}
