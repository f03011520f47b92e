//! Response types for the overtime engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::calculation::Submission;
use crate::error::EngineError;
use crate::models::{DayType, OvertimeRecord};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDateFormat { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_FORMAT",
                    format!("Invalid date: {}", value),
                    "Dates must use the YYYY-MM-DD format",
                ),
            },
            EngineError::MissingRequiredField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_FIELD", format!("Missing required field: {}", field)),
            },
            EngineError::InvalidLeaveType { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE_TYPE",
                    format!("Invalid leave type: {}", name),
                    "The leave type must be one of the configured leave types",
                ),
            },
            EngineError::MissingLeaveDuration => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_LEAVE_DURATION",
                    "Personal leave requires a duration of -4 or -8 hours",
                ),
            },
            EngineError::HolidayDataError { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "HOLIDAY_DATA_ERROR",
                    "Holiday data could not be imported",
                    message,
                ),
            },
            EngineError::PersistenceFailure { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PERSISTENCE_FAILURE",
                    "Record could not be stored",
                    message,
                ),
            },
        }
    }
}

/// The day-type mismatch warning in a submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MismatchWarning {
    /// What the calendar sources detected.
    pub detected: DayType,
    /// The detection reason.
    pub reason: String,
}

/// Response body for `POST /records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRecordResponse {
    /// The stored record.
    pub record: OvertimeRecord,
    /// Present when detection disagreed with the chosen day type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<MismatchWarning>,
}

impl From<Submission> for SubmitRecordResponse {
    fn from(submission: Submission) -> Self {
        Self {
            record: submission.record,
            mismatch: submission.mismatch.map(|m| MismatchWarning {
                detected: m.detected,
                reason: m.reason,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None.
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        for error in [
            EngineError::InvalidDateFormat {
                value: "x".to_string(),
            },
            EngineError::MissingRequiredField {
                field: "user".to_string(),
            },
            EngineError::InvalidLeaveType {
                name: "x".to_string(),
            },
            EngineError::MissingLeaveDuration,
        ] {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_persistence_failure_maps_to_500() {
        let response: ApiErrorResponse = EngineError::PersistenceFailure {
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "PERSISTENCE_FAILURE");
    }

    #[test]
    fn test_missing_leave_duration_code() {
        let response: ApiErrorResponse = EngineError::MissingLeaveDuration.into();
        assert_eq!(response.error.code, "MISSING_LEAVE_DURATION");
    }
}
