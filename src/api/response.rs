//! Response types for the shift-swap engine API.
//!
//! This module defines the success payloads for each endpoint together
//! with the error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PeriodSummary, Staff};

/// Response body for the `/eligibility` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResponse {
    /// Correlation identifier for this request.
    pub request_id: Uuid,
    /// When the scan was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The base that was scanned.
    pub base_location: String,
    /// Eligible candidates, ordered by staff number. Empty is a normal
    /// outcome.
    pub eligible_staff: Vec<Staff>,
}

/// Response body for the `/counter-offers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterOfferResponse {
    /// Correlation identifier for this request.
    pub request_id: Uuid,
    /// When the scan was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The scanned calendar year.
    pub year: i32,
    /// The scanned calendar month.
    pub month: u32,
    /// Dates on which a valid exchange is possible, in calendar order.
    pub dates: Vec<NaiveDate>,
}

/// Response body for the `/premiums` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumResponse {
    /// Correlation identifier for this request.
    pub request_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The aggregated pay-period result.
    pub summary: PeriodSummary,
}

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an unknown base error response.
    pub fn unknown_base(code: &str) -> Self {
        Self::with_details(
            "UNKNOWN_BASE",
            format!("Unknown base location: {}", code),
            format!("The base code '{}' is not part of the configured base set", code),
        )
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
            EngineError::InvalidTimeRange { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_RANGE",
                    format!("Invalid time range: {}", value),
                    "Time ranges must be formatted HH:MM-HH:MM in 24-hour time",
                ),
            },
            EngineError::InvalidShift { shift_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift '{}': {}", shift_id, message),
                    "The shift data contains invalid information",
                ),
            },
            EngineError::UnknownBase { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_base(&code),
            },
            EngineError::InvalidTransition { from, to } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_TRANSITION",
                    format!("Invalid swap request transition from '{}' to '{}'", from, to),
                    "Terminal swap request statuses cannot change",
                ),
            },
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid calendar month: {}-{:02}", year, month),
                    "Month numbers run from 1 to 12",
                ),
            },
            EngineError::PeriodNotFound { message } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PERIOD_NOT_FOUND", format!("Pay period not found: {}", message)),
            },
            EngineError::ShiftLookup { staff_id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SHIFT_LOOKUP_ERROR",
                    format!("Shift lookup failed for staff '{}'", staff_id),
                    message,
                ),
            },
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
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_unknown_base_error() {
        let error = ApiError::unknown_base("XXX");
        assert_eq!(error.code, "UNKNOWN_BASE");
        assert!(error.message.contains("XXX"));
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let engine_error = EngineError::UnknownBase {
            code: "XXX".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_BASE");
    }

    #[test]
    fn test_period_not_found_maps_to_404() {
        let engine_error = EngineError::PeriodNotFound {
            message: "no period 99 in payroll year 2026".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PERIOD_NOT_FOUND");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing/allowances.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
