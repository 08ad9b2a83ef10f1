//! HTTP request handlers for the shift-swap engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PremiumCalculator, RosterIndex, counter_offer_dates, find_eligible_staff};
use crate::error::EngineError;
use crate::models::{Shift, Staff};

use super::request::{CounterOfferRequest, EligibilityRequest, PremiumRequest, convert_shifts};
use super::response::{
    ApiError, ApiErrorResponse, CounterOfferResponse, EligibilityResponse, PremiumResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/eligibility", post(eligibility_handler))
        .route("/counter-offers", post(counter_offer_handler))
        .route("/premiums", post(premium_handler))
        .with_state(state)
}

/// Maps an axum JSON rejection onto the API error envelope.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn ok_response<T: serde::Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for the POST /eligibility endpoint.
///
/// Scans the candidate staff at the requester's base and returns everyone
/// who may accept the offered shift.
async fn eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing eligibility request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    if !state.config().rules().is_known_base(&request.base_location) {
        return engine_error_response(
            correlation_id,
            EngineError::UnknownBase {
                code: request.base_location,
            },
        );
    }

    let requester_shift: Shift = match request.shift.try_into() {
        Ok(shift) => shift,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let roster = match convert_shifts(request.roster) {
        Ok(shifts) => shifts,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let staff: Vec<Staff> = request.staff.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let lookup = RosterIndex::from_shifts(roster);
    match find_eligible_staff(&requester_shift, &staff, &lookup) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                shift_id = %requester_shift.id,
                candidates = staff.len(),
                eligible = result.eligible_staff.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Eligibility scan completed"
            );
            ok_response(EligibilityResponse {
                request_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                base_location: request.base_location,
                eligible_staff: result.eligible_staff,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for the POST /counter-offers endpoint.
///
/// Scans a calendar month for dates on which the accepter could offer a
/// valid exchange instead of taking the requested shift directly.
async fn counter_offer_handler(
    State(_state): State<AppState>,
    payload: Result<Json<CounterOfferRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing counter-offer request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let accepter: Staff = request.accepter.into();
    let accepter_shifts = match convert_shifts(request.accepter_shifts) {
        Ok(shifts) => shifts,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let requester_shifts = match convert_shifts(request.requester_shifts) {
        Ok(shifts) => shifts,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());

    let start_time = Instant::now();
    match counter_offer_dates(
        &accepter,
        &accepter_shifts,
        &requester_shifts,
        request.request_date,
        request.year,
        request.month,
        today,
    ) {
        Ok(dates) => {
            info!(
                correlation_id = %correlation_id,
                accepter_id = %accepter.id,
                year = request.year,
                month = request.month,
                dates = dates.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Counter-offer scan completed"
            );
            ok_response(CounterOfferResponse {
                request_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                year: request.year,
                month: request.month,
                dates,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for the POST /premiums endpoint.
///
/// Aggregates premium allowances for one pay period from the staff
/// member's shift history.
async fn premium_handler(
    State(state): State<AppState>,
    payload: Result<Json<PremiumRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing premium request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let period = match state.config().pay_period(request.year, request.period_id) {
        Ok(period) => period.clone(),
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let shifts = match convert_shifts(request.shifts) {
        Ok(shifts) => shifts,
        Err(error) => return engine_error_response(correlation_id, error),
    };

    let rules = state.config().rules();
    let calculator = if request.include_time_premiums {
        PremiumCalculator::new(rules)
    } else {
        PremiumCalculator::new(rules).without_time_premiums()
    };

    let start_time = Instant::now();
    match calculator.summarize(&period, &shifts) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                period_id = request.period_id,
                shifts_count = summary.breakdowns.len(),
                total_premium = %summary.total_premium,
                duration_us = start_time.elapsed().as_micros(),
                "Premium calculation completed"
            );
            ok_response(PremiumResponse {
                request_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                summary,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}
