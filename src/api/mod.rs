//! HTTP API module for the shift-swap engine.
//!
//! This module provides the REST API endpoints for swap eligibility
//! scanning, counter-offer date scanning, and premium-pay calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CounterOfferRequest, EligibilityRequest, PremiumRequest, ShiftRequest, StaffRequest};
pub use response::{ApiError, CounterOfferResponse, EligibilityResponse, PremiumResponse};
pub use state::AppState;
