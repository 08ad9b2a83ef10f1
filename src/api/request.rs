//! Request types for the shift-swap engine API.
//!
//! This module defines the JSON request structures for the `/eligibility`,
//! `/counter-offers` and `/premiums` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Shift, Staff};

/// Request body for the `/eligibility` endpoint.
///
/// Contains the shift being offered, the base to scan, the candidate staff
/// at that base, and a roster snapshot covering the requested date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    /// The shift the requester wants to give away.
    pub shift: ShiftRequest,
    /// The base location to scan (must be a configured base code).
    pub base_location: String,
    /// The candidate staff at the base, requester included or not.
    pub staff: Vec<StaffRequest>,
    /// Roster snapshot: every known shift for the candidates around the
    /// requested date.
    #[serde(default)]
    pub roster: Vec<ShiftRequest>,
}

/// Request body for the `/counter-offers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterOfferRequest {
    /// The prospective accepter proposing an alternative date.
    pub accepter: StaffRequest,
    /// The accepter's shifts in and around the target month.
    #[serde(default)]
    pub accepter_shifts: Vec<ShiftRequest>,
    /// The requester's shifts in and around the target month.
    #[serde(default)]
    pub requester_shifts: Vec<ShiftRequest>,
    /// The date of the originally requested swap.
    pub request_date: NaiveDate,
    /// The target calendar year.
    pub year: i32,
    /// The target calendar month (1-12).
    pub month: u32,
    /// Override for "today" when excluding past dates; defaults to the
    /// current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for the `/premiums` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumRequest {
    /// The payroll year of the pay period.
    pub year: i32,
    /// The pay period number within the year.
    pub period_id: u32,
    /// The staff member's full shift history snapshot; shifts outside the
    /// period are used only for double-shift detection.
    pub shifts: Vec<ShiftRequest>,
    /// Whether shift premiums are evaluated; weekend and night-shift
    /// allowances always are.
    #[serde(default = "default_true")]
    pub include_time_premiums: bool,
}

fn default_true() -> bool {
    true
}

/// Staff information in an API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The staff member's email address.
    pub email: String,
    /// The payroll staff number.
    pub staff_number: String,
    /// The base the staff member works from.
    pub base_location: String,
    /// Whether the staff member is permitted to work double shifts.
    #[serde(default)]
    pub can_work_doubles: bool,
    /// The employing company.
    pub company_id: String,
}

/// Shift information in an API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The time range, formatted `HH:MM-HH:MM`.
    pub time: String,
    /// The owning staff member.
    pub staff_id: String,
    /// Whether the shift has already changed hands via a swap.
    #[serde(default)]
    pub is_swapped: bool,
}

impl From<StaffRequest> for Staff {
    fn from(req: StaffRequest) -> Self {
        Staff {
            id: req.id,
            email: req.email,
            staff_number: req.staff_number,
            base_location: req.base_location,
            can_work_doubles: req.can_work_doubles,
            company_id: req.company_id,
        }
    }
}

impl TryFrom<ShiftRequest> for Shift {
    type Error = EngineError;

    /// Validates the time range at the API boundary.
    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        let mut shift = Shift::new(req.id, req.date, req.time, req.staff_id)?;
        shift.is_swapped = req.is_swapped;
        Ok(shift)
    }
}

/// Converts a batch of shift requests, stopping at the first invalid one.
pub(super) fn convert_shifts(requests: Vec<ShiftRequest>) -> Result<Vec<Shift>, EngineError> {
    requests.into_iter().map(Shift::try_from).collect()
}
