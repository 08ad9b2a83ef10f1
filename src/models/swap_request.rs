//! Swap request model and status machine.
//!
//! A swap request is one offer to exchange a shift. When a requester puts a
//! shift up for swap, one pending request is fanned out to every eligible
//! staff member at the base. Status transitions are one-directional:
//! `pending` may move to `accepted`, `declined` or `canceled`, and terminal
//! states never change again.
//!
//! When one request is accepted, the sibling requests for the same original
//! shift remain `pending`; the engine does not auto-decline them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Shift, Staff};

/// The lifecycle status of a swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    /// Awaiting a response from the prospective accepter.
    Pending,
    /// The accepter took the shift; ownership has been exchanged.
    Accepted,
    /// The accepter turned the offer down.
    Declined,
    /// The requester withdrew the offer.
    Canceled,
}

impl SwapStatus {
    /// Returns true for statuses that permit no further transition.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SwapStatus::Pending)
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapStatus::Pending => write!(f, "pending"),
            SwapStatus::Accepted => write!(f, "accepted"),
            SwapStatus::Declined => write!(f, "declined"),
            SwapStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Represents one offer to exchange a shift.
///
/// # Examples
///
/// ```
/// use swap_engine::models::{SwapRequest, SwapStatus};
/// use chrono::Utc;
///
/// let mut request = SwapRequest::new(
///     "staff_001",
///     "shift_001",
///     "staff_002",
///     Utc::now(),
/// );
/// assert_eq!(request.status, SwapStatus::Pending);
/// request.transition(SwapStatus::Declined).unwrap();
/// assert!(request.transition(SwapStatus::Pending).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The staff member giving the shift away.
    pub requester_id: String,
    /// The shift being offered.
    pub requester_shift_id: String,
    /// The staff member this request was offered to.
    pub accepter_id: String,
    /// The accepter's own shift involved in a time-swap, when there is one.
    pub accepter_shift_id: Option<String>,
    /// An alternative date proposed by the accepter instead of directly
    /// taking the requested shift.
    pub counter_offer_date: Option<NaiveDate>,
    /// The current lifecycle status.
    pub status: SwapStatus,
    /// Optional free-text message from the requester.
    pub message: Option<String>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Creates a pending request offered to a single staff member.
    pub fn new(
        requester_id: impl Into<String>,
        requester_shift_id: impl Into<String>,
        accepter_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester_id: requester_id.into(),
            requester_shift_id: requester_shift_id.into(),
            accepter_id: accepter_id.into(),
            accepter_shift_id: None,
            counter_offer_date: None,
            status: SwapStatus::Pending,
            message: None,
            created_at,
        }
    }

    /// Fans a shift offer out to every eligible staff member, producing one
    /// pending request per candidate.
    pub fn fan_out(
        requester_shift: &Shift,
        eligible: &[Staff],
        message: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Vec<SwapRequest> {
        eligible
            .iter()
            .map(|staff| {
                let mut request = SwapRequest::new(
                    &requester_shift.staff_id,
                    &requester_shift.id,
                    &staff.id,
                    created_at,
                );
                request.message = message.clone();
                request
            })
            .collect()
    }

    /// Moves the request to a new status.
    ///
    /// Only `pending` requests may transition, and only to a terminal
    /// status. Terminal states are never resurrected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] for any move out of a
    /// terminal state or back to `pending`.
    pub fn transition(&mut self, to: SwapStatus) -> EngineResult<()> {
        if self.status != SwapStatus::Pending || !to.is_terminal() {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }

    /// Records a counter-offer date proposed by the accepter.
    ///
    /// The caller is responsible for proposing only dates produced by the
    /// counter-offer scan (accepter swap-eligible, requester working).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] when the request is no
    /// longer pending.
    pub fn propose_counter_offer(&mut self, date: NaiveDate) -> EngineResult<()> {
        if self.status != SwapStatus::Pending {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                to: "pending".to_string(),
            });
        }
        self.counter_offer_date = Some(date);
        Ok(())
    }
}
