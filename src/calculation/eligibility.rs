//! Swap eligibility engine.
//!
//! Given a requester's shift, computes the set of staff at the requester's
//! base who may accept it: anyone off that day, plus anyone whose existing
//! shift is the complementary half of a double (if they are permitted to
//! work doubles).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineResult;
use crate::models::{Shift, Staff};

use super::classification::is_valid_double_pair;

/// The seam to the external shift store: per-staff, per-date roster lookup.
pub trait ShiftLookup {
    /// Returns the staff member's shift on the given date, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store lookup fails; the
    /// eligibility scan treats that candidate as ineligible rather than
    /// aborting the batch.
    fn shift_on(&self, staff_id: &str, date: NaiveDate) -> EngineResult<Option<Shift>>;
}

/// An in-memory roster snapshot indexed by staff member and date.
///
/// Callers fetch shift snapshots from the external store first and index
/// them here for the scan. When a staff member has more than one shift on a
/// date, the earliest-starting one is returned.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    shifts: HashMap<(String, NaiveDate), Vec<Shift>>,
}

impl RosterIndex {
    /// Builds an index from a flat shift snapshot.
    pub fn from_shifts(shifts: impl IntoIterator<Item = Shift>) -> Self {
        let mut index: HashMap<(String, NaiveDate), Vec<Shift>> = HashMap::new();
        for shift in shifts {
            index
                .entry((shift.staff_id.clone(), shift.date))
                .or_default()
                .push(shift);
        }
        for entries in index.values_mut() {
            entries.sort_by(|a, b| a.time.cmp(&b.time));
        }
        Self { shifts: index }
    }
}

impl ShiftLookup for RosterIndex {
    fn shift_on(&self, staff_id: &str, date: NaiveDate) -> EngineResult<Option<Shift>> {
        Ok(self
            .shifts
            .get(&(staff_id.to_string(), date))
            .and_then(|entries| entries.first())
            .cloned())
    }
}

/// The set of staff eligible to accept a swap offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Eligible candidates, ordered by staff number.
    pub eligible_staff: Vec<Staff>,
}

/// Computes which of the base's staff may accept the requester's shift.
///
/// A candidate is eligible when they have no shift on the requested date
/// (they are off), or when they are permitted to work doubles and their
/// existing shift forms a valid double pair with the requester's shift.
/// The requester is always excluded. An empty result is a normal outcome.
///
/// Candidates whose roster lookup fails are logged and treated as
/// ineligible; one bad lookup never aborts the batch. The result is sorted
/// by staff number so identical snapshots produce identical output.
///
/// # Errors
///
/// Returns an error only when the requester's own shift carries a
/// malformed time range, which is an upstream contract violation.
pub fn find_eligible_staff(
    requester_shift: &Shift,
    base_staff: &[Staff],
    lookup: &impl ShiftLookup,
) -> EngineResult<EligibilityResult> {
    let requester_range = requester_shift.time_range()?;

    let mut eligible: Vec<Staff> = Vec::new();
    for candidate in base_staff {
        if candidate.id == requester_shift.staff_id {
            continue;
        }

        let candidate_shift = match lookup.shift_on(&candidate.id, requester_shift.date) {
            Ok(shift) => shift,
            Err(error) => {
                warn!(
                    staff_id = %candidate.id,
                    date = %requester_shift.date,
                    error = %error,
                    "Roster lookup failed; treating candidate as ineligible"
                );
                continue;
            }
        };

        match candidate_shift {
            // Off that day: free to take the shift.
            None => eligible.push(candidate.clone()),
            Some(shift) => {
                if !candidate.can_work_doubles {
                    continue;
                }
                match shift.time_range() {
                    Ok(candidate_range)
                        if is_valid_double_pair(&candidate_range, &requester_range) =>
                    {
                        eligible.push(candidate.clone());
                    }
                    Ok(_) => {}
                    Err(error) => {
                        warn!(
                            staff_id = %candidate.id,
                            shift_id = %shift.id,
                            error = %error,
                            "Malformed candidate shift; treating candidate as ineligible"
                        );
                    }
                }
            }
        }
    }

    eligible.sort_by(|a, b| a.staff_number.cmp(&b.staff_number));
    Ok(EligibilityResult {
        eligible_staff: eligible,
    })
}
