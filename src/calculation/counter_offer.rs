//! Counter-offer date scanning.
//!
//! When a prospective accepter cannot (or does not want to) take the
//! requested shift directly, they may propose an alternative date. This
//! scan computes, for a target calendar month, every date on which a valid
//! exchange is possible. It is re-run whenever the caller changes the
//! target month.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, Staff};

use super::classification::is_valid_double_pair;

/// Scans a calendar month for dates on which the accepter could offer a
/// valid exchange.
///
/// A date qualifies under any of:
/// - the accepter is off and the requester is working (standard swap),
/// - both are working and their shifts are the fixed complementary
///   `04:15`/`13:15` pair (time swap),
/// - the accepter is working that date, is also working on the original
///   request date, and is permitted to work doubles (double-shift
///   absorption).
///
/// Dates before `today` are excluded.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] for an out-of-range month number,
/// or [`EngineError::InvalidShift`] when a shift carries a malformed time
/// range (an upstream contract violation).
pub fn counter_offer_dates(
    accepter: &Staff,
    accepter_shifts: &[Shift],
    requester_shifts: &[Shift],
    request_date: NaiveDate,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> EngineResult<Vec<NaiveDate>> {
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })?;

    let accepter_by_date = index_by_date(accepter_shifts);
    let requester_by_date = index_by_date(requester_shifts);
    let accepter_works_request_date = accepter_by_date.contains_key(&request_date);

    let mut dates = Vec::new();
    let mut date = first_of_month;
    while date.month() == month {
        let current = date;
        date = current
            .checked_add_days(Days::new(1))
            .ok_or(EngineError::InvalidMonth { year, month })?;

        if current < today {
            continue;
        }

        let accepter_shift = accepter_by_date.get(&current);
        let requester_shift = requester_by_date.get(&current);

        let qualifies = match (accepter_shift, requester_shift) {
            // Standard swap: accepter off, requester working.
            (None, Some(_)) => true,
            (Some(a), maybe_r) => {
                let time_swap = match maybe_r {
                    Some(r) => is_valid_double_pair(&a.time_range()?, &r.time_range()?),
                    None => false,
                };
                time_swap || (accepter_works_request_date && accepter.can_work_doubles)
            }
            (None, None) => false,
        };

        if qualifies {
            dates.push(current);
        }
    }

    Ok(dates)
}

/// Indexes shifts by date, keeping the earliest-starting shift per date.
fn index_by_date(shifts: &[Shift]) -> HashMap<NaiveDate, &Shift> {
    let mut index: HashMap<NaiveDate, &Shift> = HashMap::new();
    for shift in shifts {
        index
            .entry(shift.date)
            .and_modify(|existing| {
                if shift.time < existing.time {
                    *existing = shift;
                }
            })
            .or_insert(shift);
    }
    index
}
