//! Shift classification by time-of-day bucket and double-shift detection.
//!
//! The buckets are fixed literal start times tied to the employer's roster
//! patterns (04:15 morning, 13:15 afternoon, 21:15 / 19:xx evening) rather
//! than general time-of-day cutoffs. Any change here changes which shifts
//! pair up as doubles, so the literals are kept as named constants in one
//! place.

use serde::{Deserialize, Serialize};

use super::time_range::TimeRange;

/// Start minute of a morning half-shift (04:15).
pub const MORNING_START: u32 = 4 * 60 + 15;
/// Start minute of an afternoon half-shift (13:15).
pub const AFTERNOON_START: u32 = 13 * 60 + 15;
/// Start minute of the fixed evening shift (21:15).
pub const EVENING_START: u32 = 21 * 60 + 15;
/// Evening shifts also start anywhere in the 19:00 hour.
pub const EVENING_HOUR: u32 = 19;
/// End minute of the confirmed worked-both-halves pattern (22:15).
pub const DOUBLE_END: u32 = 22 * 60 + 15;

/// The time-of-day bucket of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// Starts at exactly 04:15.
    Morning,
    /// Starts at exactly 13:15.
    Afternoon,
    /// Starts at exactly 21:15 or anywhere in the 19:00 hour.
    Evening,
    /// Anything else.
    Other,
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftCategory::Morning => write!(f, "Morning"),
            ShiftCategory::Afternoon => write!(f, "Afternoon"),
            ShiftCategory::Evening => write!(f, "Evening"),
            ShiftCategory::Other => write!(f, "Other"),
        }
    }
}

/// Classifies a shift by its start time.
///
/// # Examples
///
/// ```
/// use swap_engine::calculation::{time_of_day, ShiftCategory, TimeRange};
///
/// let morning: TimeRange = "04:15-13:15".parse().unwrap();
/// assert_eq!(time_of_day(&morning), ShiftCategory::Morning);
///
/// let late: TimeRange = "19:30-23:30".parse().unwrap();
/// assert_eq!(time_of_day(&late), ShiftCategory::Evening);
/// ```
pub fn time_of_day(range: &TimeRange) -> ShiftCategory {
    let start = range.start_minutes();
    match start {
        MORNING_START => ShiftCategory::Morning,
        AFTERNOON_START => ShiftCategory::Afternoon,
        EVENING_START => ShiftCategory::Evening,
        _ if start / 60 == EVENING_HOUR => ShiftCategory::Evening,
        _ => ShiftCategory::Other,
    }
}

/// Whether a shift is the confirmed worked-both-halves pattern,
/// exactly `04:15-22:15`.
pub fn is_double_shift(range: &TimeRange) -> bool {
    range.start_minutes() == MORNING_START && range.end_minutes() == DOUBLE_END
}

/// Whether two half-shifts on the same day are mutually compatible halves
/// of a double: one starts at 04:15 and the other at 13:15, in either
/// order.
///
/// # Examples
///
/// ```
/// use swap_engine::calculation::{is_valid_double_pair, TimeRange};
///
/// let morning: TimeRange = "04:15-13:15".parse().unwrap();
/// let afternoon: TimeRange = "13:15-22:15".parse().unwrap();
/// assert!(is_valid_double_pair(&morning, &afternoon));
/// assert!(is_valid_double_pair(&afternoon, &morning));
/// assert!(!is_valid_double_pair(&morning, &morning));
/// ```
pub fn is_valid_double_pair(a: &TimeRange, b: &TimeRange) -> bool {
    let (a_start, b_start) = (a.start_minutes(), b.start_minutes());
    (a_start == MORNING_START && b_start == AFTERNOON_START)
        || (a_start == AFTERNOON_START && b_start == MORNING_START)
}
