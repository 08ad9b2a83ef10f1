//! Shift model.
//!
//! This module defines the Shift struct representing one scheduled work
//! period for one staff member, as supplied by the external shift store.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::TimeRange;
use crate::error::{EngineError, EngineResult};

/// Represents one scheduled work period for one staff member.
///
/// The `time` field holds a wall-clock range formatted `HH:MM-HH:MM` in
/// 24-hour time. The end may be numerically earlier than the start, which
/// means the shift crosses midnight and ends on the following calendar day.
///
/// Ownership (`staff_id`) is fixed at creation; a swap creates new shifts
/// for the new owner rather than reassigning this one.
///
/// # Examples
///
/// ```
/// use swap_engine::models::Shift;
/// use chrono::NaiveDate;
///
/// let shift = Shift::new(
///     "shift_001",
///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     "13:15-22:15",
///     "staff_001",
/// ).unwrap();
/// assert!(!shift.is_swapped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift (owned by the storage layer).
    pub id: String,
    /// The calendar date the shift starts on (wall-clock local date).
    pub date: NaiveDate,
    /// The time range, formatted `HH:MM-HH:MM`.
    pub time: String,
    /// The owning staff member.
    pub staff_id: String,
    /// Set once the shift has changed hands via a swap.
    #[serde(default)]
    pub is_swapped: bool,
}

impl Shift {
    /// Creates a shift, validating the time range at the creation boundary.
    ///
    /// A `time` that does not match the `HH:MM-HH:MM` pattern is rejected
    /// here with [`EngineError::InvalidShift`]; downstream arithmetic
    /// assumes well-formed input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when the time range is
    /// malformed.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        staff_id: impl Into<String>,
    ) -> EngineResult<Self> {
        let id = id.into();
        let time = time.into();
        time.parse::<TimeRange>()
            .map_err(|_| EngineError::InvalidShift {
                shift_id: id.clone(),
                message: format!("malformed time range '{}'", time),
            })?;
        Ok(Self {
            id,
            date,
            time,
            staff_id: staff_id.into(),
            is_swapped: false,
        })
    }

    /// Parses the shift's time range for arithmetic.
    ///
    /// A malformed range reaching this point is an upstream contract
    /// violation and fails loudly rather than being silently recovered.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when the stored range does not
    /// parse.
    pub fn time_range(&self) -> EngineResult<TimeRange> {
        self.time
            .parse::<TimeRange>()
            .map_err(|_| EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!("malformed time range '{}'", self.time),
            })
    }

    /// Returns the weekday of the shift's start date.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_engine::models::Shift;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// // 2026-03-07 is a Saturday
    /// let shift = Shift::new(
    ///     "shift_001",
    ///     NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
    ///     "04:15-13:15",
    ///     "staff_001",
    /// ).unwrap();
    /// assert_eq!(shift.weekday(), Weekday::Sat);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
