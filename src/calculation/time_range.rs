//! Time-range parsing and overlap arithmetic.
//!
//! This module converts `"HH:MM-HH:MM"` strings into minute offsets and
//! computes durations and overlaps, handling midnight rollover uniformly so
//! classification and premium code never repeat the off-by-one logic.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A parsed shift time range in minutes since midnight.
///
/// When the end token is numerically less than or equal to the start token
/// the range crosses midnight, and the end is normalized by adding 1440 so
/// that `end > start` always holds after parsing.
///
/// # Examples
///
/// ```
/// use swap_engine::calculation::TimeRange;
///
/// let range: TimeRange = "21:15-06:15".parse().unwrap();
/// assert_eq!(range.start_minutes(), 21 * 60 + 15);
/// assert_eq!(range.end_minutes(), 6 * 60 + 15 + 1440);
/// assert!(range.crosses_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// Minutes since midnight at which the range starts.
    pub fn start_minutes(&self) -> u32 {
        self.start
    }

    /// Minutes since midnight at which the range ends, normalized past 1440
    /// for overnight ranges.
    pub fn end_minutes(&self) -> u32 {
        self.end
    }

    /// The end expressed as a clock time on its own day (minutes 0..1439).
    pub fn end_clock(&self) -> u32 {
        self.end % MINUTES_PER_DAY
    }

    /// Whether the range extends past 24:00 into the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.end > MINUTES_PER_DAY
    }

    /// The duration of the range in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_engine::calculation::TimeRange;
    /// use rust_decimal::Decimal;
    ///
    /// let range: TimeRange = "04:15-13:15".parse().unwrap();
    /// assert_eq!(range.duration_hours(), Decimal::new(90, 1)); // 9.0
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.end - self.start) / Decimal::from(60)
    }

    /// Minutes of this range falling inside a fixed clock window
    /// `[window_start, window_end)` expressed in minutes since midnight.
    ///
    /// The window is checked against the same-day portion of the range and,
    /// when the range extends past 24:00, against the rolled-over portion
    /// (both range bounds shifted by −1440).
    pub fn minutes_within(&self, window_start: u32, window_end: u32) -> i64 {
        let (start, end) = (i64::from(self.start), i64::from(self.end));
        let (ws, we) = (i64::from(window_start), i64::from(window_end));
        let day = i64::from(MINUTES_PER_DAY);

        let same_day = overlap_minutes(start, end, ws, we);
        let rolled_over = overlap_minutes(start - day, end - day, ws, we);
        same_day + rolled_over
    }
}

impl FromStr for TimeRange {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let (start_token, end_token) =
            s.split_once('-').ok_or_else(|| EngineError::InvalidTimeRange {
                value: s.to_string(),
            })?;

        let start = parse_clock(start_token).map_err(|_| EngineError::InvalidTimeRange {
            value: s.to_string(),
        })?;
        let mut end = parse_clock(end_token).map_err(|_| EngineError::InvalidTimeRange {
            value: s.to_string(),
        })?;

        // End at or before start means the shift runs into the next day.
        if end <= start {
            end += MINUTES_PER_DAY;
        }

        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.end_clock();
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            end / 60,
            end % 60
        )
    }
}

/// Parses a single `HH:MM` token into minutes since midnight.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeRange`] when the token is not two
/// zero-padded digit groups within clock bounds.
pub fn parse_clock(token: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTimeRange {
        value: token.to_string(),
    };

    let (hh, mm) = token.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hh.parse().map_err(|_| invalid())?;
    let minutes: u32 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// The number of minutes two intervals overlap.
///
/// Computes `max(0, min(a_end, b_end) - max(a_start, b_start))`; the result
/// is symmetric in its interval arguments.
pub fn overlap_minutes(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}
