//! Night-shift allowance evaluation.
//!
//! The night-shift allowance applies when a shift spends at least a
//! configured number of minutes inside the reference night window
//! (00:00-05:00 in the shipped ruleset), counting the rolled-over portion
//! of overnight shifts.

use crate::config::NightShiftRule;
use crate::models::PremiumLine;

use super::time_range::TimeRange;

/// Evaluates the night-shift rule against a shift's time range.
///
/// Overlap is measured against the rule's window on the shift's own day
/// and, for shifts extending past 24:00, against the following day's
/// window.
pub fn evaluate_night_shift(range: &TimeRange, rule: &NightShiftRule) -> Option<PremiumLine> {
    let overlap = range.minutes_within(rule.window.from, rule.window.to);
    if overlap >= i64::from(rule.min_overlap_minutes) {
        Some(PremiumLine {
            label: rule.label.clone(),
            amount: rule.amount,
        })
    } else {
        None
    }
}
