//! Calculation logic for the shift-swap engine.
//!
//! This module contains the time-range parsing and overlap arithmetic,
//! shift classification into times of day, double-shift pairing rules,
//! swap eligibility matching, counter-offer date scanning, the three
//! premium rule families (shift premiums, night shift, weekend), and the
//! per-shift and per-period premium calculator built on top of them.

mod classification;
mod counter_offer;
mod eligibility;
mod night_shift;
mod premium;
mod shift_premium;
mod time_range;
mod weekend;

pub use classification::{
    AFTERNOON_START, DOUBLE_END, EVENING_HOUR, EVENING_START, MORNING_START, ShiftCategory,
    is_double_shift, is_valid_double_pair, time_of_day,
};
pub use counter_offer::counter_offer_dates;
pub use eligibility::{EligibilityResult, RosterIndex, ShiftLookup, find_eligible_staff};
pub use night_shift::evaluate_night_shift;
pub use premium::{DAY_SHIFT_LABEL, PremiumCalculator};
pub use shift_premium::evaluate_shift_premiums;
pub use time_range::{MINUTES_PER_DAY, TimeRange, overlap_minutes, parse_clock};
pub use weekend::{SATURDAY_LABEL, SUNDAY_LABEL, evaluate_weekend};
