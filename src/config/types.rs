//! Configuration types for the swap engine.
//!
//! This module contains the raw structures deserialized from the YAML
//! configuration files and the validated [`RuleSet`] aggregate the engine
//! works with. The allowance table, base codes and pay-period calendar are
//! employer data supplied at load time, never hard-coded into the
//! calculation modules.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PayPeriodTable};

/// Metadata about the premium ruleset.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetMetadata {
    /// Short ruleset code (e.g. "crew_uk").
    pub code: String,
    /// The human-readable name of the ruleset.
    pub name: String,
    /// The version or effective date of the ruleset.
    pub version: String,
}

/// An inclusive clock window in minutes since midnight.
///
/// Shift-premium triggers treat both bounds as inclusive (`contains`); the
/// night-shift rule uses its window as half-open overlap bounds, so a
/// window ending at 05:00 covers exactly 300 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockWindow {
    /// Window start, minutes since midnight.
    pub from: u32,
    /// Window end, minutes since midnight.
    pub to: u32,
}

impl ClockWindow {
    /// Whether a clock minute falls inside the window (inclusive bounds).
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.from && minute <= self.to
    }
}

/// One fixed shift-premium allowance with its trigger windows.
///
/// The rule matches when the shift's start falls in `start_window` or its
/// end clock time falls in `end_window`. Rules are evaluated independently;
/// a shift can attract several premiums at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftPremiumRule {
    /// Display label (e.g. "Shift Premium 1").
    pub label: String,
    /// The fixed amount paid per matching shift.
    pub amount: Decimal,
    /// Start-time trigger window.
    pub start_window: ClockWindow,
    /// End-time trigger window.
    pub end_window: ClockWindow,
}

/// The night-shift allowance rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightShiftRule {
    /// Display label.
    pub label: String,
    /// The fixed amount paid per matching shift.
    pub amount: Decimal,
    /// The reference window (e.g. 00:00-05:00) overlap is measured against.
    pub window: ClockWindow,
    /// Minimum minutes of overlap required for the allowance to apply.
    pub min_overlap_minutes: u32,
}

/// Fixed weekend allowance amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeekendRates {
    /// Amount paid when a shift starts on a Saturday.
    pub saturday: Decimal,
    /// Amount paid when a shift starts on a Sunday.
    pub sunday: Decimal,
}

/// A base location as configured in `bases.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Base {
    /// The base code (e.g. "LGW").
    pub code: String,
    /// The human-readable name of the base.
    pub name: String,
}

/// Raw clock window as it appears in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWindow {
    /// Window start as `HH:MM`.
    pub from: String,
    /// Window end as `HH:MM`.
    pub to: String,
}

/// Raw shift-premium entry as it appears in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShiftPremium {
    /// Display label.
    pub label: String,
    /// The fixed amount.
    pub amount: Decimal,
    /// Start-time trigger window.
    pub start_window: RawWindow,
    /// End-time trigger window.
    pub end_window: RawWindow,
}

/// Raw night-shift rule as it appears in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNightShift {
    /// Display label.
    pub label: String,
    /// The fixed amount.
    pub amount: Decimal,
    /// Reference window start as `HH:MM`.
    pub window_start: String,
    /// Reference window end as `HH:MM`.
    pub window_end: String,
    /// Minimum minutes of overlap required.
    pub min_overlap_minutes: u32,
}

/// `allowances.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancesConfig {
    /// Ruleset metadata.
    pub ruleset: RulesetMetadata,
    /// The shift-premium table.
    pub shift_premiums: Vec<RawShiftPremium>,
    /// The night-shift rule.
    pub night_shift: RawNightShift,
    /// Weekend amounts.
    pub weekend: WeekendRates,
}

/// `bases.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BasesConfig {
    /// The configured base locations.
    pub bases: Vec<Base>,
}

/// One `pay_periods/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPeriodsFile {
    /// The payroll year the file covers.
    pub year: i32,
    /// The published periods for the year.
    pub periods: Vec<PayPeriod>,
}

/// The complete validated ruleset loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct RuleSet {
    metadata: RulesetMetadata,
    shift_premiums: Vec<ShiftPremiumRule>,
    night_shift: NightShiftRule,
    weekend: WeekendRates,
    bases: Vec<Base>,
    pay_periods: Vec<PayPeriodTable>,
}

impl RuleSet {
    /// Assembles a ruleset from its validated parts.
    pub fn new(
        metadata: RulesetMetadata,
        shift_premiums: Vec<ShiftPremiumRule>,
        night_shift: NightShiftRule,
        weekend: WeekendRates,
        bases: Vec<Base>,
        mut pay_periods: Vec<PayPeriodTable>,
    ) -> Self {
        pay_periods.sort_by_key(|t| t.year);
        Self {
            metadata,
            shift_premiums,
            night_shift,
            weekend,
            bases,
            pay_periods,
        }
    }

    /// Returns the ruleset metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        &self.metadata
    }

    /// Returns the shift-premium table.
    pub fn shift_premiums(&self) -> &[ShiftPremiumRule] {
        &self.shift_premiums
    }

    /// Returns the night-shift rule.
    pub fn night_shift(&self) -> &NightShiftRule {
        &self.night_shift
    }

    /// Returns the weekend amounts.
    pub fn weekend(&self) -> &WeekendRates {
        &self.weekend
    }

    /// Returns the configured base locations.
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Whether a base code is part of the configured base set.
    pub fn is_known_base(&self, code: &str) -> bool {
        self.bases.iter().any(|b| b.code == code)
    }

    /// Returns the pay-period calendar for a year, if configured.
    pub fn pay_periods_for_year(&self, year: i32) -> Option<&PayPeriodTable> {
        self.pay_periods.iter().find(|t| t.year == year)
    }

    /// Looks up a specific pay period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PeriodNotFound`] when the year or period
    /// number is not in the published calendar.
    pub fn pay_period(&self, year: i32, id: u32) -> EngineResult<&PayPeriod> {
        self.pay_periods_for_year(year)
            .and_then(|table| table.period(id))
            .ok_or_else(|| EngineError::PeriodNotFound {
                message: format!("no period {} in payroll year {}", id, year),
            })
    }
}
