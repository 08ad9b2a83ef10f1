//! Premium calculation result models.
//!
//! This module contains the per-shift [`PremiumBreakdown`] and the
//! per-period [`PeriodSummary`] produced by the premium calculator, with
//! line items retained for audit and breakdown display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// A single allowance line applied to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumLine {
    /// The allowance label (e.g. "Shift Premium 1", "Night Shift").
    pub label: String,
    /// The fixed amount for this allowance.
    pub amount: Decimal,
}

/// The premium result for one shift.
///
/// `labels` lists everything matched for display; when no time premium
/// matched, it carries the "Day Shift" display label with no corresponding
/// line item. `amount` is always the exact sum of `line_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// The shift this breakdown is for.
    pub shift_id: String,
    /// The shift's start date.
    pub date: NaiveDate,
    /// Display labels for everything matched (or "Day Shift").
    pub labels: Vec<String>,
    /// Total premium amount for the shift.
    pub amount: Decimal,
    /// The individual allowance lines that sum to `amount`.
    pub line_items: Vec<PremiumLine>,
}

/// Count and total for one allowance label across a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceTally {
    /// The allowance label.
    pub label: String,
    /// How many shifts attracted this allowance.
    pub count: u32,
    /// The total amount across those shifts.
    pub total: Decimal,
}

/// The aggregated premium result for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The pay period the summary covers.
    pub period: PayPeriod,
    /// Per-shift breakdowns for every shift in the period.
    pub breakdowns: Vec<PremiumBreakdown>,
    /// Per-allowance tallies, sorted by total amount descending.
    pub tallies: Vec<AllowanceTally>,
    /// Total scheduled hours across the period.
    pub total_hours: Decimal,
    /// Total premium amount across the period.
    pub total_premium: Decimal,
    /// Dates with two or more shifts, computed across the full shift
    /// history. Reported for audit only; premiums apply identically
    /// regardless.
    pub double_shift_dates: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_breakdown_amount_matches_line_items() {
        let breakdown = PremiumBreakdown {
            shift_id: "shift_001".to_string(),
            date: make_date("2026-03-07"),
            labels: vec!["Shift Premium 1".to_string(), "Saturday".to_string()],
            amount: dec("35.99"),
            line_items: vec![
                PremiumLine {
                    label: "Shift Premium 1".to_string(),
                    amount: dec("26.99"),
                },
                PremiumLine {
                    label: "Saturday".to_string(),
                    amount: dec("9.00"),
                },
            ],
        };

        let sum: Decimal = breakdown.line_items.iter().map(|l| l.amount).sum();
        assert_eq!(breakdown.amount, sum);
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = PremiumBreakdown {
            shift_id: "shift_001".to_string(),
            date: make_date("2026-03-07"),
            labels: vec!["Day Shift".to_string()],
            amount: Decimal::ZERO,
            line_items: vec![],
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"shift_id\":\"shift_001\""));
        assert!(json.contains("\"labels\":[\"Day Shift\"]"));

        let deserialized: PremiumBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, breakdown);
    }

    #[test]
    fn test_tally_serialization() {
        let tally = AllowanceTally {
            label: "Night Shift".to_string(),
            count: 3,
            total: dec("108.78"),
        };

        let json = serde_json::to_string(&tally).unwrap();
        assert!(json.contains("\"label\":\"Night Shift\""));
        assert!(json.contains("\"count\":3"));

        let deserialized: AllowanceTally = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, tally);
    }
}
