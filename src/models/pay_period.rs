//! Pay period models.
//!
//! Pay periods are fixed calendar windows (4 or 5 whole weeks, Sunday to
//! Saturday inclusive) published in advance by the employer's payroll
//! calendar. They are supplied to the engine as configuration data and are
//! never derived algorithmically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one pay period from the published payroll calendar.
///
/// # Example
///
/// ```
/// use swap_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     id: 3,
///     label: "Period 3".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 21).unwrap(),
///     weeks: 4,
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The period number within the payroll year.
    pub id: u32,
    /// Display label (e.g. "Period 3").
    pub label: String,
    /// The start date (inclusive, a Sunday).
    pub start_date: NaiveDate,
    /// The end date (inclusive, a Saturday).
    pub end_date: NaiveDate,
    /// The number of whole weeks in the period (4 or 5).
    pub weeks: u8,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// The published pay-period calendar for one payroll year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodTable {
    /// The payroll year this table covers.
    pub year: i32,
    /// The periods, ordered by start date.
    periods: Vec<PayPeriod>,
}

impl PayPeriodTable {
    /// Creates a table from a list of periods, ordering them by start date.
    pub fn new(year: i32, mut periods: Vec<PayPeriod>) -> Self {
        periods.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Self { year, periods }
    }

    /// Returns all periods in the table, ordered by start date.
    pub fn periods(&self) -> &[PayPeriod] {
        &self.periods
    }

    /// Looks up a period by its number within the year.
    pub fn period(&self, id: u32) -> Option<&PayPeriod> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// Finds the period containing a given date, if any.
    pub fn period_containing(&self, date: NaiveDate) -> Option<&PayPeriod> {
        self.periods.iter().find(|p| p.contains_date(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn period(id: u32, start: &str, end: &str, weeks: u8) -> PayPeriod {
        PayPeriod {
            id,
            label: format!("Period {}", id),
            start_date: make_date(start),
            end_date: make_date(end),
            weeks,
        }
    }

    fn sample_table() -> PayPeriodTable {
        PayPeriodTable::new(
            2026,
            vec![
                period(2, "2026-01-25", "2026-02-21", 4),
                period(1, "2025-12-28", "2026-01-24", 4),
                period(3, "2026-02-22", "2026-03-21", 4),
            ],
        )
    }

    #[test]
    fn test_contains_date_inclusive_bounds() {
        let p = period(1, "2025-12-28", "2026-01-24", 4);
        assert!(p.contains_date(p.start_date));
        assert!(p.contains_date(p.end_date));
        assert!(p.contains_date(make_date("2026-01-10")));
        assert!(!p.contains_date(make_date("2025-12-27")));
        assert!(!p.contains_date(make_date("2026-01-25")));
    }

    #[test]
    fn test_table_orders_periods_by_start_date() {
        let table = sample_table();
        let ids: Vec<u32> = table.periods().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_period_lookup_by_id() {
        let table = sample_table();
        assert_eq!(table.period(2).unwrap().start_date, make_date("2026-01-25"));
        assert!(table.period(9).is_none());
    }

    #[test]
    fn test_period_containing_date() {
        let table = sample_table();
        let p = table.period_containing(make_date("2026-03-07")).unwrap();
        assert_eq!(p.id, 3);
        assert!(table.period_containing(make_date("2026-06-01")).is_none());
    }

    #[test]
    fn test_pay_period_serialization() {
        let p = period(1, "2025-12-28", "2026-01-24", 4);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"start_date\":\"2025-12-28\""));
        assert!(json.contains("\"weeks\":4"));

        let deserialized: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, p);
    }
}
