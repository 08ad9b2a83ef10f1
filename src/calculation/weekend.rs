//! Weekend allowance evaluation.
//!
//! Saturday and Sunday allowances key off the shift's start date only; an
//! overnight Saturday shift that ends on Sunday still attracts the Saturday
//! amount. The two are mutually exclusive by construction since a date has
//! exactly one weekday.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::WeekendRates;
use crate::models::PremiumLine;

/// Display label for the Saturday allowance.
pub const SATURDAY_LABEL: &str = "Saturday";
/// Display label for the Sunday allowance.
pub const SUNDAY_LABEL: &str = "Sunday";

/// Evaluates the weekend allowance for a shift's start date.
pub fn evaluate_weekend(date: NaiveDate, rates: &WeekendRates) -> Option<PremiumLine> {
    match date.weekday() {
        Weekday::Sat => Some(PremiumLine {
            label: SATURDAY_LABEL.to_string(),
            amount: rates.saturday,
        }),
        Weekday::Sun => Some(PremiumLine {
            label: SUNDAY_LABEL.to_string(),
            amount: rates.sunday,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn rates() -> WeekendRates {
        crate::config::test_support::rule_set().weekend().clone()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_saturday_allowance() {
        // 2026-03-07 is a Saturday
        let line = evaluate_weekend(make_date("2026-03-07"), &rates()).unwrap();
        assert_eq!(line.label, "Saturday");
        assert_eq!(line.amount, Decimal::from_str("9.00").unwrap());
    }

    #[test]
    fn test_sunday_allowance() {
        // 2026-03-08 is a Sunday
        let line = evaluate_weekend(make_date("2026-03-08"), &rates()).unwrap();
        assert_eq!(line.label, "Sunday");
        assert_eq!(line.amount, Decimal::from_str("17.99").unwrap());
    }

    #[test]
    fn test_weekdays_attract_nothing() {
        // 2026-03-09 through 2026-03-13 are Monday to Friday
        for day in 9..=13 {
            let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
            assert!(evaluate_weekend(date, &rates()).is_none(), "{}", date);
        }
    }
}
