//! Shift-premium evaluation.
//!
//! The three shift premiums are fixed allowances triggered by unsociable
//! start or end times. Each rule is evaluated independently and every
//! matching rule is applied, so a double shift spanning several windows can
//! attract more than one premium at once.

use crate::config::ShiftPremiumRule;
use crate::models::PremiumLine;

use super::time_range::TimeRange;

/// Evaluates every configured shift premium against a shift's time range.
///
/// A rule matches when the start time falls in its start window or the end
/// clock time falls in its end window. For overnight shifts the end is
/// compared as a clock time on the following day, so a shift ending 01:30
/// matches an end window of 00:00-02:59.
///
/// # Examples
///
/// ```
/// use swap_engine::calculation::{evaluate_shift_premiums, TimeRange};
/// use swap_engine::config::{ClockWindow, ShiftPremiumRule};
/// use rust_decimal::Decimal;
///
/// let rules = vec![ShiftPremiumRule {
///     label: "Shift Premium 1".to_string(),
///     amount: Decimal::new(2699, 2),
///     start_window: ClockWindow { from: 0, to: 299 },
///     end_window: ClockWindow { from: 0, to: 179 },
/// }];
///
/// let range: TimeRange = "04:15-13:15".parse().unwrap();
/// let lines = evaluate_shift_premiums(&range, &rules);
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].label, "Shift Premium 1");
/// ```
pub fn evaluate_shift_premiums(range: &TimeRange, rules: &[ShiftPremiumRule]) -> Vec<PremiumLine> {
    rules
        .iter()
        .filter(|rule| {
            rule.start_window.contains(range.start_minutes())
                || rule.end_window.contains(range.end_clock())
        })
        .map(|rule| PremiumLine {
            label: rule.label.clone(),
            amount: rule.amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> Vec<ShiftPremiumRule> {
        crate::config::test_support::rule_set()
            .shift_premiums()
            .to_vec()
    }

    fn evaluate(range: &str) -> Vec<PremiumLine> {
        evaluate_shift_premiums(&range.parse().unwrap(), &rules())
    }

    #[test]
    fn test_early_start_matches_premium_1() {
        let lines = evaluate("04:15-13:15");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 1");
        assert_eq!(lines[0].amount, dec("26.99"));
    }

    #[test]
    fn test_early_end_matches_premium_1() {
        // Ends 01:30 the next day: inside the 00:00-02:59 end window.
        let lines = evaluate("17:00-01:30");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 1");
    }

    #[test]
    fn test_five_hundred_start_matches_premium_2() {
        let lines = evaluate("05:30-14:00");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 2");
        assert_eq!(lines[0].amount, dec("15.43"));
    }

    #[test]
    fn test_late_end_matches_premium_2() {
        let lines = evaluate("14:00-22:45");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 2");
    }

    #[test]
    fn test_six_hundred_start_matches_premium_3() {
        let lines = evaluate("06:30-15:00");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 3");
        assert_eq!(lines[0].amount, dec("7.70"));
    }

    #[test]
    fn test_evening_end_matches_premium_3() {
        let lines = evaluate("13:15-22:15");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Shift Premium 3");
    }

    #[test]
    fn test_double_shift_matches_two_premiums() {
        // 04:15-22:15 hits the premium 1 start window and the premium 3
        // end window simultaneously.
        let lines = evaluate("04:15-22:15");
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Shift Premium 1", "Shift Premium 3"]);
    }

    #[test]
    fn test_day_shift_matches_nothing() {
        assert!(evaluate("09:00-17:00").is_empty());
    }

    #[test]
    fn test_overnight_end_outside_all_windows() {
        // Ends 06:15: outside every end window; starts 21:15, outside
        // every start window.
        assert!(evaluate("21:15-06:15").is_empty());
    }

    #[test]
    fn test_window_boundaries() {
        // 04:59 start is the last minute of the premium 1 start window.
        assert_eq!(evaluate("04:59-13:00")[0].label, "Shift Premium 1");
        // 05:00 start rolls into premium 2.
        assert_eq!(evaluate("05:00-13:00")[0].label, "Shift Premium 2");
        // 22:29 end is the last minute of the premium 3 end window.
        assert_eq!(evaluate("14:00-22:29")[0].label, "Shift Premium 3");
        // 22:30 end rolls into premium 2.
        assert_eq!(evaluate("14:00-22:30")[0].label, "Shift Premium 2");
    }
}
