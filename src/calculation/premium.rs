//! Per-shift premium breakdown and pay-period aggregation.
//!
//! [`PremiumCalculator`] bundles the configured ruleset and turns shifts
//! into [`PremiumBreakdown`]s, then aggregates a pay period into a
//! [`PeriodSummary`] with per-allowance tallies and exact totals.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::error::EngineResult;
use crate::models::{AllowanceTally, PayPeriod, PeriodSummary, PremiumBreakdown, Shift};

use super::night_shift::evaluate_night_shift;
use super::shift_premium::evaluate_shift_premiums;
use super::weekend::evaluate_weekend;

/// Display label applied when none of the shift premiums matched.
pub const DAY_SHIFT_LABEL: &str = "Day Shift";

/// Computes premium allowances for shifts under a configured ruleset.
///
/// # Examples
///
/// ```no_run
/// use swap_engine::calculation::PremiumCalculator;
/// use swap_engine::config::ConfigLoader;
/// use swap_engine::models::Shift;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("config/crew_uk").unwrap();
/// let calculator = PremiumCalculator::new(loader.rules());
///
/// // 2026-03-07 is a Saturday
/// let shift = Shift::new(
///     "shift_001",
///     NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
///     "04:15-13:15",
///     "staff_001",
/// ).unwrap();
///
/// let breakdown = calculator.breakdown(&shift).unwrap();
/// assert_eq!(breakdown.amount.to_string(), "35.99");
/// ```
#[derive(Debug, Clone)]
pub struct PremiumCalculator<'a> {
    rules: &'a RuleSet,
    include_time_premiums: bool,
}

impl<'a> PremiumCalculator<'a> {
    /// Creates a calculator over the given ruleset with time premiums
    /// enabled.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            include_time_premiums: true,
        }
    }

    /// Disables shift-premium evaluation for this computation context.
    /// Weekend and night-shift allowances still apply.
    pub fn without_time_premiums(mut self) -> Self {
        self.include_time_premiums = false;
        self
    }

    /// Computes the premium breakdown for a single shift.
    ///
    /// Weekend allowance first, then each matching shift premium, then the
    /// night-shift allowance; every match is applied. When no shift
    /// premium matched, the display labels carry "Day Shift" with no
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidShift`] when the
    /// shift's time range is malformed.
    pub fn breakdown(&self, shift: &Shift) -> EngineResult<PremiumBreakdown> {
        let range = shift.time_range()?;

        let mut line_items = Vec::new();
        let mut labels = Vec::new();

        if let Some(line) = evaluate_weekend(shift.date, self.rules.weekend()) {
            labels.push(line.label.clone());
            line_items.push(line);
        }

        if self.include_time_premiums {
            let premiums = evaluate_shift_premiums(&range, self.rules.shift_premiums());
            if premiums.is_empty() {
                labels.push(DAY_SHIFT_LABEL.to_string());
            }
            for line in premiums {
                labels.push(line.label.clone());
                line_items.push(line);
            }
        }

        if let Some(line) = evaluate_night_shift(&range, self.rules.night_shift()) {
            labels.push(line.label.clone());
            line_items.push(line);
        }

        let amount: Decimal = line_items.iter().map(|l| l.amount).sum();

        Ok(PremiumBreakdown {
            shift_id: shift.id.clone(),
            date: shift.date,
            labels,
            amount,
            line_items,
        })
    }

    /// Aggregates a pay period from the staff member's full shift history.
    ///
    /// Shifts inside the period are broken down and tallied per allowance
    /// label (sorted by total amount descending); total scheduled hours and
    /// the total premium amount are tracked alongside. Double-shift dates
    /// are identified across the entire history, not just the period, and
    /// are reported for audit only; every shift is evaluated identically
    /// regardless.
    ///
    /// # Errors
    ///
    /// Returns an error when any in-period shift carries a malformed time
    /// range.
    pub fn summarize(&self, period: &PayPeriod, history: &[Shift]) -> EngineResult<PeriodSummary> {
        let period_shifts: Vec<&Shift> = history
            .iter()
            .filter(|s| period.contains_date(s.date))
            .collect();

        let mut breakdowns = Vec::with_capacity(period_shifts.len());
        let mut total_hours = Decimal::ZERO;
        for shift in &period_shifts {
            total_hours += shift.time_range()?.duration_hours();
            breakdowns.push(self.breakdown(shift)?);
        }

        let total_premium: Decimal = breakdowns.iter().map(|b| b.amount).sum();

        let mut tally_map: HashMap<&str, (u32, Decimal)> = HashMap::new();
        for breakdown in &breakdowns {
            for line in &breakdown.line_items {
                let entry = tally_map.entry(line.label.as_str()).or_default();
                entry.0 += 1;
                entry.1 += line.amount;
            }
        }
        let mut tallies: Vec<AllowanceTally> = tally_map
            .into_iter()
            .map(|(label, (count, total))| AllowanceTally {
                label: label.to_string(),
                count,
                total,
            })
            .collect();
        tallies.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));

        let mut shifts_per_date: HashMap<NaiveDate, u32> = HashMap::new();
        for shift in history {
            *shifts_per_date.entry(shift.date).or_default() += 1;
        }
        let mut double_shift_dates: Vec<NaiveDate> = shifts_per_date
            .into_iter()
            .filter(|&(_, count)| count >= 2)
            .map(|(date, _)| date)
            .collect();
        double_shift_dates.sort();

        Ok(PeriodSummary {
            period: period.clone(),
            breakdowns,
            tallies,
            total_hours,
            total_premium,
            double_shift_dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::rule_set;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn shift(id: &str, date: &str, time: &str) -> Shift {
        Shift::new(id, make_date(date), time, "staff_001").unwrap()
    }

    #[test]
    fn test_saturday_morning_shift() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);

        // 2026-03-07 is a Saturday; 04:15 start triggers premium 1.
        let breakdown = calculator
            .breakdown(&shift("shift_001", "2026-03-07", "04:15-13:15"))
            .unwrap();

        assert_eq!(breakdown.amount, dec("35.99"));
        let labels: Vec<&str> = breakdown.labels.iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["Saturday", "Shift Premium 1"]);
        assert_eq!(breakdown.line_items.len(), 2);
    }

    #[test]
    fn test_overnight_shift_is_night_only_day_shift_for_display() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);

        // 21:15-06:15 on a Monday: night shift applies, no shift premium
        // matches (06:15 end is outside every end window).
        let breakdown = calculator
            .breakdown(&shift("shift_001", "2026-03-09", "21:15-06:15"))
            .unwrap();

        assert_eq!(breakdown.amount, dec("36.26"));
        assert_eq!(breakdown.line_items.len(), 1);
        assert_eq!(breakdown.line_items[0].label, "Night Shift");
        assert!(breakdown.labels.contains(&DAY_SHIFT_LABEL.to_string()));
    }

    #[test]
    fn test_double_shift_attracts_multiple_premiums() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);

        // Weekday double 04:15-22:15: premium 1 + premium 3.
        let breakdown = calculator
            .breakdown(&shift("shift_001", "2026-03-09", "04:15-22:15"))
            .unwrap();

        assert_eq!(breakdown.amount, dec("34.69")); // 26.99 + 7.70
        assert!(!breakdown.labels.contains(&DAY_SHIFT_LABEL.to_string()));
    }

    #[test]
    fn test_plain_day_shift_has_zero_amount() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);

        let breakdown = calculator
            .breakdown(&shift("shift_001", "2026-03-10", "09:00-17:00"))
            .unwrap();

        assert_eq!(breakdown.amount, Decimal::ZERO);
        assert_eq!(breakdown.labels, vec![DAY_SHIFT_LABEL.to_string()]);
        assert!(breakdown.line_items.is_empty());
    }

    #[test]
    fn test_without_time_premiums_keeps_weekend_and_night() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules).without_time_premiums();

        // Saturday morning shift: only the Saturday allowance remains.
        let breakdown = calculator
            .breakdown(&shift("shift_001", "2026-03-07", "04:15-13:15"))
            .unwrap();

        assert_eq!(breakdown.amount, dec("9.00"));
        assert_eq!(breakdown.labels, vec!["Saturday".to_string()]);
    }

    fn sample_history() -> Vec<Shift> {
        vec![
            // In period 3 (2026-02-22 to 2026-03-21):
            shift("shift_001", "2026-03-07", "04:15-13:15"), // Sat: SP1 + Saturday
            shift("shift_002", "2026-03-08", "13:15-22:15"), // Sun: SP3 + Sunday
            shift("shift_003", "2026-03-09", "04:15-13:15"), // Mon: SP1
            shift("shift_004", "2026-03-09", "13:15-22:15"), // Mon: SP3 (double day)
            shift("shift_005", "2026-03-11", "21:15-06:15"), // Wed: Night
            // Outside the period:
            shift("shift_006", "2026-03-25", "04:15-13:15"),
        ]
    }

    #[test]
    fn test_summarize_totals_and_tallies() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();

        let summary = calculator.summarize(&period, &sample_history()).unwrap();

        assert_eq!(summary.breakdowns.len(), 5);
        // 9 + 9 + 9 + 9 + 9 hours
        assert_eq!(summary.total_hours, dec("45"));
        // SP1 x2 + SP3 x2 + Saturday + Sunday + Night
        let expected = dec("26.99") * Decimal::from(2)
            + dec("7.70") * Decimal::from(2)
            + dec("9.00")
            + dec("17.99")
            + dec("36.26");
        assert_eq!(summary.total_premium, expected);

        // Tallies sorted by total descending.
        assert_eq!(summary.tallies[0].label, "Shift Premium 1");
        assert_eq!(summary.tallies[0].count, 2);
        assert_eq!(summary.tallies[0].total, dec("53.98"));
        assert_eq!(summary.tallies[1].label, "Night Shift");
        for pair in summary.tallies.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_summarize_round_trip() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();

        let summary = calculator.summarize(&period, &sample_history()).unwrap();

        let per_shift_sum: Decimal = summary.breakdowns.iter().map(|b| b.amount).sum();
        assert_eq!(summary.total_premium, per_shift_sum);

        let tally_sum: Decimal = summary.tallies.iter().map(|t| t.total).sum();
        assert_eq!(summary.total_premium, tally_sum);
    }

    #[test]
    fn test_summarize_double_days_reported_not_gating() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();

        let summary = calculator.summarize(&period, &sample_history()).unwrap();

        assert_eq!(summary.double_shift_dates, vec![make_date("2026-03-09")]);

        // The two halves of the double day are evaluated exactly like the
        // same shifts on single days.
        let single_morning = calculator
            .breakdown(&shift("x", "2026-03-09", "04:15-13:15"))
            .unwrap();
        let in_summary = summary
            .breakdowns
            .iter()
            .find(|b| b.shift_id == "shift_003")
            .unwrap();
        assert_eq!(in_summary.amount, single_morning.amount);
        assert_eq!(in_summary.line_items, single_morning.line_items);
    }

    #[test]
    fn test_summarize_excludes_out_of_period_shifts() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();

        let summary = calculator.summarize(&period, &sample_history()).unwrap();
        assert!(summary.breakdowns.iter().all(|b| b.shift_id != "shift_006"));
    }

    #[test]
    fn test_summarize_empty_history() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();

        let summary = calculator.summarize(&period, &[]).unwrap();
        assert!(summary.breakdowns.is_empty());
        assert!(summary.tallies.is_empty());
        assert_eq!(summary.total_premium, Decimal::ZERO);
        assert_eq!(summary.total_hours, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent_over_identical_snapshots() {
        let rules = rule_set();
        let calculator = PremiumCalculator::new(&rules);
        let period = rules.pay_period(2026, 3).unwrap().clone();
        let history = sample_history();

        let first = calculator.summarize(&period, &history).unwrap();
        let second = calculator.summarize(&period, &history).unwrap();
        assert_eq!(first, second);
    }
}
