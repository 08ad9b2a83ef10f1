//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the premium
//! ruleset, base locations and pay-period calendars from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::parse_clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PayPeriodTable};

use super::types::{
    AllowancesConfig, BasesConfig, ClockWindow, NightShiftRule, PayPeriodsFile, RawWindow, RuleSet,
    ShiftPremiumRule,
};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the validated [`RuleSet`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/crew_uk/
/// ├── allowances.yaml      # Shift premiums, night shift, weekend amounts
/// ├── bases.yaml           # Crew base locations
/// └── pay_periods/
///     └── 2026.yaml        # Published pay-period calendar for the year
/// ```
///
/// # Example
///
/// ```no_run
/// use swap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/crew_uk").unwrap();
/// println!("Ruleset: {}", loader.rules().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleSet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/crew_uk")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any clock time in the allowance table is malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swap_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/crew_uk")?;
    /// # Ok::<(), swap_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load allowances.yaml
        let allowances_path = path.join("allowances.yaml");
        let allowances = Self::load_yaml::<AllowancesConfig>(&allowances_path)?;

        // Load bases.yaml
        let bases_path = path.join("bases.yaml");
        let bases_config = Self::load_yaml::<BasesConfig>(&bases_path)?;

        // Load all calendar files from the pay_periods directory
        let periods_dir = path.join("pay_periods");
        let pay_periods = Self::load_pay_periods(&periods_dir)?;

        let allowances_path_str = allowances_path.display().to_string();

        let shift_premiums = allowances
            .shift_premiums
            .into_iter()
            .map(|raw| {
                Ok(ShiftPremiumRule {
                    label: raw.label,
                    amount: raw.amount,
                    start_window: Self::parse_window(&raw.start_window, &allowances_path_str)?,
                    end_window: Self::parse_window(&raw.end_window, &allowances_path_str)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let night_shift = NightShiftRule {
            label: allowances.night_shift.label,
            amount: allowances.night_shift.amount,
            window: ClockWindow {
                from: Self::parse_clock_time(&allowances.night_shift.window_start, &allowances_path_str)?,
                to: Self::parse_clock_time(&allowances.night_shift.window_end, &allowances_path_str)?,
            },
            min_overlap_minutes: allowances.night_shift.min_overlap_minutes,
        };

        let rules = RuleSet::new(
            allowances.ruleset,
            shift_premiums,
            night_shift,
            allowances.weekend,
            bases_config.bases,
            pay_periods,
        );

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all calendar files from the pay_periods directory.
    fn load_pay_periods(periods_dir: &Path) -> EngineResult<Vec<PayPeriodTable>> {
        let periods_dir_str = periods_dir.display().to_string();

        if !periods_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: periods_dir_str,
            });
        }

        let entries = fs::read_dir(periods_dir).map_err(|_| EngineError::ConfigNotFound {
            path: periods_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: periods_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<PayPeriodsFile>(&path)?;
                Self::validate_periods(&file.periods, &path.display().to_string())?;
                tables.push(PayPeriodTable::new(file.year, file.periods));
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no calendar files found)", periods_dir_str),
            });
        }

        Ok(tables)
    }

    /// Checks a published calendar for overlapping or inverted periods.
    fn validate_periods(periods: &[PayPeriod], path: &str) -> EngineResult<()> {
        let mut sorted: Vec<&PayPeriod> = periods.iter().collect();
        sorted.sort_by_key(|p| p.start_date);

        for period in &sorted {
            if period.end_date < period.start_date {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("period {} ends before it starts", period.id),
                });
            }
        }

        for pair in sorted.windows(2) {
            if pair[1].start_date <= pair[0].end_date {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("periods {} and {} overlap", pair[0].id, pair[1].id),
                });
            }
        }

        Ok(())
    }

    /// Parses an `HH:MM` clock time from configuration.
    fn parse_clock_time(value: &str, path: &str) -> EngineResult<u32> {
        parse_clock(value).map_err(|_| EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!("invalid clock time: {}", value),
        })
    }

    /// Parses a raw window from configuration.
    fn parse_window(raw: &RawWindow, path: &str) -> EngineResult<ClockWindow> {
        Ok(ClockWindow {
            from: Self::parse_clock_time(&raw.from, path)?,
            to: Self::parse_clock_time(&raw.to, path)?,
        })
    }

    /// Returns the loaded ruleset.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Looks up a specific pay period in the published calendar.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swap_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/crew_uk")?;
    /// let period = loader.pay_period(2026, 3)?;
    /// println!("Period 3 starts {}", period.start_date);
    /// # Ok::<(), swap_engine::error::EngineError>(())
    /// ```
    pub fn pay_period(&self, year: i32, id: u32) -> EngineResult<&PayPeriod> {
        self.rules.pay_period(year, id)
    }
}
