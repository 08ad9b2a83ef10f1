//! Configuration loading for the swap engine.
//!
//! Allowance rules, base locations and the pay-period calendar are employer
//! data: they live in YAML files under a configuration directory and are
//! loaded once at startup into a validated [`RuleSet`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowancesConfig, Base, BasesConfig, ClockWindow, NightShiftRule, PayPeriodsFile,
    RawNightShift, RawShiftPremium, RawWindow, RuleSet, RulesetMetadata, ShiftPremiumRule,
    WeekendRates,
};
