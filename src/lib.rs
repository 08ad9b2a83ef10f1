//! Shift-swap eligibility and premium-pay engine for airline crew rosters.
//!
//! This crate determines which staff at a base may accept a shift-swap offer,
//! scans for counter-offer dates, and calculates the fixed premium allowances
//! (shift premiums, night shift, weekend) owed for the shifts in a pay period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
