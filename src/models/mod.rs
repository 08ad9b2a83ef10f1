//! Data models for the swap engine.
//!
//! This module contains the plain data records exchanged with the external
//! shift store and staff directory, plus the computed premium result types.

mod pay_period;
mod premium;
mod shift;
mod staff;
mod swap_request;

pub use pay_period::{PayPeriod, PayPeriodTable};
pub use premium::{AllowanceTally, PeriodSummary, PremiumBreakdown, PremiumLine};
pub use shift::Shift;
pub use staff::Staff;
pub use swap_request::{SwapRequest, SwapStatus};
