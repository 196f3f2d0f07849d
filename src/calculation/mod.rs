//! Calculation logic for the EOSB Calculation Engine.
//!
//! This module contains the pure calculation functions: calendar-aware
//! service period decomposition, the minimum-service eligibility gate,
//! tiered accrual arithmetic, resignation penalty selection, and the
//! orchestrating gratuity engine.

mod eligibility;
mod engine;
mod resignation_penalty;
mod service_period;
mod tiered_accrual;

pub use eligibility::{check_eligibility, ineligibility_reason};
pub use engine::{calculate_gratuity, round_to_whole_unit, DAYS_PER_YEAR};
pub use resignation_penalty::{penalty_multiplier, select_penalty_band};
pub use service_period::decompose;
pub use tiered_accrual::{split_tier_years, tier_amount, TieredAccrual, FIRST_TIER_YEARS};
