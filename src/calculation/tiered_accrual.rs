//! Tiered accrual-rate arithmetic.
//!
//! Article 132 accrues gratuity at one rate for the first five years of
//! service and a higher rate for every year beyond that. Only whole years
//! count toward accrual: the trailing months and days past the last whole
//! year are reported in the service period but excluded from the money.

use rust_decimal::Decimal;

/// The number of service years covered by the first accrual tier.
pub const FIRST_TIER_YEARS: u32 = 5;

/// The whole-year split between the two accrual tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredAccrual {
    /// Years counted in the first tier (at most [`FIRST_TIER_YEARS`]).
    pub first_five_years: u32,
    /// Years counted in the second tier.
    pub additional_years: u32,
}

/// Splits the eligible whole years across the two accrual tiers.
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::split_tier_years;
///
/// let split = split_tier_years(7);
/// assert_eq!(split.first_five_years, 5);
/// assert_eq!(split.additional_years, 2);
/// ```
pub fn split_tier_years(eligible_years: u32) -> TieredAccrual {
    TieredAccrual {
        first_five_years: eligible_years.min(FIRST_TIER_YEARS),
        additional_years: eligible_years.saturating_sub(FIRST_TIER_YEARS),
    }
}

/// Computes the unrounded monetary contribution of one tier.
///
/// The rate is expressed in days of salary per year of service, so the
/// amount is `years * total_salary * rate / 365`. The 365 divisor is a
/// fixed constant of the rule set, independent of leap years.
pub fn tier_amount(years: u32, total_salary: Decimal, rate: Decimal) -> Decimal {
    Decimal::from(years) * total_salary * rate / Decimal::from(super::DAYS_PER_YEAR)
}
