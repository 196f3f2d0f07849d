//! Resignation penalty selection.
//!
//! An employee who resigns before completing five years under a
//! limited-term contract forfeits part of the accrued gratuity. The
//! penalty is specific to that combination: any other termination type,
//! or an unlimited contract, keeps the full accrued amount.

use rust_decimal::Decimal;

use crate::config::ResignationPenaltyBands;
use crate::models::{EmployeeInput, TerminationType};

/// Days thresholds for the penalty bands: one, three, and five whole years.
/// Any five-calendar-year span crosses a leap day, so the five-year
/// threshold is 1826 days, not 5 * 365.
const ONE_YEAR_DAYS: i64 = 365;
const THREE_YEARS_DAYS: i64 = 3 * 365;
const FIVE_YEARS_DAYS: i64 = 1826;

/// Selects the penalty band multiplier for a given total service length.
///
/// Bands are keyed by `total_days` against whole-year thresholds:
/// under one year, under three years, under five years, and five years
/// or more.
pub fn select_penalty_band(total_days: i64, bands: &ResignationPenaltyBands) -> Decimal {
    if total_days < ONE_YEAR_DAYS {
        bands.less_than_one_year
    } else if total_days < THREE_YEARS_DAYS {
        bands.less_than_three_years
    } else if total_days < FIVE_YEARS_DAYS {
        bands.less_than_five_years
    } else {
        bands.five_years_or_more
    }
}

/// Returns the multiplier to apply to the accrued gratuity.
///
/// The penalty band applies only when the employee resigned under a
/// limited-term contract; every other case keeps the full amount
/// (multiplier of one).
pub fn penalty_multiplier(
    input: &EmployeeInput,
    total_days: i64,
    bands: &ResignationPenaltyBands,
) -> Decimal {
    let penalty_applies =
        input.termination_type == TerminationType::Resignation && !input.is_unlimited_contract;

    if penalty_applies {
        select_penalty_band(total_days, bands)
    } else {
        Decimal::ONE
    }
}
