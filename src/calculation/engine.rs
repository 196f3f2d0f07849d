//! The gratuity engine.
//!
//! This module orchestrates a full calculation: service period
//! decomposition, the eligibility gate, tiered accrual, resignation
//! penalty adjustment, and final rounding. The engine is a pure,
//! synchronous, stateless computation — rules are injected per call and
//! nothing is shared between invocations.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CalculationRules;
use crate::error::EngineResult;
use crate::models::{EmployeeInput, GratuityBreakdown, GratuityResult, TierBreakdown};

use super::eligibility::{check_eligibility, ineligibility_reason};
use super::resignation_penalty::penalty_multiplier;
use super::service_period::decompose;
use super::tiered_accrual::{split_tier_years, tier_amount};

/// The fixed days-per-year divisor of the accrual formula.
///
/// This is a constant of the rule set, not a calendar approximation; leap
/// years affect `total_days` but never this divisor.
pub const DAYS_PER_YEAR: u32 = 365;

/// Rounds a monetary amount to the nearest whole currency unit, with
/// midpoints rounding away from zero.
pub fn round_to_whole_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the end-of-service gratuity for one employee.
///
/// Steps, in order:
/// 1. Validate the input fields.
/// 2. Decompose the employment interval into a calendar-aware service
///    period.
/// 3. Eligibility gate: below the minimum service days the result is
///    ineligible with a zero amount and a uniform zeroed breakdown whose
///    rate fields still carry the configured constants.
/// 4. Tiered accrual over whole years only: `min(years, 5)` at the
///    first-tier rate, the remainder at the second-tier rate, each tier
///    contributing `years * total_salary * rate / 365`.
/// 5. Resignation penalty: for resignation under a limited contract, the
///    band multiplier selected by `total_days` scales the combined
///    pre-rounded total.
/// 6. Rounding: the final amount and each unpenalized tier amount round to
///    the nearest whole unit. When a penalty applies the breakdown is an
///    explanatory approximation and does not sum to the final amount.
///
/// Ineligibility is a normal result, never an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError) for a
/// non-positive salary or a last working day not after the joining date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use eosb_engine::calculation::calculate_gratuity;
/// use eosb_engine::config::CalculationRules;
/// use eosb_engine::models::{EmployeeInput, TerminationType};
/// use rust_decimal::Decimal;
///
/// let input = EmployeeInput {
///     basic_salary: Decimal::from(10000),
///     termination_type: TerminationType::Termination,
///     is_unlimited_contract: true,
///     joining_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
///     last_working_day: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
///
/// let result = calculate_gratuity(&input, &CalculationRules::default()).unwrap();
/// assert!(result.is_eligible);
/// assert_eq!(result.gratuity_amount, Decimal::from(2877));
/// ```
pub fn calculate_gratuity(
    input: &EmployeeInput,
    rules: &CalculationRules,
) -> EngineResult<GratuityResult> {
    input.validate()?;

    let period = decompose(input.joining_date, input.last_working_day);

    // Single-component salary model: total salary equals basic salary.
    let total_salary = input.basic_salary;

    if !check_eligibility(period.total_days, rules) {
        return Ok(GratuityResult {
            is_eligible: false,
            reason: Some(ineligibility_reason(rules)),
            total_service_years: period.years,
            total_service_months: period.months,
            total_service_days: period.days,
            basic_salary_amount: input.basic_salary,
            total_salary,
            eligible_years: 0,
            gratuity_amount: Decimal::ZERO,
            breakdown: GratuityBreakdown {
                first_five_years: TierBreakdown {
                    years: 0,
                    rate: rules.first_five_years_rate,
                    amount: Decimal::ZERO,
                },
                additional_years: TierBreakdown {
                    years: 0,
                    rate: rules.additional_years_rate,
                    amount: Decimal::ZERO,
                },
            },
        });
    }

    let eligible_years = period.years;
    let split = split_tier_years(eligible_years);

    let first_five_amount = tier_amount(
        split.first_five_years,
        total_salary,
        rules.first_five_years_rate,
    );
    let additional_amount = tier_amount(
        split.additional_years,
        total_salary,
        rules.additional_years_rate,
    );

    // The penalty scales the combined pre-rounded total, while the
    // displayed tier amounts stay unpenalized.
    let multiplier = penalty_multiplier(input, period.total_days, &rules.resignation_penalty);
    let gratuity_amount = round_to_whole_unit((first_five_amount + additional_amount) * multiplier);

    Ok(GratuityResult {
        is_eligible: true,
        reason: None,
        total_service_years: period.years,
        total_service_months: period.months,
        total_service_days: period.days,
        basic_salary_amount: input.basic_salary,
        total_salary,
        eligible_years,
        gratuity_amount,
        breakdown: GratuityBreakdown {
            first_five_years: TierBreakdown {
                years: split.first_five_years,
                rate: rules.first_five_years_rate,
                amount: round_to_whole_unit(first_five_amount),
            },
            additional_years: TierBreakdown {
                years: split.additional_years,
                rate: rules.additional_years_rate,
                amount: round_to_whole_unit(additional_amount),
            },
        },
    })
}
