//! Gratuity calculation result model.
//!
//! This module defines the structured result returned by the gratuity
//! engine, including the per-tier line-item breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The contribution of a single accrual tier to the gratuity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// The whole-year count falling in this tier.
    pub years: u32,
    /// The days-of-salary-per-year rate applied to this tier.
    pub rate: Decimal,
    /// The rounded monetary contribution of this tier alone, before any
    /// resignation penalty.
    pub amount: Decimal,
}

/// Line-item breakdown of the gratuity by accrual tier.
///
/// The tier amounts are rounded from the *unpenalized* tier subtotals while
/// any resignation penalty is applied to the combined pre-rounded total, so
/// the breakdown is an explanatory approximation of tier contribution — it
/// does not sum exactly to `gratuity_amount` when a penalty applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratuityBreakdown {
    /// Accrual for service years one through five.
    pub first_five_years: TierBreakdown,
    /// Accrual for service years beyond the fifth.
    pub additional_years: TierBreakdown,
}

/// The structured result of a gratuity calculation.
///
/// Field names serialize in camelCase to match the HTTP contract. An
/// ineligible employee still receives a full result with a uniform
/// breakdown schema (tier rates populated, amounts zero) and a
/// human-readable `reason`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratuityResult {
    /// Whether the employee meets the minimum service requirement.
    pub is_eligible: bool,
    /// Human-readable ineligibility cause; present only when
    /// `is_eligible` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whole calendar years of service.
    pub total_service_years: u32,
    /// Whole calendar months beyond the last whole year.
    pub total_service_months: u32,
    /// Remaining days beyond the last whole month.
    pub total_service_days: u32,
    /// Echo of the input basic salary.
    pub basic_salary_amount: Decimal,
    /// The salary base used for accrual. Currently equals
    /// `basic_salary_amount`; extension point for allowances.
    pub total_salary: Decimal,
    /// Whole years counted toward accrual (partial final year excluded).
    pub eligible_years: u32,
    /// The final rounded gratuity amount in whole currency units.
    pub gratuity_amount: Decimal,
    /// Per-tier line-item breakdown.
    pub breakdown: GratuityBreakdown,
}
