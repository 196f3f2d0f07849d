//! Configuration types for gratuity calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The defaults encode the
//! standard Article 132 rule set; a deployment may override any of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The resignation penalty multiplier bands, keyed by total service days.
///
/// The penalty applies only to an employee who resigns under a limited-term
/// contract; the band is selected by comparing total service days against
/// whole-year thresholds (365, 1095, 1826 days).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResignationPenaltyBands {
    /// Multiplier for less than one year of service.
    pub less_than_one_year: Decimal,
    /// Multiplier for one to less than three years of service.
    pub less_than_three_years: Decimal,
    /// Multiplier for three to less than five years of service.
    pub less_than_five_years: Decimal,
    /// Multiplier for five or more years of service.
    pub five_years_or_more: Decimal,
}

impl Default for ResignationPenaltyBands {
    fn default() -> Self {
        Self {
            less_than_one_year: Decimal::ZERO,
            less_than_three_years: Decimal::new(33, 2),
            less_than_five_years: Decimal::new(66, 2),
            five_years_or_more: Decimal::ONE,
        }
    }
}

/// The rule parameters driving a gratuity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRules {
    /// Minimum total service days for gratuity eligibility.
    pub minimum_service_days: i64,
    /// Accrual rate in days of salary per year, for years one to five.
    pub first_five_years_rate: Decimal,
    /// Accrual rate in days of salary per year, for years beyond five.
    pub additional_years_rate: Decimal,
    /// Penalty multipliers for resignation under a limited contract.
    pub resignation_penalty: ResignationPenaltyBands,
}

impl Default for CalculationRules {
    fn default() -> Self {
        Self {
            minimum_service_days: 365,
            first_five_years_rate: Decimal::from(21),
            additional_years_rate: Decimal::from(30),
            resignation_penalty: ResignationPenaltyBands::default(),
        }
    }
}

/// A termination type option as presented to calculator clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationTypeOption {
    /// The wire-format identifier (e.g. "resignation").
    pub value: String,
    /// English display label.
    pub label: String,
    /// Arabic display label.
    pub label_ar: String,
}

/// A contract type option as presented to calculator clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTypeOption {
    /// True for an unlimited-term contract.
    pub value: bool,
    /// English display label.
    pub label: String,
    /// Arabic display label.
    pub label_ar: String,
}

/// The complete configuration served to clients and injected into the
/// engine: calculation rules plus the valid input enumerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EosbConfig {
    /// The rule parameters for the calculation.
    pub calculation_rules: CalculationRules,
    /// The valid termination types with display labels.
    pub termination_types: Vec<TerminationTypeOption>,
    /// The valid contract types with display labels.
    pub contract_types: Vec<ContractTypeOption>,
}

impl Default for EosbConfig {
    fn default() -> Self {
        let option = |value: &str, label: &str, label_ar: &str| TerminationTypeOption {
            value: value.to_string(),
            label: label.to_string(),
            label_ar: label_ar.to_string(),
        };

        Self {
            calculation_rules: CalculationRules::default(),
            termination_types: vec![
                option("resignation", "Resignation", "استقالة"),
                option("termination", "Termination", "إنهاء الخدمة"),
                option("retirement", "Retirement", "تقاعد"),
                option("death", "Death", "وفاة"),
                option("disability", "Disability", "عجز"),
            ],
            contract_types: vec![
                ContractTypeOption {
                    value: true,
                    label: "Unlimited Contract".to_string(),
                    label_ar: "عقد غير محدد المدة".to_string(),
                },
                ContractTypeOption {
                    value: false,
                    label: "Limited Contract".to_string(),
                    label_ar: "عقد محدد المدة".to_string(),
                },
            ],
        }
    }
}
