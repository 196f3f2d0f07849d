//! Employee input model and related types.
//!
//! This module defines the [`EmployeeInput`] struct and [`TerminationType`]
//! enum describing a single employee's end-of-service situation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The reason the employment contract ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// The employee resigned voluntarily.
    Resignation,
    /// The employer terminated the contract.
    Termination,
    /// The employee reached retirement.
    Retirement,
    /// The employee died in service.
    Death,
    /// The employee became unable to work due to disability.
    Disability,
}

impl TerminationType {
    /// Returns the wire-format identifier for this termination type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationType::Resignation => "resignation",
            TerminationType::Termination => "termination",
            TerminationType::Retirement => "retirement",
            TerminationType::Death => "death",
            TerminationType::Disability => "disability",
        }
    }
}

/// Caller-supplied input for a single gratuity calculation.
///
/// Immutable per calculation. Field names serialize in camelCase to match
/// the HTTP contract of the calculator service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    /// The employee's monthly basic salary in whole currency units (AED).
    pub basic_salary: Decimal,
    /// Why the employment ended.
    pub termination_type: TerminationType,
    /// True for an unlimited-term contract, false for a limited-term
    /// (fixed-duration) contract.
    pub is_unlimited_contract: bool,
    /// The first day of employment.
    pub joining_date: NaiveDate,
    /// The last working day. Must be after `joining_date`.
    pub last_working_day: NaiveDate,
}

impl EmployeeInput {
    /// Returns true if the employee resigned voluntarily.
    ///
    /// # Examples
    ///
    /// ```
    /// use eosb_engine::models::{EmployeeInput, TerminationType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let input = EmployeeInput {
    ///     basic_salary: Decimal::from(10000),
    ///     termination_type: TerminationType::Resignation,
    ///     is_unlimited_contract: false,
    ///     joining_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
    ///     last_working_day: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    /// };
    /// assert!(input.is_resignation());
    /// ```
    pub fn is_resignation(&self) -> bool {
        self.termination_type == TerminationType::Resignation
    }

    /// Validates the input fields.
    ///
    /// Checks that the basic salary is positive and that the last working
    /// day falls strictly after the joining date. A joining date in the
    /// future is checked at the API boundary, which has access to a clock;
    /// the core stays clock-free.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the violated field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.basic_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "basic_salary".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.last_working_day <= self.joining_date {
            return Err(EngineError::InvalidInput {
                field: "last_working_day".to_string(),
                message: "must be after the joining date".to_string(),
            });
        }

        Ok(())
    }
}
