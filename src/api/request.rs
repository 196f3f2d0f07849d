//! Request types for the EOSB Calculation Engine API.
//!
//! This module defines the JSON request structure for the
//! `/api/eosb/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeInput, TerminationType};

/// Request body for the `/api/eosb/calculate` endpoint.
///
/// Field names are camelCase on the wire, matching the calculator
/// frontend's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// The employee's monthly basic salary (AED).
    pub basic_salary: Decimal,
    /// Why the employment ended.
    pub termination_type: TerminationType,
    /// True for an unlimited-term contract.
    pub is_unlimited_contract: bool,
    /// The first day of employment.
    pub joining_date: NaiveDate,
    /// The last working day.
    pub last_working_day: NaiveDate,
}

impl From<CalculateRequest> for EmployeeInput {
    fn from(req: CalculateRequest) -> Self {
        EmployeeInput {
            basic_salary: req.basic_salary,
            termination_type: req.termination_type,
            is_unlimited_contract: req.is_unlimited_contract,
            joining_date: req.joining_date,
            last_working_day: req.last_working_day,
        }
    }
}
