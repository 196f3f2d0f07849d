//! End-of-Service Benefits (EOSB) Calculation Engine
//!
//! This crate calculates the end-of-service gratuity owed to an employee
//! under UAE Labour Law Article 132, given their basic salary, contract
//! type, termination reason, and employment dates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
