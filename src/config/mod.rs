//! Configuration for the EOSB Calculation Engine.
//!
//! Calculation rules and the input enumerations are externally-supplied
//! data, injected into the engine at call time — never implicit global
//! state. This module provides the strongly-typed configuration structures
//! and a YAML loader, plus a built-in default rule set matching Article 132.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculationRules, ContractTypeOption, EosbConfig, ResignationPenaltyBands,
    TerminationTypeOption,
};
