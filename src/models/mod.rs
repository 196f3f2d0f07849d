//! Domain models for the EOSB Calculation Engine.
//!
//! All entities here are value objects: constructed fresh per calculation,
//! immutable after construction, and discarded once the caller has consumed
//! the result. Nothing is persisted or shared mutably.

mod employee;
mod gratuity_result;
mod service_period;

pub use employee::{EmployeeInput, TerminationType};
pub use gratuity_result::{GratuityBreakdown, GratuityResult, TierBreakdown};
pub use service_period::ServicePeriod;
