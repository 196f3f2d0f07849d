//! Service period model.

use serde::{Deserialize, Serialize};

/// A calendar-aware decomposition of an employment interval.
///
/// `years`, `months` and `days` form a greedy calendar decomposition of the
/// interval: walking forward from the start date by `years` calendar years,
/// then `months` calendar months, then `days` days lands exactly on the end
/// date. `total_days` is the exact whole-day count between the two dates,
/// independent of the decomposition, and is the authoritative value for
/// eligibility and penalty thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriod {
    /// Whole calendar years of service.
    pub years: u32,
    /// Whole calendar months beyond the last whole year.
    pub months: u32,
    /// Remaining days beyond the last whole month.
    pub days: u32,
    /// Exact whole-day count between joining date and last working day.
    pub total_days: i64,
}

impl ServicePeriod {
    /// A zero-length service period.
    pub const ZERO: ServicePeriod = ServicePeriod {
        years: 0,
        months: 0,
        days: 0,
        total_days: 0,
    };
}
