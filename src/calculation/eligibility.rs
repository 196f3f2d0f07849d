//! Minimum-service eligibility gate.

use crate::config::CalculationRules;

/// Returns true if the total service days meet the configured minimum.
///
/// The gate compares the exact `total_days` count, not the years/months/days
/// decomposition, so an employee one day short of the threshold is
/// ineligible regardless of how the calendar decomposition reads.
pub fn check_eligibility(total_days: i64, rules: &CalculationRules) -> bool {
    total_days >= rules.minimum_service_days
}

/// The fixed human-readable reason attached to an ineligible result.
pub fn ineligibility_reason(rules: &CalculationRules) -> String {
    format!(
        "Minimum service period of {} days not met",
        rules.minimum_service_days
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_ineligible() {
        let rules = CalculationRules::default();
        assert!(!check_eligibility(364, &rules));
        assert!(!check_eligibility(0, &rules));
    }

    #[test]
    fn test_at_threshold_is_eligible() {
        let rules = CalculationRules::default();
        assert!(check_eligibility(365, &rules));
    }

    #[test]
    fn test_above_threshold_is_eligible() {
        let rules = CalculationRules::default();
        assert!(check_eligibility(1826, &rules));
    }

    #[test]
    fn test_custom_minimum_is_respected() {
        let rules = CalculationRules {
            minimum_service_days: 180,
            ..CalculationRules::default()
        };
        assert!(check_eligibility(183, &rules));
        assert!(!check_eligibility(179, &rules));
    }

    #[test]
    fn test_reason_names_the_threshold() {
        let rules = CalculationRules::default();
        assert_eq!(
            ineligibility_reason(&rules),
            "Minimum service period of 365 days not met"
        );
    }
}
