use crate::types::config::CommunityConfig;
use crate::types::report::CommunityImpact;

/// Applies a policy-strength percentage to the fixed community baseline.
///
/// The strength is deliberately not range-checked: values above 100 or below
/// 0 produce out-of-range but well-defined results, matching the display
/// contract this models.
pub fn simulate_community(strength_percent: f64, config: &CommunityConfig) -> CommunityImpact {
    let reduced = config.base_electricity * (1.0 - strength_percent / 100.0);
    let households = f64::from(config.households);
    CommunityImpact {
        households: config.households,
        total_electricity: (reduced * households).round() as i64,
        savings: ((config.base_electricity - reduced) * households).round() as i64,
    }
}
