use crate::types::config::{BaselineMetrics, PolicyEntry};
use crate::types::report::{ProjectedMetrics, RelativeImpact};
use clap::ValueEnum;

/// Sums the catalog impact of every selected policy. Unknown identifiers
/// contribute 0 rather than erroring; the selection is display-driven and a
/// stale id should not abort the simulation.
pub fn policy_impact(selected: &[String], catalog: &[PolicyEntry]) -> u32 {
    selected
        .iter()
        .map(|id| {
            catalog
                .iter()
                .find(|policy| policy.id == *id)
                .map_or(0, |policy| policy.impact)
        })
        .sum()
}

/// Per-metric percentage reductions. Energy and emissions track the combined
/// impact directly; water and cost respond less strongly.
pub fn relative_impact(impact_percent: u32) -> RelativeImpact {
    let impact = f64::from(impact_percent);
    RelativeImpact {
        energy: impact,
        water: impact * 0.7,
        cost: impact * 0.8,
        emissions: impact,
    }
}

/// Projects baseline figures under the combined impact. Each metric uses its
/// own divisor (energy and emissions 100, water 150, cost 120); results are
/// rounded to whole units.
pub fn project_baseline(baseline: &BaselineMetrics, impact_percent: u32) -> ProjectedMetrics {
    let impact = f64::from(impact_percent);
    let scale = |value: f64, divisor: f64| (value * (1.0 - impact / divisor)).round() as i64;
    ProjectedMetrics {
        energy: scale(baseline.energy, 100.0),
        water: scale(baseline.water, 150.0),
        cost: scale(baseline.cost, 120.0),
        emissions: scale(baseline.emissions, 100.0),
    }
}

/// Named interventions that raise an already-computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyBoost {
    Solar,
    PublicTransport,
    Recycling,
}

impl PolicyBoost {
    fn points(self) -> u32 {
        match self {
            PolicyBoost::Solar => 10,
            PolicyBoost::PublicTransport => 8,
            PolicyBoost::Recycling => 6,
        }
    }
}

/// Adds the boost's fixed points to a base score, capped at 100.
pub fn apply_policy_boost(base_score: u32, boost: PolicyBoost) -> u32 {
    (base_score + boost.points()).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::EngineConfig;
    use approx::assert_relative_eq;

    fn select(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn impact_sums_selected_policies() {
        let cfg = EngineConfig::default();
        let impact = policy_impact(&select(&["solar-subsidy", "ev-incentive"]), &cfg.policies);
        assert_eq!(impact, 30);
    }

    #[test]
    fn impact_of_empty_selection_is_zero() {
        let cfg = EngineConfig::default();
        assert_eq!(policy_impact(&[], &cfg.policies), 0);
    }

    #[test]
    fn unknown_ids_contribute_nothing() {
        let cfg = EngineConfig::default();
        let impact = policy_impact(
            &select(&["solar-subsidy", "fusion-reactor", "ev-incentive"]),
            &cfg.policies,
        );
        assert_eq!(impact, 30);
    }

    #[test]
    fn full_catalog_sums_to_one_hundred() {
        let cfg = EngineConfig::default();
        let all = cfg.policies.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(policy_impact(&all, &cfg.policies), 100);
    }

    #[test]
    fn relative_impact_scales_water_and_cost() {
        let relative = relative_impact(30);
        assert_relative_eq!(relative.energy, 30.0);
        assert_relative_eq!(relative.water, 21.0);
        assert_relative_eq!(relative.cost, 24.0);
        assert_relative_eq!(relative.emissions, 30.0);
    }

    #[test]
    fn projection_uses_per_metric_divisors() {
        let baseline = BaselineMetrics::default();
        let projected = project_baseline(&baseline, 30);
        assert_eq!(projected.energy, 875); // 1250 * 0.70
        assert_eq!(projected.water, 6720); // 8400 * (1 - 30/150)
        assert_eq!(projected.cost, 4050); // 5400 * (1 - 30/120)
        assert_eq!(projected.emissions, 329); // 470 * 0.70
    }

    #[test]
    fn zero_impact_projection_is_the_baseline() {
        let baseline = BaselineMetrics::default();
        let projected = project_baseline(&baseline, 0);
        assert_eq!(projected.energy, 1250);
        assert_eq!(projected.water, 8400);
        assert_eq!(projected.cost, 5400);
        assert_eq!(projected.emissions, 470);
    }

    #[test]
    fn boost_adds_points_and_caps_at_one_hundred() {
        assert_eq!(apply_policy_boost(80, PolicyBoost::Solar), 90);
        assert_eq!(apply_policy_boost(80, PolicyBoost::PublicTransport), 88);
        assert_eq!(apply_policy_boost(80, PolicyBoost::Recycling), 86);
        assert_eq!(apply_policy_boost(95, PolicyBoost::Solar), 100);
        assert_eq!(apply_policy_boost(100, PolicyBoost::Recycling), 100);
    }
}
