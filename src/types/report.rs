use crate::types::config::BaselineMetrics;
use serde::Serialize;

/// Outcome of scoring a single reading. Score is clamped to [0, 100] and the
/// carbon figure is rounded to 2 decimals by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub estimated_carbon_kg: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    pub selected: Vec<String>,
    pub total_impact_percent: u32,
    pub relative: RelativeImpact,
    pub baseline: BaselineMetrics,
    pub projected: ProjectedMetrics,
}

/// Percentage reductions per metric, relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelativeImpact {
    pub energy: f64,
    pub water: f64,
    pub cost: f64,
    pub emissions: f64,
}

/// Projected monthly figures after the selected policies apply, rounded to
/// whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedMetrics {
    pub energy: i64,
    pub water: i64,
    pub cost: i64,
    pub emissions: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommunityImpact {
    pub households: u32,
    pub total_electricity: i64,
    pub savings: i64,
}
