use crate::error::AsosError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only constants table for the scoring engine. Every knob has a fixed
/// default; an `asos.toml` can override individual sections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub factors: EmissionFactors,
    pub thresholds: Thresholds,
    pub deductions: Deductions,
    pub community: CommunityConfig,
    pub baseline: BaselineMetrics,
    pub policies: Vec<PolicyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// kg CO2e emitted per kWh of electricity.
    pub electricity_kg_per_kwh: f64,
    /// kg CO2e emitted per kg of household waste.
    pub waste_kg_per_kg: f64,
    pub transport: TransportCarbon,
}

/// Flat per-mode carbon figures, not per-distance factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportCarbon {
    pub car: f64,
    pub bus: f64,
    pub bike: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub electricity_kwh: f64,
    pub water_liters: f64,
    pub waste_kg: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Deductions {
    pub electricity: u32,
    pub water: u32,
    pub car: u32,
    pub waste: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommunityConfig {
    pub households: u32,
    /// Baseline per-household electricity usage in units.
    pub base_electricity: f64,
}

/// Monthly baseline figures used for policy projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineMetrics {
    pub energy: f64,
    pub water: f64,
    pub cost: f64,
    pub emissions: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub id: String,
    pub name: String,
    /// Estimated reduction in percent attributed to this policy.
    pub impact: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            factors: EmissionFactors::default(),
            thresholds: Thresholds::default(),
            deductions: Deductions::default(),
            community: CommunityConfig::default(),
            baseline: BaselineMetrics::default(),
            policies: default_policy_catalog(),
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity_kg_per_kwh: 0.82,
            waste_kg_per_kg: 1.2,
            transport: TransportCarbon::default(),
        }
    }
}

impl Default for TransportCarbon {
    fn default() -> Self {
        Self {
            car: 50.0,
            bus: 15.0,
            bike: 5.0,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            electricity_kwh: 300.0,
            water_liters: 200.0,
            waste_kg: 5.0,
        }
    }
}

impl Default for Deductions {
    fn default() -> Self {
        Self {
            electricity: 20,
            water: 15,
            car: 25,
            waste: 10,
        }
    }
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            households: 50,
            base_electricity: 320.0,
        }
    }
}

impl Default for BaselineMetrics {
    fn default() -> Self {
        Self {
            energy: 1250.0,
            water: 8400.0,
            cost: 5400.0,
            emissions: 470.0,
        }
    }
}

fn default_policy_catalog() -> Vec<PolicyEntry> {
    [
        ("peak-pricing", "Peak Hour Pricing", 15),
        ("renewable", "Renewable Energy Mandate", 25),
        ("efficiency", "Energy Efficiency Standards", 18),
        ("water-limit", "Water Usage Limits", 12),
        ("ev-incentive", "EV Charging Incentives", 8),
        ("solar-subsidy", "Solar Panel Subsidies", 22),
    ]
    .into_iter()
    .map(|(id, name, impact)| PolicyEntry {
        id: id.to_string(),
        name: name.to_string(),
        impact,
    })
    .collect()
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), AsosError> {
        for (key, value) in [
            ("factors.electricity_kg_per_kwh", self.factors.electricity_kg_per_kwh),
            ("factors.waste_kg_per_kg", self.factors.waste_kg_per_kg),
            ("factors.transport.car", self.factors.transport.car),
            ("factors.transport.bus", self.factors.transport.bus),
            ("factors.transport.bike", self.factors.transport.bike),
            ("thresholds.electricity_kwh", self.thresholds.electricity_kwh),
            ("thresholds.water_liters", self.thresholds.water_liters),
            ("thresholds.waste_kg", self.thresholds.waste_kg),
            ("community.base_electricity", self.community.base_electricity),
            ("baseline.energy", self.baseline.energy),
            ("baseline.water", self.baseline.water),
            ("baseline.cost", self.baseline.cost),
            ("baseline.emissions", self.baseline.emissions),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AsosError::ConfigParse(format!(
                    "{key} must be a finite non-negative number (found {value})"
                )));
            }
        }

        if self.community.households == 0 {
            return Err(AsosError::ConfigParse(
                "community.households must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for policy in &self.policies {
            let id = policy.id.trim();
            if id.is_empty() {
                return Err(AsosError::ConfigParse(
                    "policies entries must have non-empty ids".to_string(),
                ));
            }
            if !seen.insert(id.to_string()) {
                return Err(AsosError::ConfigParse(format!(
                    "policies contains duplicate id: {id}"
                )));
            }
            if policy.impact > 100 {
                return Err(AsosError::ConfigParse(format!(
                    "policy '{id}' impact must be between 0 and 100 (found {})",
                    policy.impact
                )));
            }
        }

        Ok(())
    }

    pub fn policy(&self, id: &str) -> Option<&PolicyEntry> {
        self.policies.iter().find(|policy| policy.id == id)
    }
}
