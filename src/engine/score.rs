use crate::types::config::EngineConfig;
use crate::types::reading::{TransportMode, UsageReading};
use crate::types::report::ScoreResult;

pub const ELECTRICITY_SUGGESTION: &str =
    "Reduce electricity usage by switching to LED lighting or solar panels.";
pub const WATER_SUGGESTION: &str = "Consider water-saving fixtures and shorter usage time.";
pub const TRANSPORT_SUGGESTION: &str = "Use public transport or carpool to reduce emissions.";
pub const WASTE_SUGGESTION: &str = "Reduce household waste by recycling and composting.";
pub const POSITIVE_SUGGESTION: &str = "Your sustainability habits are strong.";

/// Scores a single reading against the configured thresholds.
///
/// Deterministic and total: no validation happens here (see
/// [`UsageReading::validate`]), nothing is consulted beyond the arguments,
/// and the same input always produces the same output. The score starts at
/// 100 and only decreases; the lower bound is clamped at 0. Suggestions are
/// appended in fixed evaluation order (electricity, water, transport, waste),
/// with the positive-reinforcement message appended last when the final
/// score exceeds 80.
pub fn compute_score(reading: &UsageReading, config: &EngineConfig) -> ScoreResult {
    let mut score: i64 = 100;
    let mut carbon = reading.electricity_kwh * config.factors.electricity_kg_per_kwh;
    let mut suggestions = Vec::new();

    if reading.electricity_kwh > config.thresholds.electricity_kwh {
        score -= i64::from(config.deductions.electricity);
        suggestions.push(ELECTRICITY_SUGGESTION.to_string());
    }

    if reading.water_liters > config.thresholds.water_liters {
        score -= i64::from(config.deductions.water);
        suggestions.push(WATER_SUGGESTION.to_string());
    }

    match reading.transport {
        TransportMode::Car => {
            score -= i64::from(config.deductions.car);
            carbon += config.factors.transport.car;
            suggestions.push(TRANSPORT_SUGGESTION.to_string());
        }
        TransportMode::Bus => carbon += config.factors.transport.bus,
        TransportMode::Bike => carbon += config.factors.transport.bike,
    }

    carbon += reading.waste_kg * config.factors.waste_kg_per_kg;
    if reading.waste_kg > config.thresholds.waste_kg {
        score -= i64::from(config.deductions.waste);
        suggestions.push(WASTE_SUGGESTION.to_string());
    }

    let score = score.max(0) as u32;
    if score > 80 {
        suggestions.push(POSITIVE_SUGGESTION.to_string());
    }

    let result = ScoreResult {
        score,
        estimated_carbon_kg: round2(carbon),
        suggestions,
    };
    tracing::debug!(
        score = result.score,
        carbon = result.estimated_carbon_kg,
        "computed sustainability score"
    );
    result
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
