use crate::error::AsosError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bike,
    Bus,
    Car,
}

/// One self-reported set of utility readings. Transient; constructed per
/// invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReading {
    pub electricity_kwh: f64,
    pub water_liters: f64,
    #[serde(default)]
    pub waste_kg: f64,
    pub transport: TransportMode,
}

impl UsageReading {
    /// Caller-side validation. The scoring engine itself is total and never
    /// errors, so non-finite or negative readings must be rejected before it
    /// is invoked.
    pub fn validate(&self) -> Result<(), AsosError> {
        for (field, value) in [
            ("electricity_kwh", self.electricity_kwh),
            ("water_liters", self.water_liters),
            ("waste_kg", self.waste_kg),
        ] {
            if !value.is_finite() {
                return Err(AsosError::InvalidInput(format!(
                    "{field} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(AsosError::InvalidInput(format!(
                    "{field} must not be negative (found {value})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(electricity: f64, water: f64, waste: f64) -> UsageReading {
        UsageReading {
            electricity_kwh: electricity,
            water_liters: water,
            waste_kg: waste,
            transport: TransportMode::Bike,
        }
    }

    #[test]
    fn validate_accepts_zero_readings() {
        assert!(reading(0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_water() {
        let err = reading(10.0, -1.0, 0.0)
            .validate()
            .expect_err("negative water should fail");
        assert!(err.to_string().contains("water_liters"));
    }

    #[test]
    fn validate_rejects_nan_and_infinite_electricity() {
        assert!(reading(f64::NAN, 0.0, 0.0).validate().is_err());
        assert!(reading(f64::INFINITY, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn transport_mode_parses_lowercase_names() {
        let mode: TransportMode =
            serde_json::from_str("\"car\"").expect("lowercase name should parse");
        assert_eq!(mode, TransportMode::Car);
    }
}
