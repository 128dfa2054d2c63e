//! # Blower Sizing
//!
//! Required airflow is the raw port count plus 20%, recommended airflow adds
//! a further 25% on top of the rounded requirement. Static pressure is a
//! two-step choice on chamber volume.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::burner::raw_hole_count;
use crate::units::round_count;

/// Margin over the raw coverage ratio
pub const CFM_MARGIN: f64 = 1.2;

/// Safety factor on top of the required airflow
pub const CFM_SAFETY_FACTOR: f64 = 1.25;

/// Chambers at or above this volume (ci) need the high-pressure blower
pub const HIGH_PRESSURE_VOLUME_CI: f64 = 500.0;

/// Blower static pressure rating, inches of water column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaticPressure {
    /// 1.5" WC, chambers under 500 ci
    #[serde(rename = "1.5")]
    Low,
    /// 3.0" WC, chambers of 500 ci and up
    #[serde(rename = "3.0")]
    High,
}

impl StaticPressure {
    /// Pick the rating for a chamber volume. 500 ci exactly is `High`.
    pub fn for_volume(internal_volume_ci: f64) -> Self {
        if internal_volume_ci < HIGH_PRESSURE_VOLUME_CI {
            StaticPressure::Low
        } else {
            StaticPressure::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StaticPressure::Low => "1.5",
            StaticPressure::High => "3.0",
        }
    }
}

impl fmt::Display for StaticPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blower requirements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Airflow {
    pub cfm_required: u32,
    pub cfm_recommended: u32,
    pub static_pressure: StaticPressure,
}

/// Size the blower for a chamber volume.
pub fn calculate(internal_volume_ci: f64) -> Airflow {
    let cfm_required = round_count(raw_hole_count(internal_volume_ci) * CFM_MARGIN);
    let cfm_recommended = round_count(cfm_required as f64 * CFM_SAFETY_FACTOR);

    Airflow {
        cfm_required,
        cfm_recommended,
        static_pressure: StaticPressure::for_volume(internal_volume_ci),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chamber_airflow() {
        // 28 * 1.2 = 33.6 -> 34, 34 * 1.25 = 42.5 -> 43
        let airflow = calculate(504.0);
        assert_eq!(airflow.cfm_required, 34);
        assert_eq!(airflow.cfm_recommended, 43);
        assert_eq!(airflow.static_pressure, StaticPressure::High);
    }

    #[test]
    fn test_static_pressure_step() {
        assert_eq!(StaticPressure::for_volume(499.99), StaticPressure::Low);
        assert_eq!(StaticPressure::for_volume(500.0), StaticPressure::High);
        assert_eq!(StaticPressure::for_volume(5000.0), StaticPressure::High);
    }

    #[test]
    fn test_static_pressure_serializes_as_rating() {
        assert_eq!(serde_json::to_string(&StaticPressure::Low).unwrap(), "\"1.5\"");
        assert_eq!(serde_json::to_string(&StaticPressure::High).unwrap(), "\"3.0\"");
        let parsed: StaticPressure = serde_json::from_str("\"3.0\"").unwrap();
        assert_eq!(parsed, StaticPressure::High);
        assert_eq!(StaticPressure::Low.to_string(), "1.5");
    }

    #[test]
    fn test_airflow_ignores_port_rounding() {
        // 54 ci: the burner builds 12 ports but airflow uses 3 raw ports
        let airflow = calculate(54.0);
        assert_eq!(airflow.cfm_required, 4);
        assert_eq!(airflow.cfm_recommended, 5);
        assert_eq!(airflow.static_pressure, StaticPressure::Low);
    }
}
