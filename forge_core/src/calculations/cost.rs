//! Cost and heat-load estimates.

use serde::{Deserialize, Serialize};

use crate::materials::KAST_O_LITE_30;
use crate::units::round_to;

/// Fixed materials outlay besides refractory: blower, fittings, hardware (USD)
pub const BASE_MATERIALS_COST_USD: f64 = 250.0;

/// Burner output needed per cubic inch of chamber
pub const BTU_PER_CUBIC_INCH: f64 = 450.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub btu_required: u64,
    /// USD, 2 decimals
    pub estimated_cost_usd: f64,
}

/// Heat load for a chamber volume (BTU/hr)
pub fn btu_required(internal_volume_ci: f64) -> u64 {
    (internal_volume_ci * BTU_PER_CUBIC_INCH).round() as u64
}

/// Base materials plus the (already rounded) refractory bag count.
pub fn estimated_cost_usd(refractory_bags: f64) -> f64 {
    round_to(
        BASE_MATERIALS_COST_USD + refractory_bags * KAST_O_LITE_30.cost_per_bag_usd,
        2,
    )
}

pub fn calculate(internal_volume_ci: f64, refractory_bags: f64) -> CostEstimate {
    CostEstimate {
        btu_required: btu_required(internal_volume_ci),
        estimated_cost_usd: estimated_cost_usd(refractory_bags),
    }
}
