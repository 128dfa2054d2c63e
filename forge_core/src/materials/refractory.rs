//! Refractory and insulation materials.
//!
//! The castable is Kast-O-Lite 30 LI, sold in 55 lb bags. The wall and
//! ceiling lining is 2" ceramic fiber blanket; the floor and the sliding
//! doors are insulating fire brick (IFB).

use serde::Serialize;

/// A bagged castable refractory product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CastableRefractory {
    /// Trade name
    pub name: &'static str,
    /// Cured density (lb/ft³)
    pub density_lb_per_cf: f64,
    /// Bag size (lb)
    pub bag_size_lb: f64,
    /// Street price per bag (USD)
    pub cost_per_bag_usd: f64,
}

impl CastableRefractory {
    /// Weight of a given material volume in pounds
    pub fn weight_lb(&self, volume_cf: f64) -> f64 {
        volume_cf * self.density_lb_per_cf
    }

    /// Number of (fractional) bags for a given weight
    pub fn bags_for(&self, weight_lb: f64) -> f64 {
        weight_lb / self.bag_size_lb
    }
}

/// Kast-O-Lite 30 LI, the castable used for the shell estimate and burner head.
pub const KAST_O_LITE_30: CastableRefractory = CastableRefractory {
    name: "Kast-O-Lite 30 LI",
    density_lb_per_cf: 92.0,
    bag_size_lb: 55.0,
    cost_per_bag_usd: 110.0,
};

/// Ceramic fiber blanket thickness (in)
pub const CERAMIC_BLANKET_THICKNESS_IN: f64 = 2.0;

/// Floor area one IFB is counted against (in²).
///
/// A 9" x 4.5" brick is 40.5 in², but the floor estimate uses a flat 72 in²
/// per brick.
pub const IFB_FOOTPRINT_SQ_IN: f64 = 72.0;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weight_and_bags() {
        // One cubic foot weighs 92 lb, 92/55 = 1.6727 bags
        let weight = KAST_O_LITE_30.weight_lb(1.0);
        assert_relative_eq!(weight, 92.0);
        assert_relative_eq!(KAST_O_LITE_30.bags_for(weight), 1.672_727, epsilon = 1e-6);
    }
}
