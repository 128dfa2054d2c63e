//! # Refractory & Insulation Quantities
//!
//! ## Castable
//!
//! The shell estimate treats everything between the external envelope and
//! the chamber as castable:
//!
//! ```text
//! shell_ci  = ext_w * ext_h * ext_l - V
//! weight_lb = shell_ci / 1728 * 92
//! bags      = weight_lb / 55          (1 decimal)
//! ```
//!
//! ## Ceramic blanket
//!
//! Two side walls, the ceiling and both end walls, floor excluded:
//!
//! ```text
//! sq_ft = (ext_l*ext_h*2 + ext_l*ext_w + ext_w*ext_h*2) / 144   (1 decimal)
//! ```
//!
//! ## Insulating fire brick
//!
//! Floor bricks are counted at 72 in² each with a minimum of 2. Doors take 4
//! bricks for a front-only chamber and 6 otherwise.

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use crate::input::DoorConfig;
use crate::materials::{CastableRefractory, IFB_FOOTPRINT_SQ_IN, KAST_O_LITE_30};
use crate::units::{cubic_inches_to_cubic_feet, round_count, round_to, square_inches_to_square_feet};

/// Fewest floor bricks laid
pub const MIN_IFB_FLOOR_COUNT: u32 = 2;
/// Door bricks for a front-only chamber
pub const IFB_DOOR_COUNT_FRONT_ONLY: u32 = 4;
/// Door bricks for every other door arrangement
pub const IFB_DOOR_COUNT_OTHER: u32 = 6;

/// Refractory and insulation bill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefractoryQuantities {
    /// 55 lb bags of castable, 1 decimal
    pub refractory_bags: f64,
    /// Castable weight (lb), 1 decimal
    pub refractory_weight_lb: f64,
    /// 2" ceramic blanket (sq ft), 1 decimal
    pub ceramic_blanket_sqft: f64,
    pub ifb_floor_count: u32,
    pub ifb_door_count: u32,
}

impl RefractoryQuantities {
    pub fn ifb_total(&self) -> u32 {
        self.ifb_floor_count + self.ifb_door_count
    }
}

/// Material volume between the envelope and the chamber (ci)
pub fn shell_volume_ci(envelope: &Envelope) -> f64 {
    envelope.external_volume_ci() - envelope.internal_volume_ci
}

/// Blanket area for four walls and the ceiling (sq ft), unrounded
pub fn blanket_area_sqft(envelope: &Envelope) -> f64 {
    let l = envelope.external_length_in;
    let w = envelope.external_width_in;
    let h = envelope.external_height_in;
    square_inches_to_square_feet(l * h * 2.0 + l * w + w * h * 2.0)
}

pub fn calculate(envelope: &Envelope, door_config: DoorConfig) -> RefractoryQuantities {
    calculate_with(envelope, door_config, &KAST_O_LITE_30)
}

fn calculate_with(
    envelope: &Envelope,
    door_config: DoorConfig,
    castable: &CastableRefractory,
) -> RefractoryQuantities {
    let weight_lb = castable.weight_lb(cubic_inches_to_cubic_feet(shell_volume_ci(envelope)));
    let ifb_floor_count =
        MIN_IFB_FLOOR_COUNT.max(round_count(envelope.floor_area_sq_in() / IFB_FOOTPRINT_SQ_IN));
    let ifb_door_count = if door_config == DoorConfig::FrontOnly {
        IFB_DOOR_COUNT_FRONT_ONLY
    } else {
        IFB_DOOR_COUNT_OTHER
    };

    RefractoryQuantities {
        refractory_bags: round_to(castable.bags_for(weight_lb), 1),
        refractory_weight_lb: round_to(weight_lb, 1),
        ceramic_blanket_sqft: round_to(blanket_area_sqft(envelope), 1),
        ifb_floor_count,
        ifb_door_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_envelope() -> Envelope {
        Envelope {
            internal_volume_ci: 504.0,
            external_width_in: 10.5,
            external_height_in: 10.5,
            external_length_in: 15.0,
        }
    }

    #[test]
    fn test_default_chamber_quantities() {
        let env = default_envelope();
        assert_relative_eq!(shell_volume_ci(&env), 1149.75);

        let refractory = calculate(&env, DoorConfig::FrontOnly);
        // 1149.75 / 1728 * 92 = 61.213 lb -> 1.113 bags
        assert_eq!(refractory.refractory_weight_lb, 61.2);
        assert_eq!(refractory.refractory_bags, 1.1);
        // 693 / 144 = 4.8125
        assert_eq!(refractory.ceramic_blanket_sqft, 4.8);
        // 157.5 / 72 = 2.19
        assert_eq!(refractory.ifb_floor_count, 2);
        assert_eq!(refractory.ifb_door_count, 4);
        assert_eq!(refractory.ifb_total(), 6);
    }

    #[test]
    fn test_door_bricks_follow_door_config() {
        let env = default_envelope();
        assert_eq!(calculate(&env, DoorConfig::FrontAndRear).ifb_door_count, 6);
        assert_eq!(calculate(&env, DoorConfig::SideLoading).ifb_door_count, 6);
    }

    #[test]
    fn test_large_floor_brick_count() {
        let env = Envelope {
            internal_volume_ci: 12.0 * 12.0 * 36.0,
            external_width_in: 16.5,
            external_height_in: 16.5,
            external_length_in: 37.0,
        };
        // 37 * 16.5 = 610.5 / 72 = 8.48
        assert_eq!(calculate(&env, DoorConfig::FrontOnly).ifb_floor_count, 8);
    }

    #[test]
    fn test_denser_castable_needs_more_bags() {
        let heavy = CastableRefractory {
            name: "Dense castable",
            density_lb_per_cf: 140.0,
            bag_size_lb: 55.0,
            cost_per_bag_usd: 80.0,
        };
        let env = default_envelope();
        let light = calculate(&env, DoorConfig::FrontOnly);
        let dense = calculate_with(&env, DoorConfig::FrontOnly, &heavy);
        assert!(dense.refractory_bags > light.refractory_bags);
        assert_eq!(dense.ceramic_blanket_sqft, light.ceramic_blanket_sqft);
    }
}
