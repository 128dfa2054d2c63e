//! # Volume & External Envelope
//!
//! The insulation wraps every wall, so width and height grow by twice the
//! insulation thickness. Width and height also carry a fixed 0.5" for the
//! 1/4" plate on each side; length carries 1.0" for the two end plates.
//! No rounding is applied.

use serde::{Deserialize, Serialize};

use crate::input::ChamberInput;
use crate::materials::PLATE_STOCK;

/// Plate on both sides, added to external width and height (in)
pub const FRAME_ALLOWANCE_IN: f64 = 2.0 * PLATE_STOCK.thickness_in;

/// End-plate allowance added to external length (in)
pub const END_PLATE_ALLOWANCE_IN: f64 = 1.0;

/// Internal volume and outside dimensions of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// w * h * l (ci)
    pub internal_volume_ci: f64,
    pub external_width_in: f64,
    pub external_height_in: f64,
    pub external_length_in: f64,
}

impl Envelope {
    /// Volume enclosed by the outer shell (ci)
    pub fn external_volume_ci(&self) -> f64 {
        self.external_width_in * self.external_height_in * self.external_length_in
    }

    /// Footprint of the shell floor (in²)
    pub fn floor_area_sq_in(&self) -> f64 {
        self.external_length_in * self.external_width_in
    }
}

/// Compute internal volume and the external envelope.
pub fn calculate(input: &ChamberInput) -> Envelope {
    Envelope {
        internal_volume_ci: input.volume_ci(),
        external_width_in: input.width_in + 2.0 * input.insulation_in + FRAME_ALLOWANCE_IN,
        external_height_in: input.height_in + 2.0 * input.insulation_in + FRAME_ALLOWANCE_IN,
        external_length_in: input.length_in + END_PLATE_ALLOWANCE_IN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DoorConfig;

    #[test]
    fn test_default_chamber_envelope() {
        let env = calculate(&ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly));
        assert_eq!(env.internal_volume_ci, 504.0);
        assert_eq!(env.external_width_in, 10.5);
        assert_eq!(env.external_height_in, 10.5);
        assert_eq!(env.external_length_in, 15.0);
        assert_eq!(env.external_volume_ci(), 1653.75);
    }

    #[test]
    fn test_non_square_chamber() {
        let env = calculate(&ChamberInput::new(4.0, 8.0, 20.0, 1.5, DoorConfig::FrontOnly));
        assert_eq!(env.internal_volume_ci, 640.0);
        assert_eq!(env.external_width_in, 7.5);
        assert_eq!(env.external_height_in, 11.5);
        assert_eq!(env.external_length_in, 21.0);
        assert_eq!(env.floor_area_sq_in(), 157.5);
    }

    #[test]
    fn test_frame_allowance_is_two_plates() {
        assert_eq!(FRAME_ALLOWANCE_IN, 0.5);
    }
}
