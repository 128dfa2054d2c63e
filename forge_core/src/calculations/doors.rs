//! Sliding door sizing, proportional to the chamber opening.

use serde::{Deserialize, Serialize};

use crate::input::{ChamberInput, DoorConfig};
use crate::units::round_to;

/// Front door width and height as a fraction of the chamber
pub const FRONT_DOOR_RATIO: f64 = 0.85;
/// Rear door width as a fraction of chamber width
pub const REAR_DOOR_WIDTH_RATIO: f64 = 0.70;
/// Rear door height as a fraction of chamber height
pub const REAR_DOOR_HEIGHT_RATIO: f64 = 0.75;

/// Door openings (in). Rear values are 0 unless the chamber has a rear door.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSizing {
    pub front_door_width_in: f64,
    pub front_door_height_in: f64,
    pub rear_door_width_in: f64,
    pub rear_door_height_in: f64,
}

impl DoorSizing {
    pub fn has_rear_door(&self) -> bool {
        self.rear_door_width_in > 0.0 && self.rear_door_height_in > 0.0
    }
}

pub fn calculate(input: &ChamberInput) -> DoorSizing {
    let (rear_door_width_in, rear_door_height_in) = match input.door_config {
        DoorConfig::FrontAndRear => (
            round_to(input.width_in * REAR_DOOR_WIDTH_RATIO, 1),
            round_to(input.height_in * REAR_DOOR_HEIGHT_RATIO, 1),
        ),
        DoorConfig::FrontOnly | DoorConfig::SideLoading => (0.0, 0.0),
    };

    DoorSizing {
        front_door_width_in: round_to(input.width_in * FRONT_DOOR_RATIO, 1),
        front_door_height_in: round_to(input.height_in * FRONT_DOOR_RATIO, 1),
        rear_door_width_in,
        rear_door_height_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_door_only() {
        let doors = calculate(&ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly));
        assert_eq!(doors.front_door_width_in, 5.1);
        assert_eq!(doors.front_door_height_in, 5.1);
        assert_eq!(doors.rear_door_width_in, 0.0);
        assert_eq!(doors.rear_door_height_in, 0.0);
        assert!(!doors.has_rear_door());
    }

    #[test]
    fn test_front_and_rear() {
        let doors = calculate(&ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontAndRear));
        assert_eq!(doors.rear_door_width_in, 4.2);
        assert_eq!(doors.rear_door_height_in, 4.5);
        assert!(doors.has_rear_door());
    }

    #[test]
    fn test_side_loading_has_no_rear_door() {
        let side = calculate(&ChamberInput::new(8.0, 4.0, 18.0, 2.0, DoorConfig::SideLoading));
        let front = calculate(&ChamberInput::new(8.0, 4.0, 18.0, 2.0, DoorConfig::FrontOnly));
        assert_eq!(side, front);
        assert_eq!(side.front_door_width_in, 6.8);
        assert_eq!(side.front_door_height_in, 3.4);
    }
}
