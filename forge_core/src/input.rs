//! # Chamber Input
//!
//! The five user-supplied values the whole design derives from, plus the two
//! kinds of checks applied before calculating:
//!
//! - [`ChamberInput::check_precondition`] - hard check: every dimension must
//!   be a finite positive number. Failing it is an error.
//! - [`validate_ranges`] - advisory check against the recommended ranges.
//!   Failing it produces [`InputWarning`]s; the design is still computed.
//!
//! ## Example
//!
//! ```rust
//! use forge_core::input::{validate_ranges, ChamberInput, DoorConfig};
//!
//! let input = ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly);
//! assert!(input.check_precondition().is_ok());
//! assert!(validate_ranges(&input).is_empty());
//!
//! let tiny = ChamberInput::new(2.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly);
//! assert_eq!(validate_ranges(&tiny).len(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ForgeError, ForgeResult};

/// Recommended internal width range (in)
pub const WIDTH_RANGE: RecommendedRange = RecommendedRange::new(3.0, 12.0);
/// Recommended internal height range (in)
pub const HEIGHT_RANGE: RecommendedRange = RecommendedRange::new(3.0, 12.0);
/// Recommended internal length range (in)
pub const LENGTH_RANGE: RecommendedRange = RecommendedRange::new(6.0, 48.0);
/// Recommended insulation thickness range (in)
pub const INSULATION_RANGE: RecommendedRange = RecommendedRange::new(1.0, 3.0);

/// Below this chamber volume (ci) the chamber heats unevenly
pub const SMALL_CHAMBER_CI: f64 = 100.0;
/// Above this chamber volume (ci) one burner is not enough
pub const LARGE_CHAMBER_CI: f64 = 2000.0;

/// Door arrangement of the chamber.
///
/// `SideLoading` has no geometry of its own. Door sizing treats it like
/// `FrontOnly`; only the door brick count follows the non-front-only branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorConfig {
    /// Single sliding door at the front
    #[default]
    FrontOnly,
    /// Pass-through: front door plus a smaller rear door
    FrontAndRear,
    /// One end open for long stock
    SideLoading,
}

impl DoorConfig {
    pub const ALL: [DoorConfig; 3] = [
        DoorConfig::FrontOnly,
        DoorConfig::FrontAndRear,
        DoorConfig::SideLoading,
    ];

    /// Map the interactive menu number (1-3) to a door configuration
    pub fn from_menu_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(DoorConfig::FrontOnly),
            2 => Some(DoorConfig::FrontAndRear),
            3 => Some(DoorConfig::SideLoading),
            _ => None,
        }
    }

    /// Menu number shown by the interactive collector
    pub fn menu_choice(&self) -> u8 {
        match self {
            DoorConfig::FrontOnly => 1,
            DoorConfig::FrontAndRear => 2,
            DoorConfig::SideLoading => 3,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorConfig::FrontOnly => "Front door only",
            DoorConfig::FrontAndRear => "Front and rear doors",
            DoorConfig::SideLoading => "Side loading (one end open)",
        }
    }

    /// Whether a rear door is sized and built
    pub fn has_rear_door(&self) -> bool {
        matches!(self, DoorConfig::FrontAndRear)
    }
}

impl fmt::Display for DoorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DoorConfig {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "1" | "front" | "front_only" => Ok(DoorConfig::FrontOnly),
            "2" | "both" | "front_and_rear" | "front_rear" => Ok(DoorConfig::FrontAndRear),
            "3" | "side" | "side_loading" => Ok(DoorConfig::SideLoading),
            _ => Err(ForgeError::invalid_input(
                "door_config",
                s,
                "Expected front-only, front-and-rear or side-loading (or 1-3)",
            )),
        }
    }
}

/// Internal chamber dimensions and door arrangement.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_in": 6.0,
///   "height_in": 6.0,
///   "length_in": 14.0,
///   "insulation_in": 2.0,
///   "door_config": "front_only"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChamberInput {
    /// Internal chamber width (in)
    pub width_in: f64,
    /// Internal chamber height (in)
    pub height_in: f64,
    /// Internal chamber length (in)
    pub length_in: f64,
    /// Insulation thickness on each wall (in)
    pub insulation_in: f64,
    /// Door arrangement
    pub door_config: DoorConfig,
}

impl ChamberInput {
    pub fn new(
        width_in: f64,
        height_in: f64,
        length_in: f64,
        insulation_in: f64,
        door_config: DoorConfig,
    ) -> Self {
        ChamberInput {
            width_in,
            height_in,
            length_in,
            insulation_in,
            door_config,
        }
    }

    /// Internal chamber volume (ci)
    pub fn volume_ci(&self) -> f64 {
        self.width_in * self.height_in * self.length_in
    }

    /// Check the calculator precondition: every dimension finite and positive.
    pub fn check_precondition(&self) -> ForgeResult<()> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() {
                return Err(ForgeError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(ForgeError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    fn dimensions(&self) -> [(&'static str, f64); 4] {
        [
            ("width_in", self.width_in),
            ("height_in", self.height_in),
            ("length_in", self.length_in),
            ("insulation_in", self.insulation_in),
        ]
    }
}

impl Default for ChamberInput {
    /// The interactive collector's defaults: 6" x 6" x 14", 2" insulation, front door.
    fn default() -> Self {
        ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly)
    }
}

/// Inclusive recommended range for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRange {
    pub min: f64,
    pub max: f64,
}

impl RecommendedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        RecommendedRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Advisory finding from [`validate_ranges`]. Never blocks the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InputWarning {
    /// A dimension lies outside its recommended range
    OutOfRecommendedRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Chamber smaller than [`SMALL_CHAMBER_CI`]
    SmallChamber { volume_ci: f64 },
    /// Chamber larger than [`LARGE_CHAMBER_CI`]
    LargeChamber { volume_ci: f64 },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::OutOfRecommendedRange { field, value, min, max } => write!(
                f,
                "{} {}\" outside typical range ({}-{}\")",
                field, value, min, max
            ),
            InputWarning::SmallChamber { volume_ci } => write!(
                f,
                "Very small chamber ({} ci) - may have difficulty heating evenly",
                volume_ci
            ),
            InputWarning::LargeChamber { volume_ci } => write!(
                f,
                "Very large chamber ({} ci) - may need multiple burners",
                volume_ci
            ),
        }
    }
}

/// Check an input against the recommended ranges.
///
/// Returns one warning per out-of-range dimension, plus a chamber size
/// warning for very small or very large volumes. An empty list means the
/// design is inside every recommended range.
pub fn validate_ranges(input: &ChamberInput) -> Vec<InputWarning> {
    let checks = [
        ("Width", input.width_in, WIDTH_RANGE),
        ("Height", input.height_in, HEIGHT_RANGE),
        ("Length", input.length_in, LENGTH_RANGE),
        ("Insulation", input.insulation_in, INSULATION_RANGE),
    ];

    let mut warnings: Vec<InputWarning> = checks
        .iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(field, value, range)| InputWarning::OutOfRecommendedRange {
            field: field.to_string(),
            value: *value,
            min: range.min,
            max: range.max,
        })
        .collect();

    let volume_ci = input.volume_ci();
    if volume_ci < SMALL_CHAMBER_CI {
        warnings.push(InputWarning::SmallChamber { volume_ci });
    }
    if volume_ci > LARGE_CHAMBER_CI {
        warnings.push(InputWarning::LargeChamber { volume_ci });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_clean() {
        let input = ChamberInput::default();
        assert_eq!(input.volume_ci(), 504.0);
        assert!(input.check_precondition().is_ok());
        assert!(validate_ranges(&input).is_empty());
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let input = ChamberInput::new(3.0, 12.0, 6.0, 1.0, DoorConfig::FrontOnly);
        // 3 * 12 * 6 = 216 ci, inside the volume band too
        assert!(validate_ranges(&input).is_empty());
    }

    #[test]
    fn test_out_of_range_dimensions_warn() {
        let input = ChamberInput::new(14.0, 6.0, 14.0, 0.5, DoorConfig::FrontOnly);
        let warnings = validate_ranges(&input);

        // Width and insulation out of range; 14 * 6 * 14 = 1176 ci is fine
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0],
            InputWarning::OutOfRecommendedRange {
                field: "Width".to_string(),
                value: 14.0,
                min: 3.0,
                max: 12.0,
            }
        );
        assert_eq!(warnings[0].to_string(), "Width 14\" outside typical range (3-12\")");
    }

    #[test]
    fn test_volume_warnings() {
        let small = ChamberInput::new(3.0, 3.0, 6.0, 2.0, DoorConfig::FrontOnly);
        assert_eq!(
            validate_ranges(&small),
            vec![InputWarning::SmallChamber { volume_ci: 54.0 }]
        );

        let large = ChamberInput::new(12.0, 12.0, 24.0, 2.0, DoorConfig::FrontOnly);
        assert_eq!(
            validate_ranges(&large),
            vec![InputWarning::LargeChamber { volume_ci: 3456.0 }]
        );
    }

    #[test]
    fn test_precondition_rejects_bad_numbers() {
        let zero = ChamberInput::new(0.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly);
        let err = zero.check_precondition().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let negative = ChamberInput::new(6.0, 6.0, 14.0, -1.0, DoorConfig::FrontOnly);
        assert!(negative.check_precondition().is_err());

        let infinite = ChamberInput::new(6.0, f64::INFINITY, 14.0, 2.0, DoorConfig::FrontOnly);
        assert!(infinite.check_precondition().is_err());

        let nan = ChamberInput::new(6.0, 6.0, f64::NAN, 2.0, DoorConfig::FrontOnly);
        assert!(nan.check_precondition().is_err());
    }

    #[test]
    fn test_door_config_parsing() {
        assert_eq!("front-only".parse::<DoorConfig>().unwrap(), DoorConfig::FrontOnly);
        assert_eq!("front_and_rear".parse::<DoorConfig>().unwrap(), DoorConfig::FrontAndRear);
        assert_eq!("3".parse::<DoorConfig>().unwrap(), DoorConfig::SideLoading);
        assert!("trapdoor".parse::<DoorConfig>().is_err());

        assert_eq!(DoorConfig::from_menu_choice(2), Some(DoorConfig::FrontAndRear));
        assert_eq!(DoorConfig::from_menu_choice(4), None);
        for config in DoorConfig::ALL {
            assert_eq!(DoorConfig::from_menu_choice(config.menu_choice()), Some(config));
        }
    }

    #[test]
    fn test_door_config_serialization() {
        let json = serde_json::to_string(&DoorConfig::FrontAndRear).unwrap();
        assert_eq!(json, "\"front_and_rear\"");
        assert!(!DoorConfig::SideLoading.has_rear_door());
    }
}
