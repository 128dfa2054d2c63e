//! # Ribbon Burner Sizing
//!
//! One 1/4" flame port heats about 18 ci of chamber. The port target is the
//! chamber volume divided by that coverage, never fewer than 12 ports.
//!
//! Ports are laid out in 3 staggered rows, so the target is split into rows
//! and the total is re-derived from the rounded row count:
//!
//! ```text
//! target        = max(12, round(V / 18))
//! holes_per_row = round(target / 3)
//! burner_holes  = holes_per_row * 3
//! ```
//!
//! The re-derived total can land one or two ports away from the target
//! (504 ci targets 28 ports and builds 27). Divisibility by the row count
//! wins over the target.
//!
//! The casting is 0.75" per port along the row plus 1.5" of end margin, and
//! sits in 3" square tube.

use serde::{Deserialize, Serialize};

use crate::materials::SQUARE_TUBE_SIDE_IN;
use crate::units::{round_count, round_to};

/// Chamber volume one 1/4" port heats (ci)
pub const HOLE_COVERAGE_CI: f64 = 18.0;

/// Smallest burner worth casting
pub const MIN_BURNER_HOLES: u32 = 12;

/// Staggered rows across the casting
pub const BURNER_ROWS: u32 = 3;

/// Port pitch along a row (in)
pub const HOLE_SPACING_IN: f64 = 0.75;

/// Casting length beyond the first and last port, combined (in)
pub const END_MARGIN_IN: f64 = 1.5;

/// Port layout and casting size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolePattern {
    pub rows: u32,
    pub holes_per_row: u32,
}

impl HolePattern {
    pub fn total(&self) -> u32 {
        self.rows * self.holes_per_row
    }
}

/// Ribbon burner geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnerGeometry {
    /// Total flame ports, always a multiple of `rows`
    pub burner_holes: u32,
    pub holes_per_row: u32,
    pub rows: u32,
    /// Refractory casting length (in), one decimal
    pub burner_length_in: f64,
    /// Casting width (in), the square tube size
    pub burner_width_in: f64,
}

impl BurnerGeometry {
    pub fn pattern(&self) -> HolePattern {
        HolePattern {
            rows: self.rows,
            holes_per_row: self.holes_per_row,
        }
    }
}

/// Unrounded port count for a chamber, `V / 18`.
///
/// The airflow calculation sizes off this value, not off the built port count.
pub fn raw_hole_count(internal_volume_ci: f64) -> f64 {
    internal_volume_ci / HOLE_COVERAGE_CI
}

/// First-pass port target before the row split, `max(12, round(V / 18))`.
pub fn target_hole_count(internal_volume_ci: f64) -> u32 {
    MIN_BURNER_HOLES.max(round_count(raw_hole_count(internal_volume_ci)))
}

/// Split a port target into rows.
pub fn hole_pattern(target_holes: u32) -> HolePattern {
    HolePattern {
        rows: BURNER_ROWS,
        holes_per_row: round_count(target_holes as f64 / BURNER_ROWS as f64),
    }
}

/// Size the ribbon burner for a chamber volume.
pub fn calculate(internal_volume_ci: f64) -> BurnerGeometry {
    let pattern = hole_pattern(target_hole_count(internal_volume_ci));
    let burner_length_in = round_to(
        pattern.holes_per_row as f64 * HOLE_SPACING_IN + END_MARGIN_IN,
        1,
    );

    BurnerGeometry {
        burner_holes: pattern.total(),
        holes_per_row: pattern.holes_per_row,
        rows: pattern.rows,
        burner_length_in,
        burner_width_in: SQUARE_TUBE_SIDE_IN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chamber_rounds_down_to_27() {
        // 504 / 18 = 28 exactly, 28 / 3 = 9.33 -> 9 per row -> 27 ports
        assert_eq!(raw_hole_count(504.0), 28.0);
        assert_eq!(target_hole_count(504.0), 28);

        let burner = calculate(504.0);
        assert_eq!(burner.holes_per_row, 9);
        assert_eq!(burner.burner_holes, 27);
        assert_eq!(burner.rows, 3);
        // 9 * 0.75 + 1.5 = 8.25 -> 8.3
        assert_eq!(burner.burner_length_in, 8.3);
        assert_eq!(burner.burner_width_in, 3.0);
    }

    #[test]
    fn test_row_split_can_round_up() {
        // 252 / 18 = 14 -> 14 / 3 = 4.67 -> 5 per row -> 15 ports
        assert_eq!(target_hole_count(252.0), 14);
        let burner = calculate(252.0);
        assert_eq!(burner.burner_holes, 15);
        assert_ne!(burner.burner_holes, target_hole_count(252.0));
    }

    #[test]
    fn test_minimum_port_count() {
        // 54 ci would want 3 ports; the floor is 12
        assert_eq!(target_hole_count(54.0), 12);
        let burner = calculate(54.0);
        assert_eq!(burner.burner_holes, 12);
        assert_eq!(burner.holes_per_row, 4);
        assert_eq!(burner.burner_length_in, 4.5);
    }

    #[test]
    fn test_pattern_total_matches_geometry() {
        let burner = calculate(1728.0);
        assert_eq!(burner.pattern().total(), burner.burner_holes);
        assert_eq!(burner.burner_holes % BURNER_ROWS, 0);
    }
}
