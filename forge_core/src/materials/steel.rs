//! Steel stock for the forge shell and frame.

use serde::Serialize;

/// Flat plate stock
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateStock {
    pub thickness_in: f64,
    /// Label used in cut lists
    pub thickness_label: &'static str,
}

/// Equal-leg angle iron stock
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleStock {
    pub leg_in: f64,
    /// Label used in cut lists
    pub cross_section_label: &'static str,
}

/// All six shell panels are cut from 1/4" plate
pub const PLATE_STOCK: PlateStock = PlateStock {
    thickness_in: 0.25,
    thickness_label: "1/4\"",
};

/// Bolted frame angle
pub const ANGLE_STOCK: AngleStock = AngleStock {
    leg_in: 2.0,
    cross_section_label: "2\" x 2\" x 1/8\"",
};

/// Burner housing square tube (3" x 3")
pub const SQUARE_TUBE_SIDE_IN: f64 = 3.0;
