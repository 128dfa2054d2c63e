//! # Steel Cut List
//!
//! Fixed structural template sized off the external envelope. Six panels of
//! 1/4" plate form the box; a bolted 2" angle frame holds it together.
//!
//! | Part             | Qty | Size                      |
//! |------------------|-----|---------------------------|
//! | Side Panels      | 2   | ext_l x ext_h             |
//! | Top Panel        | 1   | ext_l x ext_w             |
//! | Bottom Panel     | 1   | ext_l x ext_w             |
//! | Front End Panel  | 1   | ext_w x ext_h, door cut   |
//! | Rear End Panel   | 1   | ext_w x ext_h             |
//! | Corner Posts     | 4   | ext_h                     |
//! | Top/Bottom Rails | 8   | ext_l - 4                 |
//! | End Rails        | 8   | ext_w - 4                 |
//!
//! Rails are 4" short of the envelope where the corner posts overlap them.

use serde::{Deserialize, Serialize};

use super::doors::DoorSizing;
use super::envelope::Envelope;
use crate::materials::{ANGLE_STOCK, PLATE_STOCK};
use crate::units::format_inches;

/// Rail length lost to the corner posts, one angle leg at each end (in)
pub const CORNER_POST_OVERLAP_IN: f64 = 2.0 * ANGLE_STOCK.leg_in;

/// A plate panel to cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateCut {
    pub name: String,
    pub quantity: u32,
    pub width_in: f64,
    pub height_in: f64,
    /// Stock thickness label, e.g. `1/4"`
    pub thickness: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PlateCut {
    fn panel(name: &str, quantity: u32, width_in: f64, height_in: f64) -> Self {
        PlateCut {
            name: name.to_string(),
            quantity,
            width_in,
            height_in,
            thickness: PLATE_STOCK.thickness_label.to_string(),
            note: None,
        }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Plate area for every piece of this cut (in²)
    pub fn total_area_sq_in(&self) -> f64 {
        self.quantity as f64 * self.width_in * self.height_in
    }
}

/// A length of angle iron to cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleCut {
    pub name: String,
    pub quantity: u32,
    pub length_in: f64,
    /// Stock profile label, e.g. `2" x 2" x 1/8"`
    pub cross_section: String,
}

impl AngleCut {
    fn piece(name: &str, quantity: u32, length_in: f64) -> Self {
        AngleCut {
            name: name.to_string(),
            quantity,
            length_in,
            cross_section: ANGLE_STOCK.cross_section_label.to_string(),
        }
    }

    /// Combined length of every piece (in)
    pub fn total_length_in(&self) -> f64 {
        self.quantity as f64 * self.length_in
    }
}

/// Plates and angle iron for the shell and frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelCutList {
    pub plates: Vec<PlateCut>,
    pub angle_iron: Vec<AngleCut>,
}

impl SteelCutList {
    /// Number of individual plate panels
    pub fn plate_piece_count(&self) -> u32 {
        self.plates.iter().map(|p| p.quantity).sum()
    }

    /// Total plate area (in²)
    pub fn plate_area_sq_in(&self) -> f64 {
        self.plates.iter().map(PlateCut::total_area_sq_in).sum()
    }

    /// Total angle iron after cutting (in)
    pub fn angle_iron_length_in(&self) -> f64 {
        self.angle_iron.iter().map(AngleCut::total_length_in).sum()
    }
}

/// Note on the front panel giving the door opening to cut.
pub fn door_opening_note(doors: &DoorSizing) -> String {
    format!(
        "Cut {} x {} door opening",
        format_inches(doors.front_door_width_in),
        format_inches(doors.front_door_height_in)
    )
}

pub fn calculate(envelope: &Envelope, doors: &DoorSizing) -> SteelCutList {
    let w = envelope.external_width_in;
    let h = envelope.external_height_in;
    let l = envelope.external_length_in;

    let plates = vec![
        PlateCut::panel("Side Panels", 2, l, h),
        PlateCut::panel("Top Panel", 1, l, w),
        PlateCut::panel("Bottom Panel", 1, l, w),
        PlateCut::panel("Front End Panel", 1, w, h).with_note(door_opening_note(doors)),
        PlateCut::panel("Rear End Panel", 1, w, h),
    ];

    let angle_iron = vec![
        AngleCut::piece("Corner Posts", 4, h),
        AngleCut::piece("Top/Bottom Rails", 8, l - CORNER_POST_OVERLAP_IN),
        AngleCut::piece("End Rails", 8, w - CORNER_POST_OVERLAP_IN),
    ];

    SteelCutList { plates, angle_iron }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_cut_list() -> SteelCutList {
        let envelope = Envelope {
            internal_volume_ci: 504.0,
            external_width_in: 10.5,
            external_height_in: 10.5,
            external_length_in: 15.0,
        };
        let doors = DoorSizing {
            front_door_width_in: 5.1,
            front_door_height_in: 5.1,
            rear_door_width_in: 0.0,
            rear_door_height_in: 0.0,
        };
        calculate(&envelope, &doors)
    }

    #[test]
    fn test_plate_template() {
        let cuts = default_cut_list();
        let names: Vec<&str> = cuts.plates.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Side Panels", "Top Panel", "Bottom Panel", "Front End Panel", "Rear End Panel"]
        );
        assert_eq!(cuts.plate_piece_count(), 6);

        let sides = &cuts.plates[0];
        assert_eq!((sides.quantity, sides.width_in, sides.height_in), (2, 15.0, 10.5));
        assert!(cuts.plates.iter().all(|p| p.thickness == "1/4\""));
    }

    #[test]
    fn test_only_front_panel_has_note() {
        let cuts = default_cut_list();
        assert_eq!(cuts.plates[3].note.as_deref(), Some("Cut 5.1\" x 5.1\" door opening"));
        assert!(cuts.plates.iter().filter(|p| p.note.is_some()).count() == 1);
        assert_eq!(cuts.plates[4].note, None);
    }

    #[test]
    fn test_angle_iron_template() {
        let cuts = default_cut_list();
        let lengths: Vec<(u32, f64)> =
            cuts.angle_iron.iter().map(|a| (a.quantity, a.length_in)).collect();
        assert_eq!(lengths, [(4, 10.5), (8, 11.0), (8, 6.5)]);
        assert!(cuts.angle_iron.iter().all(|a| a.cross_section == "2\" x 2\" x 1/8\""));
        // 42 + 88 + 52
        assert_eq!(cuts.angle_iron_length_in(), 182.0);
        assert_eq!(CORNER_POST_OVERLAP_IN, 4.0);
    }

    #[test]
    fn test_note_is_omitted_from_json_when_absent() {
        let cuts = default_cut_list();
        let rear = serde_json::to_value(&cuts.plates[4]).unwrap();
        assert!(rear.get("note").is_none());
        let front = serde_json::to_value(&cuts.plates[3]).unwrap();
        assert_eq!(front["note"], "Cut 5.1\" x 5.1\" door opening");
    }
}
