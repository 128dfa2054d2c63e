//! Build guide sections, one function per page group.
//!
//! Every function returns Typst markup. Design values and fixed text both go
//! through [`escape_typst`] on the way in; only the markup produced here is
//! trusted.

use super::content::*;
use super::diagrams;
use super::escape_typst;
use crate::calculations::ForgeSpecs;
use crate::materials::{
    ANGLE_STOCK, CERAMIC_BLANKET_THICKNESS_IN, KAST_O_LITE_30, PLATE_STOCK, SQUARE_TUBE_SIDE_IN,
};
use crate::units::{format_inches, format_thousands, format_trimmed};

/// Placeholder for table cells with nothing to say
const NOT_APPLICABLE: &str = "n/a";

// ============================================================================
// Markup helpers
// ============================================================================

/// Inches with trailing zeros trimmed: 5.0 -> `5"`, 8.3 -> `8.3"`
fn inches(value: f64) -> String {
    format!("{}\"", format_trimmed(value, 2))
}

fn heading(title: &str) -> String {
    format!("#pagebreak(weak: true)\n= {}\n\n", escape_typst(title))
}

fn subhead(title: &str) -> String {
    format!("#subhead[{}]\n\n", escape_typst(title))
}

fn paragraph(text: &str) -> String {
    format!("{}\n\n", escape_typst(text))
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("- {}\n", escape_typst(item.as_ref())));
    }
    out.push('\n');
    out
}

/// Bullets with a bold lead-in: `- *Label:* text`
fn labeled_bullets(items: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (label, text) in items {
        out.push_str(&format!(
            "- #strong[{}:] {}\n",
            escape_typst(label),
            escape_typst(text)
        ));
    }
    out.push('\n');
    out
}

/// Auto-numbered steps
fn steps<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("+ {}\n", escape_typst(item.as_ref())));
    }
    out.push('\n');
    out
}

/// A bordered table with a shaded header row.
fn table(columns: &str, header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str("#table(\n");
    out.push_str(&format!("  columns: {},\n", columns));
    out.push_str("  inset: 5pt,\n");
    out.push_str("  stroke: 0.5pt + gray,\n");
    out.push_str("  fill: (_, y) => if y == 0 { luma(220) },\n");

    let header_cells: Vec<String> = header
        .iter()
        .map(|h| format!("[*{}*]", escape_typst(h)))
        .collect();
    out.push_str(&format!("  table.header({}),\n", header_cells.join(", ")));

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| format!("[{}]", escape_typst(c))).collect();
        out.push_str(&format!("  {},\n", cells.join(", ")));
    }
    out.push_str(")\n\n");
    out
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

// ============================================================================
// Front matter
// ============================================================================

pub fn title_page(specs: &ForgeSpecs) -> String {
    let input = &specs.input;
    let mut out = String::new();

    out.push_str("#v(1.2in)\n");
    out.push_str("#align(center)[\n");
    out.push_str("  #text(size: 28pt, weight: \"bold\")[Ribbon Burner Forge]\n\n");
    out.push_str("  #text(size: 16pt)[Complete Build Guide]\n");
    out.push_str("]\n\n#v(0.3in)\n\n");

    let facts = [
        ("Chamber Volume", format!("{} cubic inches", specs.volume_label())),
        (
            "Internal Dimensions",
            format!(
                "{} x {} x {}",
                inches(input.width_in),
                inches(input.height_in),
                inches(input.length_in)
            ),
        ),
        ("Door Configuration", input.door_config.display_name().to_string()),
        ("Estimated Cost", format!("${:.2}", specs.cost.estimated_cost_usd)),
    ];
    out.push_str("#align(center)[\n");
    for (label, value) in &facts {
        out.push_str(&format!(
            "  #strong[{}:] {} \\\n",
            escape_typst(label),
            escape_typst(value)
        ));
    }
    out.push_str("]\n\n#v(0.4in)\n\n");

    out.push_str(&diagrams::assembly_overview(specs));

    out.push_str(&format!(
        "\n#v(0.3in)\n#align(center)[#emph[Generated: {}]]\n\n",
        escape_typst(&specs.generated_timestamp.format("%Y-%m-%d %H:%M UTC").to_string())
    ));
    out
}

pub fn contents() -> String {
    "#pagebreak()\n#outline(title: [Table of Contents], depth: 1)\n\n".to_string()
}

// ============================================================================
// 1-4: safety, overview, materials, cut list
// ============================================================================

pub fn safety() -> String {
    let mut out = heading("Safety Requirements & Warnings");
    out.push_str(&format!(
        "#warning[#strong[CRITICAL SAFETY INFORMATION] \\\n{}]\n\n",
        escape_typst(SAFETY_WARNING)
    ));
    out.push_str(&subhead("Required Safety Equipment"));
    out.push_str(&bullets(SAFETY_EQUIPMENT));
    out.push_str(&subhead("Workspace Requirements"));
    out.push_str(&bullets(WORKSPACE_REQUIREMENTS));
    out.push_str(&subhead("Gas System Safety"));
    out.push_str(&bullets(GAS_SAFETY));
    out.push_str(&subhead("Emergency Procedures"));
    out.push_str(&labeled_bullets(EMERGENCY_PROCEDURES));
    out
}

pub fn design_overview(specs: &ForgeSpecs) -> String {
    let input = &specs.input;
    let env = &specs.envelope;
    let mut out = heading("Design Overview & Specifications");

    out.push_str(&paragraph(&format!(
        "This forge design features a {} cubic inch internal chamber with a {}-hole ribbon burner. \
         The bolted construction allows complete disassembly for maintenance and repair.",
        specs.volume_label(),
        specs.burner.burner_holes
    )));
    out.push_str(&diagrams::orthographic_views(specs));
    out.push('\n');

    out.push_str(&subhead("Dimensional Specifications"));
    let dims = vec![
        vec!["Width".to_string(), inches(input.width_in), format_inches(env.external_width_in)],
        vec!["Height".to_string(), inches(input.height_in), format_inches(env.external_height_in)],
        vec!["Length".to_string(), inches(input.length_in), format_inches(env.external_length_in)],
        vec![
            "Volume".to_string(),
            format!("{} ci", specs.volume_label()),
            NOT_APPLICABLE.to_string(),
        ],
        vec![
            "Insulation".to_string(),
            inches(input.insulation_in),
            "Ceramic blanket + IFB".to_string(),
        ],
    ];
    out.push_str(&table("(1fr, 1fr, 1fr)", &["Measurement", "Internal", "External"], &dims));

    out.push_str(&subhead("System Specifications"));
    let mut systems = vec![
        vec![
            "Ribbon Burner".to_string(),
            format!("{} holes (1/4\")", specs.burner.burner_holes),
            format!("{} casting length", inches(specs.burner.burner_length_in)),
        ],
        vec![
            "Blower".to_string(),
            format!("{} CFM", specs.airflow.cfm_recommended),
            format!("Static pressure: {}\" WC", specs.airflow.static_pressure),
        ],
        vec![
            "Refractory".to_string(),
            KAST_O_LITE_30.name.to_string(),
            format!(
                "{} bags ({} lb)",
                format_trimmed(specs.refractory.refractory_bags, 1),
                KAST_O_LITE_30.bag_size_lb
            ),
        ],
        vec![
            "Ceramic Blanket".to_string(),
            format!("{} sq ft", format_trimmed(specs.refractory.ceramic_blanket_sqft, 1)),
            format!("{} thickness", inches(CERAMIC_BLANKET_THICKNESS_IN)),
        ],
        vec![
            "BTU Requirement".to_string(),
            format_thousands(specs.cost.btu_required),
            "Approximate".to_string(),
        ],
        vec![
            "Front Door".to_string(),
            format!(
                "{} x {}",
                inches(specs.doors.front_door_width_in),
                inches(specs.doors.front_door_height_in)
            ),
            "Sliding firebrick".to_string(),
        ],
    ];
    if specs.doors.has_rear_door() {
        systems.push(vec![
            "Rear Door".to_string(),
            format!(
                "{} x {}",
                inches(specs.doors.rear_door_width_in),
                inches(specs.doors.rear_door_height_in)
            ),
            "Pass-through".to_string(),
        ]);
    }
    out.push_str(&table("(1fr, 1.2fr, 1.5fr)", &["System", "Specification", "Notes"], &systems));
    out
}

/// Angle iron to buy, estimated from the envelope as `8L + 8W + 4H`
/// and truncated to whole inches.
pub fn angle_iron_estimate_in(specs: &ForgeSpecs) -> u64 {
    let env = &specs.envelope;
    (8.0 * env.external_length_in + 8.0 * env.external_width_in + 4.0 * env.external_height_in)
        as u64
}

pub fn bill_of_materials(specs: &ForgeSpecs) -> String {
    let mut out = heading("Complete Bill of Materials");
    let to_rows = |fixed: &[(&str, &str, &str)]| -> Vec<Vec<String>> {
        fixed.iter().map(|(a, b, c)| row([*a, *b, *c])).collect()
    };

    out.push_str(&subhead("Steel Components"));
    let mut steel = vec![
        vec![
            format!("{} Steel Plate", PLATE_STOCK.thickness_label),
            "See cut list".to_string(),
            format!("{} panels total", specs.steel_cut_list.plate_piece_count()),
        ],
        vec![
            format!("{} Angle Iron", ANGLE_STOCK.cross_section_label),
            format!("~{}\"", angle_iron_estimate_in(specs)),
            "Frame corners".to_string(),
        ],
        vec![
            format!("{0}\" x {0}\" Square Tube", format_trimmed(SQUARE_TUBE_SIDE_IN, 2)),
            inches(specs.burner.burner_length_in + 2.0),
            "Burner housing".to_string(),
        ],
    ];
    steel.extend(to_rows(STEEL_BOM_FIXED));
    out.push_str(&table("(2fr, 1fr, 2fr)", &["Item", "Quantity", "Notes"], &steel));

    out.push_str(&subhead("Refractory Materials"));
    let mut refractory = vec![
        vec![
            format!("Ceramic Fiber Blanket {}", inches(CERAMIC_BLANKET_THICKNESS_IN)),
            format!("{} sq ft", format_trimmed(specs.refractory.ceramic_blanket_sqft, 1)),
            "Wall/ceiling lining".to_string(),
        ],
        vec![
            "Castable Refractory".to_string(),
            format!("{} bags", format_trimmed(specs.refractory.refractory_bags, 1)),
            "Burner head (Kast-O-Lite 30)".to_string(),
        ],
        vec![
            "IFB (Insulating Fire Brick)".to_string(),
            format!("{} bricks", specs.refractory.ifb_total()),
            "Floor and doors".to_string(),
        ],
    ];
    refractory.extend(to_rows(REFRACTORY_BOM_FIXED));
    out.push_str(&table("(2fr, 1fr, 2fr)", &["Item", "Quantity", "Purpose"], &refractory));

    out.push_str(&subhead("Hardware & Components"));
    let (bolts, bolt_qty, bolt_note) = BOLTS_ROW;
    let mut hardware = vec![
        row([bolts, bolt_qty, bolt_note]),
        vec![
            "Forge Blower".to_string(),
            "1".to_string(),
            format!(
                "{} CFM, {}\" WC",
                specs.airflow.cfm_recommended, specs.airflow.static_pressure
            ),
        ],
    ];
    hardware.extend(to_rows(HARDWARE_BOM_FIXED));
    out.push_str(&table("(2fr, 0.8fr, 2.2fr)", &["Item", "Quantity", "Notes"], &hardware));

    out.push_str(&format!(
        "#strong[Estimated Total Cost:] {} (excluding steel you may already have)\n\n",
        escape_typst(&format!("${:.2}", specs.cost.estimated_cost_usd))
    ));
    out
}

pub fn steel_cut_list(specs: &ForgeSpecs) -> String {
    let cuts = &specs.steel_cut_list;
    let mut out = heading("Steel Cut List");

    out.push_str(&subhead(&format!("{} Steel Plate Cuts", PLATE_STOCK.thickness_label)));
    let plates: Vec<Vec<String>> = cuts
        .plates
        .iter()
        .map(|cut| {
            vec![
                cut.name.clone(),
                cut.quantity.to_string(),
                format_inches(cut.width_in),
                format_inches(cut.height_in),
                cut.note.clone().unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            ]
        })
        .collect();
    out.push_str(&table(
        "(1.6fr, 0.5fr, 0.8fr, 0.8fr, 2.3fr)",
        &["Panel", "Qty", "Width", "Height", "Notes"],
        &plates,
    ));

    out.push_str(&subhead(&format!("Angle Iron Cuts ({})", ANGLE_STOCK.cross_section_label)));
    let angles: Vec<Vec<String>> = cuts
        .angle_iron
        .iter()
        .map(|cut| {
            vec![
                cut.name.clone(),
                cut.quantity.to_string(),
                format_inches(cut.length_in),
            ]
        })
        .collect();
    out.push_str(&table("(2fr, 0.6fr, 1fr)", &["Component", "Qty", "Length"], &angles));

    out.push_str(&paragraph(&format!(
        "Cut list totals: {} plate pieces, {} sq ft of plate, {} of angle iron.",
        cuts.plate_piece_count(),
        format_trimmed(crate::units::square_inches_to_square_feet(cuts.plate_area_sq_in()), 1),
        format_inches(cuts.angle_iron_length_in())
    )));

    out.push_str(&subhead("Cutting Notes"));
    out.push_str(&bullets(CUTTING_NOTES));
    out
}

// ============================================================================
// 5-7: body, burner, doors
// ============================================================================

pub fn body_construction(specs: &ForgeSpecs) -> String {
    let mut out = heading("Forge Body Construction");
    out.push_str(&paragraph(BODY_INTRO));
    out.push_str(&diagrams::corner_detail());
    out.push('\n');

    out.push_str(&subhead("Assembly Sequence"));
    let mut sequence: Vec<String> =
        ASSEMBLY_STEPS_BEFORE_BURNER.iter().map(|s| s.to_string()).collect();
    sequence.push(format!(
        "Cut burner hole in top panel ({} diameter)",
        inches(specs.burner.burner_width_in + 0.5)
    ));
    sequence.extend(ASSEMBLY_STEPS_AFTER_BURNER.iter().map(|s| s.to_string()));
    out.push_str(&steps(&sequence));
    out
}

pub fn ribbon_burner(specs: &ForgeSpecs) -> String {
    let burner = &specs.burner;
    let length = inches(burner.burner_length_in);
    let tube = format_trimmed(SQUARE_TUBE_SIDE_IN, 2);
    let mut out = heading("Ribbon Burner Assembly");

    out.push_str(&paragraph(&format!(
        "The ribbon burner provides even heat distribution through {} flame ports. \
         Sized for your {} ci chamber.",
        burner.burner_holes,
        specs.volume_label()
    )));
    out.push_str(&diagrams::burner_pattern(specs));
    out.push('\n');

    out.push_str(&subhead("Burner Specifications"));
    let rows = vec![
        vec![
            "Housing".to_string(),
            format!(
                "{0}\" x {0}\" square tube, {1} long",
                tube,
                inches(burner.burner_length_in + 2.0)
            ),
        ],
        row(["Air Inlet", "1.5\" pipe, 6\" stub"]),
        vec![
            "Refractory Head".to_string(),
            format!("{0} x {1}\" x {1}\" deep", length, tube),
        ],
        vec![
            "Flame Holes".to_string(),
            format!("{} holes, 1/4\" diameter", burner.burner_holes),
        ],
        vec![
            "Hole Pattern".to_string(),
            format!("{} rows x {} holes, staggered", burner.rows, burner.holes_per_row),
        ],
        row(["Gas Injection", "1/4\" pipe into air stream"]),
        row(["Mounting Angle", "30-45° downward into chamber"]),
    ];
    out.push_str(&table("(1fr, 2.5fr)", &["Component", "Specification"], &rows));

    out.push_str(&subhead("Casting the Refractory Head"));
    let mut casting = vec![
        format!("Build mold: {0} x {1}\" x {1}\" deep (plywood or melamine)", length, tube),
        format!(
            "Insert {} drinking straws in {}x{} pattern",
            burner.burner_holes, burner.rows, burner.holes_per_row
        ),
    ];
    casting.extend(CASTING_STEPS_FIXED.iter().map(|s| s.to_string()));
    out.push_str(&steps(&casting));
    out
}

pub fn door_system(specs: &ForgeSpecs) -> String {
    let doors = &specs.doors;
    let rear = doors.has_rear_door();
    let mut out = heading("Sliding Door System");
    out.push_str(&paragraph(DOOR_INTRO));
    out.push_str(&diagrams::door_system(specs));
    out.push('\n');

    out.push_str(&subhead("Door Specifications"));
    let opening = |w: f64, h: f64| format!("{} x {}", inches(w), inches(h));
    let frame = |w: f64, h: f64| format!("{} x {} x 3\"", inches(w + 1.0), inches(h + 1.0));
    let track = |w: f64| inches(w + 12.0);

    let mut rows = vec![
        vec![
            "Opening".to_string(),
            opening(doors.front_door_width_in, doors.front_door_height_in),
        ],
        vec![
            "Door Frame".to_string(),
            frame(doors.front_door_width_in, doors.front_door_height_in),
        ],
        vec!["Track Length".to_string(), track(doors.front_door_width_in)],
        vec![
            "Firebricks".to_string(),
            format!("{} IFB", specs.refractory.ifb_door_count),
        ],
    ];
    if rear {
        rows[0].push(opening(doors.rear_door_width_in, doors.rear_door_height_in));
        rows[1].push(frame(doors.rear_door_width_in, doors.rear_door_height_in));
        rows[2].push(track(doors.rear_door_width_in));
        rows[3].push("Included with front".to_string());
        out.push_str(&table(
            "(1fr, 1.3fr, 1.3fr)",
            &["Feature", "Front Door", "Rear Door"],
            &rows,
        ));
    } else {
        out.push_str(&table("(1fr, 1.5fr)", &["Feature", "Front Door"], &rows));
    }

    out.push_str(&subhead("Door Construction"));
    out.push_str(&steps(DOOR_STEPS));
    out
}

// ============================================================================
// 8-10: supply systems, lining, operation
// ============================================================================

pub fn air_and_gas(specs: &ForgeSpecs) -> String {
    let airflow = &specs.airflow;
    let mut out = heading("Air & Gas Supply Systems");

    out.push_str(&subhead("Air Supply System"));
    let mut air = vec![
        vec![
            "Blower".to_string(),
            format!("{} CFM centrifugal forge blower", airflow.cfm_recommended),
        ],
        vec![
            "Minimum Airflow".to_string(),
            format!("{} CFM required", airflow.cfm_required),
        ],
        vec![
            "Static Pressure".to_string(),
            format!("{}\" WC minimum", airflow.static_pressure),
        ],
    ];
    air.extend(AIR_SYSTEM_FIXED.iter().map(|(a, b)| row([*a, *b])));
    out.push_str(&table("(1fr, 2.5fr)", &["Component", "Specification"], &air));

    out.push_str(&subhead("Propane Gas System"));
    let gas: Vec<Vec<String>> = GAS_SYSTEM.iter().map(|(a, b)| row([*a, *b])).collect();
    out.push_str(&table("(1fr, 2.5fr)", &["Component", "Specification"], &gas));

    out.push_str(&format!(
        "#warning[#strong[SAFETY:] {}]\n\n",
        escape_typst(GAS_SAFETY_NOTE)
    ));
    out
}

pub fn refractory_and_curing(specs: &ForgeSpecs) -> String {
    let mut out = heading("Refractory Lining & Curing");

    out.push_str(&subhead("Lining Installation"));
    let mut lining = vec![format!(
        "Cut ceramic blanket to fit chamber: {} sq ft total",
        format_trimmed(specs.refractory.ceramic_blanket_sqft, 1)
    )];
    lining.extend(LINING_STEPS_FIXED.iter().map(|s| s.to_string()));
    out.push_str(&steps(&lining));

    out.push_str(&subhead("Curing Schedule (CRITICAL)"));
    out.push_str(&paragraph(CURING_INTRO));
    let cure: Vec<Vec<String>> = CURING_SCHEDULE
        .iter()
        .map(|(day, temp, duration, notes)| row([*day, *temp, *duration, *notes]))
        .collect();
    out.push_str(&table(
        "(0.5fr, 1fr, 1fr, 2fr)",
        &["Day", "Temperature", "Duration", "Notes"],
        &cure,
    ));
    out.push_str(&paragraph(CURING_NOTE));
    out
}

pub fn operation() -> String {
    let mut out = heading("Operation Procedures");
    out.push_str(&subhead("Startup Procedure"));
    out.push_str(&steps(STARTUP_STEPS));
    out.push_str(&subhead("Shutdown Procedure"));
    out.push_str(&steps(SHUTDOWN_STEPS));
    out
}

// ============================================================================
// 11-13: tuning, troubleshooting, maintenance
// ============================================================================

pub fn flame_tuning() -> String {
    let mut out = heading("Flame Tuning Guide");
    out.push_str(&paragraph(FLAME_INTRO));
    let flames: Vec<Vec<String>> = FLAME_TYPES.iter().map(|(a, b, c)| row([*a, *b, *c])).collect();
    out.push_str(&table(
        "(1fr, 2fr, 2fr)",
        &["Flame Type", "Appearance", "Use Case"],
        &flames,
    ));
    out.push_str(&subhead("Tuning Adjustments"));
    out.push_str(&labeled_bullets(TUNING_ADJUSTMENTS));
    out
}

pub fn troubleshooting() -> String {
    let mut out = heading("Troubleshooting");
    let rows: Vec<Vec<String>> =
        TROUBLESHOOTING.iter().map(|(a, b, c)| row([*a, *b, *c])).collect();
    out.push_str(&table(
        "(1fr, 1.6fr, 1.8fr)",
        &["Problem", "Possible Causes", "Solutions"],
        &rows,
    ));
    out
}

/// Length of the evenly heated zone, `trunc(length * 0.6)` inches.
pub fn even_heating_zone_in(specs: &ForgeSpecs) -> u64 {
    (specs.input.length_in * 0.6) as u64
}

pub fn maintenance(specs: &ForgeSpecs) -> String {
    let mut out = heading("Maintenance Schedule");
    for (interval, tasks) in MAINTENANCE_SCHEDULE {
        out.push_str(&subhead(interval));
        out.push_str(&bullets(*tasks));
    }

    out.push_str(&subhead("Expected Performance"));
    let mut perf: Vec<Vec<String>> =
        PERFORMANCE_BEFORE_ZONE.iter().map(|(a, b)| row([*a, *b])).collect();
    perf.push(vec![
        "Even Heating Zone".to_string(),
        format!("~{}\" from burner", even_heating_zone_in(specs)),
    ]);
    perf.extend(PERFORMANCE_AFTER_ZONE.iter().map(|(a, b)| row([*a, *b])));
    out.push_str(&table("(1fr, 2fr)", &["Parameter", "Specification"], &perf));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute_specs;
    use crate::input::{ChamberInput, DoorConfig};

    fn default_specs() -> ForgeSpecs {
        compute_specs(&ChamberInput::default())
    }

    #[test]
    fn test_table_escapes_cells() {
        let t = table("(1fr, 1fr)", &["Item", "Cost"], &[row(["#1 *bold*", "$5"])]);
        assert!(t.contains("table.header([*Item*], [*Cost*])"));
        assert!(t.contains("[\\#1 \\*bold\\*], [\\$5]"));
    }

    #[test]
    fn test_steps_and_bullets() {
        assert_eq!(steps(&["a", "b"]), "+ a\n+ b\n\n");
        assert_eq!(bullets(&["x_y"]), "- x\\_y\n\n");
        assert_eq!(labeled_bullets(&[("Burns", "cool")]), "- #strong[Burns:] cool\n\n");
    }

    #[test]
    fn test_bom_quantities() {
        let specs = default_specs();
        // 8(15) + 8(10.5) + 4(10.5)
        assert_eq!(angle_iron_estimate_in(&specs), 246);

        let bom = bill_of_materials(&specs);
        assert!(bom.contains("\\~246\""));
        assert!(bom.contains("[10.3\"], [Burner housing]"));
        assert!(bom.contains("[6 bricks]"));
        assert!(bom.contains("[43 CFM, 3.0\" WC]"));
        assert!(bom.contains("\\$371.00"));
    }

    #[test]
    fn test_burner_hole_size() {
        let body = body_construction(&default_specs());
        assert!(body.contains("+ Cut burner hole in top panel (3.5\" diameter)"));
        assert!(body.contains("+ Bolt bottom panel to frame first"));
    }

    #[test]
    fn test_door_table_columns() {
        let front_only = door_system(&default_specs());
        assert!(front_only.contains("[*Feature*], [*Front Door*])"));
        assert!(!front_only.contains("Rear Door"));
        assert!(front_only.contains("[Track Length], [17.1\"]"));
        assert!(front_only.contains("[6.1\" x 6.1\" x 3\"]"));

        let both = compute_specs(&ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontAndRear));
        let page = door_system(&both);
        assert!(page.contains("[*Rear Door*]"));
        assert!(page.contains("[4.2\" x 4.5\"]"));
    }

    #[test]
    fn test_even_heating_zone() {
        let specs = default_specs();
        assert_eq!(even_heating_zone_in(&specs), 8);
        assert!(maintenance(&specs).contains("[\\~8\" from burner]"));
    }

    #[test]
    fn test_cut_list_notes() {
        let page = steel_cut_list(&default_specs());
        assert!(page.contains("[Cut 5.1\" x 5.1\" door opening]"));
        assert!(page.contains(&format!("[{}]", NOT_APPLICABLE)));
    }

    #[test]
    fn test_sections_are_headed() {
        let specs = default_specs();
        assert!(safety().starts_with("#pagebreak(weak: true)\n= Safety Requirements & Warnings"));
        assert!(air_and_gas(&specs).contains("= Air & Gas Supply Systems"));
        assert!(troubleshooting().contains("[Won't ignite]"));
    }
}
