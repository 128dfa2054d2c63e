//! # Formula Registry
//!
//! Every sizing heuristic the calculator applies, with enough metadata to
//! print it in the build guide appendix and in `FORMULAS.md`.
//!
//! ## Usage
//!
//! ```rust
//! use forge_core::calculations::compute_specs;
//! use forge_core::formulas::Formula;
//! use forge_core::input::ChamberInput;
//!
//! let specs = compute_specs(&ChamberInput::default());
//! let meta = Formula::BurnerLength.metadata();
//! assert_eq!(meta.name, "Burner Casting Length");
//! assert_eq!(Formula::BurnerLength.value_for(&specs), "8.3\"");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::burner::target_hole_count;
use crate::calculations::steel::CORNER_POST_OVERLAP_IN;
use crate::calculations::{compute_specs_at, ForgeSpecs};
use crate::input::ChamberInput;
use crate::report::escape_typst;
use crate::units::{format_inches, format_thousands, format_trimmed};

// ============================================================================
// Categories
// ============================================================================

/// Groups formulas in the appendix and in `FORMULAS.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Volume and external dimensions
    Envelope,
    /// Ribbon burner layout
    Burner,
    /// Blower sizing
    Airflow,
    /// Door openings
    Doors,
    /// Castable, blanket and fire brick
    Refractory,
    /// Angle iron frame
    Frame,
    /// Heat load and cost
    CostAndHeat,
}

impl FormulaCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::Envelope => "Volume & Envelope",
            FormulaCategory::Burner => "Ribbon Burner",
            FormulaCategory::Airflow => "Blower & Airflow",
            FormulaCategory::Doors => "Doors",
            FormulaCategory::Refractory => "Refractory & Insulation",
            FormulaCategory::Frame => "Steel Frame",
            FormulaCategory::CostAndHeat => "Heat Load & Cost",
        }
    }

    /// Sort order in the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::Envelope => 1,
            FormulaCategory::Burner => 2,
            FormulaCategory::Airflow => 3,
            FormulaCategory::Doors => 4,
            FormulaCategory::Refractory => 5,
            FormulaCategory::Frame => 6,
            FormulaCategory::CostAndHeat => 7,
        }
    }

    pub fn all() -> Vec<FormulaCategory> {
        use FormulaCategory::*;
        let mut cats = vec![Envelope, Burner, Airflow, Doors, Refractory, Frame, CostAndHeat];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// A symbol appearing in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol in Typst math notation (e.g. `n_"row"`)
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Everything printed about one formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Typst math for the PDF appendix
    pub formula_typst: &'static str,
    /// Plain text for markdown
    pub formula_plain: &'static str,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: FormulaCategory,
    /// Module implementing the formula, relative to `forge_core/src`
    pub source_module: &'static str,
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every heuristic applied by [`compute_specs`](crate::calculations::compute_specs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Formula {
    InternalVolume,
    ExternalWidth,
    ExternalHeight,
    ExternalLength,
    /// max(12, round(V / 18))
    BurnerHoleTarget,
    /// Row split and re-derived total
    BurnerHoleCount,
    BurnerLength,
    CfmRequired,
    CfmRecommended,
    StaticPressure,
    FrontDoorSize,
    /// Only applies to front-and-rear chambers
    RearDoorSize,
    RefractoryWeight,
    RefractoryBags,
    CeramicBlanket,
    IfbFloorCount,
    IfbDoorCount,
    FrameRailLength,
    BtuRequired,
    EstimatedCost,
}

/// All formulas in registry order
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::InternalVolume,
    Formula::ExternalWidth,
    Formula::ExternalHeight,
    Formula::ExternalLength,
    Formula::BurnerHoleTarget,
    Formula::BurnerHoleCount,
    Formula::BurnerLength,
    Formula::CfmRequired,
    Formula::CfmRecommended,
    Formula::StaticPressure,
    Formula::FrontDoorSize,
    Formula::RearDoorSize,
    Formula::RefractoryWeight,
    Formula::RefractoryBags,
    Formula::CeramicBlanket,
    Formula::IfbFloorCount,
    Formula::IfbDoorCount,
    Formula::FrameRailLength,
    Formula::BtuRequired,
    Formula::EstimatedCost,
];

impl Formula {
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::InternalVolume => FormulaMetadata {
                name: "Internal Volume",
                description: "Heated volume of the chamber",
                formula_typst: r#"$V = w dot h dot l$"#,
                formula_plain: "V = w * h * l",
                variables: vec![
                    Variable::new("w", "Internal width", "in"),
                    Variable::new("h", "Internal height", "in"),
                    Variable::new("l", "Internal length", "in"),
                ],
                assumptions: vec!["Rectangular chamber"],
                category: FormulaCategory::Envelope,
                source_module: "calculations/envelope.rs",
                source_function: "calculate",
            },

            Formula::ExternalWidth => FormulaMetadata {
                name: "External Width",
                description: "Outside width of the shell including insulation and plate",
                formula_typst: r#"$W = w + 2 t + 0.5$"#,
                formula_plain: "W = w + 2t + 0.5",
                variables: vec![
                    Variable::new("t", "Insulation thickness", "in"),
                    Variable::new("W", "External width", "in"),
                ],
                assumptions: vec!["1/4\" plate on each side"],
                category: FormulaCategory::Envelope,
                source_module: "calculations/envelope.rs",
                source_function: "calculate",
            },

            Formula::ExternalHeight => FormulaMetadata {
                name: "External Height",
                description: "Outside height of the shell including insulation and plate",
                formula_typst: r#"$H = h + 2 t + 0.5$"#,
                formula_plain: "H = h + 2t + 0.5",
                variables: vec![Variable::new("H", "External height", "in")],
                assumptions: vec!["1/4\" plate top and bottom"],
                category: FormulaCategory::Envelope,
                source_module: "calculations/envelope.rs",
                source_function: "calculate",
            },

            Formula::ExternalLength => FormulaMetadata {
                name: "External Length",
                description: "Outside length of the shell including end plates",
                formula_typst: r#"$L = l + 1.0$"#,
                formula_plain: "L = l + 1.0",
                variables: vec![Variable::new("L", "External length", "in")],
                assumptions: vec!["End walls are door and plate, not blanket"],
                category: FormulaCategory::Envelope,
                source_module: "calculations/envelope.rs",
                source_function: "calculate",
            },

            Formula::BurnerHoleTarget => FormulaMetadata {
                name: "Burner Port Target",
                description: "First-pass flame port count from chamber volume",
                formula_typst: r#"$N_0 = "max"(12, "round"(V / 18))$"#,
                formula_plain: "N0 = max(12, round(V / 18))",
                variables: vec![Variable::new("N_0", "Target port count", "-")],
                assumptions: vec!["One 1/4\" port heats about 18 ci", "Never fewer than 12 ports"],
                category: FormulaCategory::Burner,
                source_module: "calculations/burner.rs",
                source_function: "target_hole_count",
            },

            Formula::BurnerHoleCount => FormulaMetadata {
                name: "Burner Port Layout",
                description: "Ports per row and built port count for three staggered rows",
                formula_typst: r#"$n_"row" = "round"(N_0 / 3)$, $N = 3 n_"row"$"#,
                formula_plain: "n_row = round(N0 / 3), N = 3 * n_row",
                variables: vec![
                    Variable::new("n_\"row\"", "Ports per row", "-"),
                    Variable::new("N", "Built port count", "-"),
                ],
                assumptions: vec!["Port count must divide evenly into rows; may differ from the target"],
                category: FormulaCategory::Burner,
                source_module: "calculations/burner.rs",
                source_function: "calculate",
            },

            Formula::BurnerLength => FormulaMetadata {
                name: "Burner Casting Length",
                description: "Length of the refractory burner casting",
                formula_typst: r#"$L_b = "round"(0.75 n_"row" + 1.5, 1)$"#,
                formula_plain: "Lb = round(0.75 * n_row + 1.5, 1)",
                variables: vec![Variable::new("L_b", "Casting length", "in")],
                assumptions: vec!["0.75\" port pitch", "1.5\" combined end margin", "Cast in 3\" square tube"],
                category: FormulaCategory::Burner,
                source_module: "calculations/burner.rs",
                source_function: "calculate",
            },

            Formula::CfmRequired => FormulaMetadata {
                name: "Required Airflow",
                description: "Blower airflow for the raw port count plus 20%",
                formula_typst: r#"$Q = "round"(1.2 dot V / 18)$"#,
                formula_plain: "Q = round(1.2 * V / 18)",
                variables: vec![Variable::new("Q", "Required airflow", "CFM")],
                assumptions: vec!["Uses the unrounded port count, not the built count"],
                category: FormulaCategory::Airflow,
                source_module: "calculations/airflow.rs",
                source_function: "calculate",
            },

            Formula::CfmRecommended => FormulaMetadata {
                name: "Recommended Airflow",
                description: "Required airflow with a 25% safety margin",
                formula_typst: r#"$Q_"rec" = "round"(1.25 Q)$"#,
                formula_plain: "Q_rec = round(1.25 * Q)",
                variables: vec![Variable::new("Q_\"rec\"", "Recommended airflow", "CFM")],
                assumptions: vec![],
                category: FormulaCategory::Airflow,
                source_module: "calculations/airflow.rs",
                source_function: "calculate",
            },

            Formula::StaticPressure => FormulaMetadata {
                name: "Blower Static Pressure",
                description: "Static pressure rating of the blower",
                formula_typst: r#"$P_s = 1.5$ in WC for $V < 500$, otherwise $P_s = 3.0$ in WC"#,
                formula_plain: "Ps = 1.5 in WC if V < 500, else 3.0 in WC",
                variables: vec![Variable::new("P_s", "Static pressure", "in WC")],
                assumptions: vec!["500 ci exactly takes the higher rating"],
                category: FormulaCategory::Airflow,
                source_module: "calculations/airflow.rs",
                source_function: "StaticPressure::for_volume",
            },

            Formula::FrontDoorSize => FormulaMetadata {
                name: "Front Door Opening",
                description: "Front door opening proportional to the chamber",
                formula_typst: r#"$d_w = "round"(0.85 w, 1)$, $d_h = "round"(0.85 h, 1)$"#,
                formula_plain: "dw = round(0.85 * w, 1), dh = round(0.85 * h, 1)",
                variables: vec![
                    Variable::new("d_w", "Door width", "in"),
                    Variable::new("d_h", "Door height", "in"),
                ],
                assumptions: vec!["Side loading uses the same front door"],
                category: FormulaCategory::Doors,
                source_module: "calculations/doors.rs",
                source_function: "calculate",
            },

            Formula::RearDoorSize => FormulaMetadata {
                name: "Rear Door Opening",
                description: "Pass-through rear door opening",
                formula_typst: r#"$r_w = "round"(0.70 w, 1)$, $r_h = "round"(0.75 h, 1)$"#,
                formula_plain: "rw = round(0.70 * w, 1), rh = round(0.75 * h, 1)",
                variables: vec![
                    Variable::new("r_w", "Rear door width", "in"),
                    Variable::new("r_h", "Rear door height", "in"),
                ],
                assumptions: vec!["Zero unless the chamber has front and rear doors"],
                category: FormulaCategory::Doors,
                source_module: "calculations/doors.rs",
                source_function: "calculate",
            },

            Formula::RefractoryWeight => FormulaMetadata {
                name: "Castable Weight",
                description: "Weight of castable filling the shell between envelope and chamber",
                formula_typst: r#"$m = (W H L - V) / 1728 dot 92$"#,
                formula_plain: "m = (W*H*L - V) / 1728 * 92",
                variables: vec![Variable::new("m", "Castable weight", "lb")],
                assumptions: vec!["Kast-O-Lite 30 LI at 92 lb/cu ft", "Whole shell volume counted"],
                category: FormulaCategory::Refractory,
                source_module: "calculations/refractory.rs",
                source_function: "calculate_with",
            },

            Formula::RefractoryBags => FormulaMetadata {
                name: "Castable Bags",
                description: "55 lb bags of castable",
                formula_typst: r#"$B = "round"(m / 55, 1)$"#,
                formula_plain: "B = round(m / 55, 1)",
                variables: vec![Variable::new("B", "Bags", "-")],
                assumptions: vec!["Fractional bags are kept; round up when buying"],
                category: FormulaCategory::Refractory,
                source_module: "calculations/refractory.rs",
                source_function: "calculate_with",
            },

            Formula::CeramicBlanket => FormulaMetadata {
                name: "Ceramic Blanket Area",
                description: "Blanket for four walls and the ceiling",
                formula_typst: r#"$A = "round"((2 L H + L W + 2 W H) / 144, 1)$"#,
                formula_plain: "A = round((2*L*H + L*W + 2*W*H) / 144, 1)",
                variables: vec![Variable::new("A", "Blanket area", "sq ft")],
                assumptions: vec!["Floor is fire brick, not blanket"],
                category: FormulaCategory::Refractory,
                source_module: "calculations/refractory.rs",
                source_function: "blanket_area_sqft",
            },

            Formula::IfbFloorCount => FormulaMetadata {
                name: "Floor Fire Bricks",
                description: "Insulating fire bricks for the floor",
                formula_typst: r#"$n_"floor" = "max"(2, "round"(L W / 72))$"#,
                formula_plain: "n_floor = max(2, round(L*W / 72))",
                variables: vec![Variable::new("n_\"floor\"", "Floor bricks", "-")],
                assumptions: vec!["72 sq in counted per brick"],
                category: FormulaCategory::Refractory,
                source_module: "calculations/refractory.rs",
                source_function: "calculate_with",
            },

            Formula::IfbDoorCount => FormulaMetadata {
                name: "Door Fire Bricks",
                description: "Insulating fire bricks for the sliding doors",
                formula_typst: r#"$n_"door" = 4$ for a front door only, otherwise $n_"door" = 6$"#,
                formula_plain: "n_door = 4 if front door only, else 6",
                variables: vec![Variable::new("n_\"door\"", "Door bricks", "-")],
                assumptions: vec![],
                category: FormulaCategory::Refractory,
                source_module: "calculations/refractory.rs",
                source_function: "calculate_with",
            },

            Formula::FrameRailLength => FormulaMetadata {
                name: "Frame Rail Length",
                description: "Angle iron rails between the corner posts",
                formula_typst: r#"$l_"rail" = L - 4$, $l_"end" = W - 4$"#,
                formula_plain: "l_rail = L - 4, l_end = W - 4",
                variables: vec![
                    Variable::new("l_\"rail\"", "Top/bottom rail length", "in"),
                    Variable::new("l_\"end\"", "End rail length", "in"),
                ],
                assumptions: vec!["2\" angle corner posts overlap each rail end"],
                category: FormulaCategory::Frame,
                source_module: "calculations/steel.rs",
                source_function: "calculate",
            },

            Formula::BtuRequired => FormulaMetadata {
                name: "Heat Load",
                description: "Burner output needed to reach forging temperature",
                formula_typst: r#"$Q_"BTU" = "round"(450 V)$"#,
                formula_plain: "Q_btu = round(450 * V)",
                variables: vec![Variable::new("Q_\"BTU\"", "Heat load", "BTU/hr")],
                assumptions: vec!["Approximate; insulation quality dominates"],
                category: FormulaCategory::CostAndHeat,
                source_module: "calculations/cost.rs",
                source_function: "btu_required",
            },

            Formula::EstimatedCost => FormulaMetadata {
                name: "Materials Cost",
                description: "Base materials plus castable",
                formula_typst: r#"$C = "round"(250 + 110 B, 2)$"#,
                formula_plain: "C = round(250 + 110 * B, 2)",
                variables: vec![Variable::new("C", "Estimated cost", "USD")],
                assumptions: vec!["Excludes steel already on hand", "110 USD per bag of castable"],
                category: FormulaCategory::CostAndHeat,
                source_module: "calculations/cost.rs",
                source_function: "estimated_cost_usd",
            },
        }
    }

    /// The value this formula produced for a design, formatted with units.
    pub fn value_for(&self, specs: &ForgeSpecs) -> String {
        let env = &specs.envelope;
        let burner = &specs.burner;
        let refractory = &specs.refractory;
        match self {
            Formula::InternalVolume => format!("{} ci", format_trimmed(env.internal_volume_ci, 2)),
            Formula::ExternalWidth => format_inches(env.external_width_in),
            Formula::ExternalHeight => format_inches(env.external_height_in),
            Formula::ExternalLength => format_inches(env.external_length_in),
            Formula::BurnerHoleTarget => target_hole_count(env.internal_volume_ci).to_string(),
            Formula::BurnerHoleCount => format!(
                "{} rows x {} = {}",
                burner.rows, burner.holes_per_row, burner.burner_holes
            ),
            Formula::BurnerLength => format_inches(burner.burner_length_in),
            Formula::CfmRequired => format!("{} CFM", specs.airflow.cfm_required),
            Formula::CfmRecommended => format!("{} CFM", specs.airflow.cfm_recommended),
            Formula::StaticPressure => format!("{}\" WC", specs.airflow.static_pressure),
            Formula::FrontDoorSize => format!(
                "{} x {}",
                format_inches(specs.doors.front_door_width_in),
                format_inches(specs.doors.front_door_height_in)
            ),
            Formula::RearDoorSize => {
                if specs.doors.has_rear_door() {
                    format!(
                        "{} x {}",
                        format_inches(specs.doors.rear_door_width_in),
                        format_inches(specs.doors.rear_door_height_in)
                    )
                } else {
                    "none".to_string()
                }
            }
            Formula::RefractoryWeight => {
                format!("{} lb", format_trimmed(refractory.refractory_weight_lb, 1))
            }
            Formula::RefractoryBags => {
                format!("{} bags", format_trimmed(refractory.refractory_bags, 1))
            }
            Formula::CeramicBlanket => {
                format!("{} sq ft", format_trimmed(refractory.ceramic_blanket_sqft, 1))
            }
            Formula::IfbFloorCount => refractory.ifb_floor_count.to_string(),
            Formula::IfbDoorCount => refractory.ifb_door_count.to_string(),
            Formula::FrameRailLength => format!(
                "{} / {}",
                format_inches(env.external_length_in - CORNER_POST_OVERLAP_IN),
                format_inches(env.external_width_in - CORNER_POST_OVERLAP_IN)
            ),
            Formula::BtuRequired => format!("{} BTU/hr", format_thousands(specs.cost.btu_required)),
            Formula::EstimatedCost => format!("${:.2}", specs.cost.estimated_cost_usd),
        }
    }

    /// Whether the formula contributes to a given design
    pub fn applies_to(&self, specs: &ForgeSpecs) -> bool {
        match self {
            Formula::RearDoorSize => specs.doors.has_rear_door(),
            _ => true,
        }
    }

    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }
}

// ============================================================================
// Typst Appendix
// ============================================================================

/// "Formulas Used" appendix for the build guide, with this design's values.
pub fn formulas_appendix_typst(specs: &ForgeSpecs) -> String {
    let mut output = String::new();

    output.push_str(r##"
#pagebreak()
#set heading(numbering: none)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Appendix: Formulas Used]
  ]
]

#v(12pt)

#text(size: 10pt)[
  Every dimension and quantity in this guide comes from the heuristics below.
  Values are for this design. Rounding is half away from zero.
]

#v(16pt)
"##);

    for category in FormulaCategory::all() {
        let formulas: Vec<Formula> = Formula::in_category(category)
            .into_iter()
            .filter(|f| f.applies_to(specs))
            .collect();
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("\n== {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();
            output.push_str(&format!("=== {}\n\n", meta.name));
            output.push_str(&format!("#text(size: 10pt)[{}]\n\n", escape_typst(meta.description)));
            output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
            output.push_str(&format!(
                "*This design:* {}\n\n",
                escape_typst(&formula.value_for(specs))
            ));

            if !meta.variables.is_empty() {
                output.push_str("#table(\n");
                output.push_str("  columns: (auto, 1fr, auto),\n");
                output.push_str("  inset: 6pt,\n");
                output.push_str("  stroke: 0.5pt,\n");
                output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "  [${}$], [{}], [{}],\n",
                        var.symbol,
                        escape_typst(var.description),
                        escape_typst(var.units)
                    ));
                }
                output.push_str(")\n\n");
            }

            if !meta.assumptions.is_empty() {
                output.push_str("*Assumptions:*\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", escape_typst(assumption)));
                }
                output.push('\n');
            }

            output.push_str("#v(6pt)\n#line(length: 100%, stroke: 0.25pt + gray)\n#v(6pt)\n\n");
        }
    }

    output
}

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Full `FORMULAS.md`, with a worked example for the default chamber.
///
/// ```rust
/// use forge_core::formulas::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("Forge Designer Formula Reference"));
/// assert!(markdown.contains("## Ribbon Burner"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Forge Designer Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every heuristic the calculator applies, grouped by subsystem. Dimensions are
inches, volumes cubic inches. All rounding is half away from zero.

| Symbol | Meaning |
|--------|---------|
| w, h, l | Internal chamber width, height, length |
| t | Insulation thickness |
| W, H, L | External shell width, height, length |
| V | Internal volume |

---

"#);

    // Worked example values; the timestamp is irrelevant to every formula
    let example = compute_specs_at(&ChamberInput::default(), chrono::DateTime::default());
    let categories = FormulaCategory::all();

    for category in &categories {
        let formulas = Formula::in_category(*category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();
            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| `{}` | {} | {} |\n",
                        var.symbol.replace('"', ""),
                        var.description,
                        var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Default chamber (6 x 6 x 14, 2\" insulation):** {}\n\n",
                formula.value_for(&example)
            ));
            output.push_str(&format!(
                "**Source:** [`{}`](src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories.len()
    ));

    output
}
