//! # Forge Design Calculations
//!
//! [`compute_specs`] maps a [`ChamberInput`] to a complete [`ForgeSpecs`]
//! record. It is a pure function of the input and the fixed constants in
//! each sub-module; only `generated_timestamp` varies between calls.
//!
//! Sub-calculations run in dependency order:
//!
//! 1. [`envelope`] - internal volume and external dimensions
//! 2. [`burner`] - ribbon burner port layout
//! 3. [`airflow`] - blower CFM and static pressure
//! 4. [`doors`] - front/rear door openings
//! 5. [`refractory`] - castable, blanket and fire brick (needs the envelope)
//! 6. [`steel`] - plate and angle cut list (needs envelope and doors)
//! 7. [`cost`] - BTU load and materials cost (needs the bag count)
//!
//! ## Example
//!
//! ```rust
//! use forge_core::calculations::compute_specs;
//! use forge_core::input::{ChamberInput, DoorConfig};
//!
//! let specs = compute_specs(&ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly));
//! assert_eq!(specs.burner.burner_holes, 27);
//! assert_eq!(specs.airflow.cfm_recommended, 43);
//! assert_eq!(specs.cost.estimated_cost_usd, 371.0);
//! ```
//!
//! ## JSON
//!
//! The groups are flattened, so the export is one flat object with the
//! cut list as the only nested value:
//!
//! ```json
//! {
//!   "width_in": 6.0, "height_in": 6.0, "length_in": 14.0,
//!   "insulation_in": 2.0, "door_config": "front_only",
//!   "internal_volume_ci": 504.0, "external_width_in": 10.5, ...
//!   "burner_holes": 27, "holes_per_row": 9, "rows": 3, ...
//!   "static_pressure": "3.0",
//!   "steel_cut_list": { "plates": [...], "angle_iron": [...] },
//!   "btu_required": 226800, "estimated_cost_usd": 371.0,
//!   "generated_timestamp": "2025-01-15T10:30:00Z"
//! }
//! ```

pub mod airflow;
pub mod burner;
pub mod cost;
pub mod doors;
pub mod envelope;
pub mod refractory;
pub mod steel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::ChamberInput;

pub use airflow::{Airflow, StaticPressure};
pub use burner::{BurnerGeometry, HolePattern};
pub use cost::CostEstimate;
pub use doors::DoorSizing;
pub use envelope::Envelope;
pub use refractory::RefractoryQuantities;
pub use steel::{AngleCut, PlateCut, SteelCutList};

/// Every derived parameter of a forge design.
///
/// Created in one step by [`compute_specs`] and never mutated afterwards;
/// renderers and exporters read it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeSpecs {
    #[serde(flatten)]
    pub input: ChamberInput,
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub burner: BurnerGeometry,
    #[serde(flatten)]
    pub airflow: Airflow,
    #[serde(flatten)]
    pub doors: DoorSizing,
    #[serde(flatten)]
    pub refractory: RefractoryQuantities,
    pub steel_cut_list: SteelCutList,
    #[serde(flatten)]
    pub cost: CostEstimate,
    pub generated_timestamp: DateTime<Utc>,
}

impl ForgeSpecs {
    /// Internal volume truncated to whole cubic inches, as used in file names
    pub fn volume_label(&self) -> u64 {
        self.envelope.internal_volume_ci as u64
    }

    /// Same record without the timestamp, for comparing two runs
    pub fn without_timestamp(&self) -> ForgeSpecs {
        ForgeSpecs {
            generated_timestamp: DateTime::<Utc>::default(),
            ..self.clone()
        }
    }
}

/// Compute a full design stamped with the current time.
///
/// # Panics
///
/// Panics if any dimension is zero, negative or not finite. Callers validate
/// with [`ChamberInput::check_precondition`] first.
pub fn compute_specs(input: &ChamberInput) -> ForgeSpecs {
    compute_specs_at(input, Utc::now())
}

/// Compute a full design with an explicit timestamp.
///
/// # Panics
///
/// Same precondition as [`compute_specs`].
pub fn compute_specs_at(input: &ChamberInput, generated_timestamp: DateTime<Utc>) -> ForgeSpecs {
    assert!(
        input.check_precondition().is_ok(),
        "chamber dimensions must be finite and positive: {input:?}"
    );

    let envelope = envelope::calculate(input);
    let burner = burner::calculate(envelope.internal_volume_ci);
    let airflow = airflow::calculate(envelope.internal_volume_ci);
    let doors = doors::calculate(input);
    let refractory = refractory::calculate(&envelope, input.door_config);
    let steel_cut_list = steel::calculate(&envelope, &doors);
    let cost = cost::calculate(envelope.internal_volume_ci, refractory.refractory_bags);

    ForgeSpecs {
        input: *input,
        envelope,
        burner,
        airflow,
        doors,
        refractory,
        steel_cut_list,
        cost,
        generated_timestamp,
    }
}
