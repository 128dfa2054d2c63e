//! # forge_core - Ribbon Burner Forge Design Engine
//!
//! `forge_core` turns four chamber dimensions and a door layout into a
//! complete set of build specifications for a bolted, propane-fired ribbon
//! burner forge: external envelope, burner geometry, blower sizing, door
//! openings, refractory and steel quantities, cost and heat requirement.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine is a pure function of its input
//! - **JSON-First**: the design record serializes to a flat JSON object
//! - **Rich Errors**: structured error types, not just strings
//! - **Advisory Validation**: range checks warn; only non-positive or
//!   non-finite dimensions are rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use forge_core::{compute_specs, ChamberInput, DoorConfig};
//!
//! let input = ChamberInput::new(6.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly);
//! input.check_precondition()?;
//!
//! let specs = compute_specs(&input);
//! assert_eq!(specs.burner.burner_holes, 27);
//! assert_eq!(specs.airflow.cfm_recommended, 43);
//!
//! let json = serde_json::to_string_pretty(&specs)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Chamber dimensions, door layout, precondition and range checks
//! - [`calculations`] - The specs calculator and its per-system groups
//! - [`materials`] - Refractory and steel stock the quantities are sized for
//! - [`formulas`] - Registry of every heuristic, for the guide and `FORMULAS.md`
//! - [`config`] - TOML design files
//! - [`export`] - Atomic JSON and PDF writes
//! - [`report`] - Typst build guide rendering
//! - [`units`] - Rounding and unit formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod errors;
pub mod export;
pub mod formulas;
pub mod input;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_specs, compute_specs_at, ForgeSpecs};
pub use config::{load_config, DesignConfig};
pub use errors::{ForgeError, ForgeResult};
pub use export::{json_file_name, pdf_file_name, save_pdf, save_specs_json};
pub use input::{validate_ranges, ChamberInput, DoorConfig, InputWarning};
pub use report::{render_build_guide, ReportOptions};
