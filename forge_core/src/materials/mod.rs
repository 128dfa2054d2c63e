//! # Materials
//!
//! Fixed material properties the calculator sizes against.
//!
//! - [`refractory`] - castable refractory, ceramic fiber blanket, insulating fire brick
//! - [`steel`] - plate and angle iron stock for the bolted shell
//!
//! ## Example
//!
//! ```rust
//! use forge_core::materials::{KAST_O_LITE_30, PLATE_STOCK};
//!
//! assert_eq!(KAST_O_LITE_30.density_lb_per_cf, 92.0);
//! assert_eq!(PLATE_STOCK.thickness_label, "1/4\"");
//! ```

pub mod refractory;
pub mod steel;

pub use refractory::{
    CastableRefractory, CERAMIC_BLANKET_THICKNESS_IN, IFB_FOOTPRINT_SQ_IN, KAST_O_LITE_30,
};
pub use steel::{AngleStock, PlateStock, ANGLE_STOCK, PLATE_STOCK, SQUARE_TUBE_SIDE_IN};
