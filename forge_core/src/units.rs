//! # Units and Rounding
//!
//! Forge Designer works in US customary units throughout:
//! - Length: inches (in)
//! - Volume: cubic inches (ci), cubic feet (cf)
//! - Area: square inches (in²), square feet (sq ft)
//! - Mass: pounds (lb)
//! - Airflow: cubic feet per minute (CFM)
//! - Heat: BTU
//!
//! All values stay plain `f64` so the JSON export is a flat document of
//! numbers; unit suffixes on field names (`_in`, `_ci`, `_lb`, `_sqft`) carry
//! the unit instead of newtypes.
//!
//! ## Rounding
//!
//! Every rounding step in the calculator is round-half-away-from-zero, the
//! behavior of [`f64::round`]. `round_to(8.25, 1)` is `8.3` and
//! `round_count(42.5)` is `43`.
//!
//! ```rust
//! use forge_core::units::{round_to, cubic_inches_to_cubic_feet};
//!
//! assert_eq!(round_to(8.25, 1), 8.3);
//! assert_eq!(cubic_inches_to_cubic_feet(1728.0), 1.0);
//! ```

/// Cubic inches in one cubic foot
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

/// Square inches in one square foot
pub const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = 144.0;

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest whole count, half away from zero.
///
/// Negative and NaN values saturate to 0; the calculator only ever passes
/// positive quantities.
pub fn round_count(value: f64) -> u32 {
    value.round() as u32
}

/// Convert cubic inches to cubic feet
pub fn cubic_inches_to_cubic_feet(ci: f64) -> f64 {
    ci / CUBIC_INCHES_PER_CUBIC_FOOT
}

/// Convert square inches to square feet
pub fn square_inches_to_square_feet(sq_in: f64) -> f64 {
    sq_in / SQUARE_INCHES_PER_SQUARE_FOOT
}

/// Format a length for cut lists and reports: one decimal and an inch mark.
pub fn format_inches(value: f64) -> String {
    format!("{:.1}\"", value)
}

/// Format with at most `decimals` places and no trailing zeros (504.0 -> "504").
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Format a whole number with thousands separators (226800 -> "226,800").
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
