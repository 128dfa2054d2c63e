//! # Error Types
//!
//! Structured error types for forge_core. The specs calculator itself never
//! fails; these errors come from the layers around it (input collection,
//! design files, export and report rendering).
//!
//! ## Example
//!
//! ```rust
//! use forge_core::errors::{ForgeError, ForgeResult};
//!
//! fn check_width(width_in: f64) -> ForgeResult<()> {
//!     if width_in <= 0.0 {
//!         return Err(ForgeError::InvalidInput {
//!             field: "width_in".to_string(),
//!             value: width_in.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for forge_core operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Structured error type for everything outside the pure calculator.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ForgeError {
    /// An input value violates the calculator precondition (zero, negative, non-finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A prompt answer could not be parsed as a number
    #[error("Invalid numeric input for '{field}': '{entry}' is not a number")]
    InvalidNumericInput { field: String, entry: String },

    /// Design file could not be parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Typst compilation or PDF export failed
    #[error("Render failed during {stage}: {reason}")]
    RenderFailed { stage: String, reason: String },
}

impl ForgeError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ForgeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidNumericInput error
    pub fn invalid_numeric(field: impl Into<String>, entry: impl Into<String>) -> Self {
        ForgeError::InvalidNumericInput {
            field: field.into(),
            entry: entry.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ForgeError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ForgeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        ForgeError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by what the user typed or wrote in a
    /// design file (as opposed to the filesystem or the renderer)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ForgeError::InvalidInput { .. }
                | ForgeError::InvalidNumericInput { .. }
                | ForgeError::ConfigError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ForgeError::InvalidInput { .. } => "INVALID_INPUT",
            ForgeError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            ForgeError::ConfigError { .. } => "CONFIG_ERROR",
            ForgeError::FileError { .. } => "FILE_ERROR",
            ForgeError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ForgeError::RenderFailed { .. } => "RENDER_FAILED",
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(e: serde_json::Error) -> Self {
        ForgeError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ForgeError::invalid_input("width_in", "-5.0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: ForgeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ForgeError::invalid_numeric("width_in", "abc").error_code(),
            "INVALID_NUMERIC_INPUT"
        );
        assert_eq!(ForgeError::config("forge.toml", "bad key").error_code(), "CONFIG_ERROR");
        assert_eq!(ForgeError::render_failed("compile", "bad").error_code(), "RENDER_FAILED");
    }

    #[test]
    fn test_numeric_error_message() {
        let error = ForgeError::invalid_numeric("length_in", "fourteen");
        assert_eq!(
            error.to_string(),
            "Invalid numeric input for 'length_in': 'fourteen' is not a number"
        );
        assert!(error.is_user_error());
        assert!(!ForgeError::file_error("write", "/tmp/x", "denied").is_user_error());
    }
}
