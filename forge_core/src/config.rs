//! # Design Files
//!
//! A design can be given as a TOML file instead of answering prompts:
//!
//! ```toml
//! [chamber]
//! width = 8.0
//! height = 6.0
//! length = 18.0
//! insulation = 2.0
//! door = "front_and_rear"
//!
//! [output]
//! directory = "build"
//! json = true
//! pdf = true
//!
//! [report]
//! formulas_appendix = true
//! ```
//!
//! Every key is optional. Missing chamber values fall back to the
//! interactive defaults (6 x 6 x 14, 2" insulation, front door only).
//! Unknown keys are rejected so typos don't silently fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ForgeError, ForgeResult};
use crate::input::{ChamberInput, DoorConfig};

/// Chamber dimensions as written in a design file
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChamberSection {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub insulation: Option<f64>,
    pub door: Option<DoorConfig>,
}

impl ChamberSection {
    /// True when no chamber key is set
    pub fn is_empty(&self) -> bool {
        *self == ChamberSection::default()
    }

    /// Resolve against the interactive defaults.
    pub fn to_input(&self) -> ChamberInput {
        let defaults = ChamberInput::default();
        ChamberInput {
            width_in: self.width.unwrap_or(defaults.width_in),
            height_in: self.height.unwrap_or(defaults.height_in),
            length_in: self.length.unwrap_or(defaults.length_in),
            insulation_in: self.insulation.unwrap_or(defaults.insulation_in),
            door_config: self.door.unwrap_or(defaults.door_config),
        }
    }

    /// Layer `other` on top: keys set in `other` win.
    pub fn merged_with(&self, other: &ChamberSection) -> ChamberSection {
        ChamberSection {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            length: other.length.or(self.length),
            insulation: other.insulation.or(self.insulation),
            door: other.door.or(self.door),
        }
    }
}

/// Where and what to write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub directory: PathBuf,
    /// Write `forge_specs_<V>ci.json`
    pub json: bool,
    /// Write `Forge_Build_Guide_<V>ci.pdf`
    pub pdf: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        OutputSection {
            directory: PathBuf::from("."),
            json: false,
            pdf: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    /// Append the formula appendix to the build guide
    pub formulas_appendix: bool,
}

/// A complete design file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignConfig {
    pub chamber: ChamberSection,
    pub output: OutputSection,
    pub report: ReportSection,
}

impl DesignConfig {
    /// Parse TOML text. `origin` names the source in error messages.
    pub fn from_toml_str(text: &str, origin: &str) -> ForgeResult<Self> {
        toml::from_str(text).map_err(|e| ForgeError::config(origin, e.message()))
    }

    pub fn to_toml_string(&self) -> ForgeResult<String> {
        toml::to_string_pretty(self).map_err(|e| ForgeError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Read and parse a design file.
pub fn load_config(path: &Path) -> ForgeResult<DesignConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| ForgeError::file_error("read", path.display().to_string(), e.to_string()))?;
    let config = DesignConfig::from_toml_str(&text, &path.display().to_string())?;
    debug!(path = %path.display(), chamber_set = !config.chamber.is_empty(), "loaded design file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DesignConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config, DesignConfig::default());
        assert!(config.chamber.is_empty());
        assert_eq!(config.chamber.to_input(), ChamberInput::default());
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert!(config.output.pdf);
        assert!(!config.output.json);
        assert!(!config.report.formulas_appendix);
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            [chamber]
            width = 8.0
            height = 6
            length = 18.0
            insulation = 2.5
            door = "front_and_rear"

            [output]
            directory = "build"
            json = true
            pdf = false

            [report]
            formulas_appendix = true
        "#;
        let config = DesignConfig::from_toml_str(text, "inline").unwrap();
        let input = config.chamber.to_input();
        assert_eq!(input, ChamberInput::new(8.0, 6.0, 18.0, 2.5, DoorConfig::FrontAndRear));
        assert_eq!(config.output.directory, PathBuf::from("build"));
        assert!(config.output.json);
        assert!(!config.output.pdf);
        assert!(config.report.formulas_appendix);
    }

    #[test]
    fn test_partial_chamber_fills_defaults() {
        let config = DesignConfig::from_toml_str("[chamber]\nlength = 24.0\n", "inline").unwrap();
        assert!(!config.chamber.is_empty());
        let input = config.chamber.to_input();
        assert_eq!(input.length_in, 24.0);
        assert_eq!(input.width_in, 6.0);
        assert_eq!(input.door_config, DoorConfig::FrontOnly);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DesignConfig::from_toml_str("[chamber]\nwidht = 8.0\n", "forge.toml").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("forge.toml"));
    }

    #[test]
    fn test_bad_door_rejected() {
        let err = DesignConfig::from_toml_str("[chamber]\ndoor = \"top\"\n", "inline").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = ChamberSection {
            width: Some(8.0),
            length: Some(20.0),
            ..Default::default()
        };
        let flags = ChamberSection {
            width: Some(10.0),
            door: Some(DoorConfig::SideLoading),
            ..Default::default()
        };
        let merged = file.merged_with(&flags);
        assert_eq!(merged.width, Some(10.0));
        assert_eq!(merged.length, Some(20.0));
        assert_eq!(merged.door, Some(DoorConfig::SideLoading));
        assert_eq!(merged.height, None);
    }

    #[test]
    fn test_load_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chamber]\nwidth = 4.0\n[output]\njson = true").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.chamber.width, Some(4.0));
        assert!(config.output.json);
        assert!(config.output.pdf);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/forge.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DesignConfig {
            chamber: ChamberSection {
                width: Some(7.0),
                door: Some(DoorConfig::FrontAndRear),
                ..Default::default()
            },
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(DesignConfig::from_toml_str(&text, "inline").unwrap(), config);
    }
}
