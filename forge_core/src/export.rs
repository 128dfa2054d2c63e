//! # Export
//!
//! Writes the design record as JSON and the rendered build guide as PDF.
//!
//! - **Atomic saves**: write to `.tmp`, sync, rename, so an interrupted run
//!   never leaves a truncated file behind
//! - **Volume-tagged names**: `forge_specs_504ci.json`,
//!   `Forge_Build_Guide_504ci.pdf`
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_core::calculations::compute_specs;
//! use forge_core::export::{json_file_name, load_specs_json, save_specs_json};
//! use forge_core::input::ChamberInput;
//! use std::path::Path;
//!
//! let specs = compute_specs(&ChamberInput::default());
//! let path = Path::new(".").join(json_file_name(&specs));
//! save_specs_json(&specs, &path)?;
//! assert_eq!(load_specs_json(&path)?, specs);
//! # Ok::<(), forge_core::errors::ForgeError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::calculations::ForgeSpecs;
use crate::errors::{ForgeError, ForgeResult};

/// `forge_specs_<V>ci.json`, V truncated to whole cubic inches
pub fn json_file_name(specs: &ForgeSpecs) -> String {
    format!("forge_specs_{}ci.json", specs.volume_label())
}

/// `Forge_Build_Guide_<V>ci.pdf`, V truncated to whole cubic inches
pub fn pdf_file_name(specs: &ForgeSpecs) -> String {
    format!("Forge_Build_Guide_{}ci.pdf", specs.volume_label())
}

/// Save the design record as pretty-printed JSON.
pub fn save_specs_json(specs: &ForgeSpecs, path: &Path) -> ForgeResult<()> {
    let json = serde_json::to_string_pretty(specs)?;
    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), "saved design JSON");
    Ok(())
}

/// Save rendered PDF bytes.
pub fn save_pdf(pdf_bytes: &[u8], path: &Path) -> ForgeResult<()> {
    write_atomic(path, pdf_bytes)?;
    info!(path = %path.display(), bytes = pdf_bytes.len(), "saved build guide");
    Ok(())
}

/// Load a design record written by [`save_specs_json`].
pub fn load_specs_json(path: &Path) -> ForgeResult<ForgeSpecs> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ForgeError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| ForgeError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write to `<path>.tmp`, sync, then rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> ForgeResult<()> {
    let tmp_path = tmp_path_for(path);
    debug!(tmp = %tmp_path.display(), bytes = bytes.len(), "atomic write");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        ForgeError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        ForgeError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        ForgeError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ForgeError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
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
    fn test_file_names_embed_volume() {
        let specs = default_specs();
        assert_eq!(json_file_name(&specs), "forge_specs_504ci.json");
        assert_eq!(pdf_file_name(&specs), "Forge_Build_Guide_504ci.pdf");

        let odd = compute_specs(&ChamberInput::new(6.5, 6.5, 10.0, 2.0, DoorConfig::FrontOnly));
        assert_eq!(json_file_name(&odd), "forge_specs_422ci.json");
    }

    #[test]
    fn test_tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("/out/forge_specs_504ci.json")),
            Path::new("/out/forge_specs_504ci.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let specs = compute_specs(&ChamberInput::new(8.0, 6.0, 18.0, 2.0, DoorConfig::FrontAndRear));
        let path = dir.path().join(json_file_name(&specs));

        save_specs_json(&specs, &path).unwrap();
        assert!(!tmp_path_for(&path).exists(), "temp file left behind");

        let loaded = load_specs_json(&path).unwrap();
        assert_eq!(loaded, specs);
    }

    #[test]
    fn test_full_precision_dimensions_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let input = ChamberInput::new(
            29.827171992443546,
            7.123456789012345,
            13.987654321098765,
            1.8660254037844386,
            DoorConfig::SideLoading,
        );
        let specs = compute_specs(&input);
        let path = dir.path().join(json_file_name(&specs));

        save_specs_json(&specs, &path).unwrap();
        let loaded = load_specs_json(&path).unwrap();
        assert_eq!(loaded.input.width_in.to_bits(), input.width_in.to_bits());
        assert_eq!(
            loaded.envelope.internal_volume_ci.to_bits(),
            specs.envelope.internal_volume_ci.to_bits()
        );
        assert_eq!(loaded, specs);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.pdf");
        save_pdf(b"%PDF-old", &path).unwrap();
        save_pdf(b"%PDF-new", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-new");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("forge_specs_504ci.json");
        let err = save_specs_json(&default_specs(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_specs_json(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
