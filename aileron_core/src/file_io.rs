//! # File I/O Module
//!
//! Handles case and report files with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Cases and reports are pretty-printed JSON. The reaction cache has its own
//! text format (see [`crate::reactions`]) but is written through the same
//! atomic path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aileron_core::case::AnalysisCase;
//! use aileron_core::file_io::{load_case, save_case};
//! use std::path::Path;
//!
//! let case = AnalysisCase::new("Analyst", "A320 baseline");
//! let path = Path::new("baseline.json");
//!
//! save_case(&case, path).unwrap();
//! let loaded = load_case(path).unwrap();
//! assert_eq!(loaded.meta.id, case.meta.id);
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::case::{AnalysisCase, SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};
use crate::report::AnalysisReport;

/// Temp file used while saving `path`: the full file name plus `.tmp`.
pub(crate) fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` with atomic write semantics.
///
/// The save process:
/// 1. Write to a temporary file next to the target
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub(crate) fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
}

/// Save a case to a JSON file.
///
/// # Example
///
/// ```rust,no_run
/// use aileron_core::case::AnalysisCase;
/// use aileron_core::file_io::save_case;
/// use std::path::Path;
///
/// let case = AnalysisCase::new("Analyst", "A320 baseline");
/// save_case(&case, Path::new("baseline.json"))?;
/// # Ok::<(), aileron_core::errors::CalcError>(())
/// ```
pub fn save_case(case: &AnalysisCase, path: &Path) -> CalcResult<()> {
    write_atomic(path, &to_json(case)?)?;
    debug!("saved case '{}' to {}", case.meta.label, path.display());
    Ok(())
}

/// Load a case from a JSON file.
///
/// # Returns
///
/// * `Ok(AnalysisCase)` - Successfully loaded case
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_case(path: &Path) -> CalcResult<AnalysisCase> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let case: AnalysisCase = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&case.meta.version)?;

    debug!("loaded case '{}' from {}", case.meta.label, path.display());
    Ok(case)
}

/// Save an analysis report as JSON.
pub fn save_report(report: &AnalysisReport, path: &Path) -> CalcResult<()> {
    write_atomic(path, &to_json(report)?)?;
    debug!("saved report to {}", path.display());
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| v.split('.').map(|p| p.parse::<u32>().ok()).collect::<Option<Vec<u32>>>();
    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    // Major version must match
    if file_parts.first() != current_parts.first() {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version is not readable
    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
