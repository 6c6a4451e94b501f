//! # Reaction Vector
//!
//! The twelve unknowns solved by the static-equilibrium step: four bending
//! integration constants, the twist integration constant, six hinge force
//! components and the actuator I load.
//!
//! | index | meaning                                   |
//! |-------|-------------------------------------------|
//! | 0, 1  | v(x) integration constants: R0·x + R1     |
//! | 2, 3  | w(x) integration constants: R2·x + R3     |
//! | 4     | twist integration constant φ₀             |
//! | 5, 6  | hinge 1 force (z-shear, y-shear parts)    |
//! | 7, 8  | hinge 2 force (z-shear, y-shear parts)    |
//! | 9, 10 | hinge 3 force (z-shear, y-shear parts)    |
//! | 11    | actuator I load along the actuator line   |
//!
//! ## Cache file
//!
//! Solving for the reactions is done elsewhere; the result is commonly kept
//! in a small text file so later runs can skip the solve:
//!
//! ```text
//! # reaction forces, 12 values
//! 1.0e-3,2.0e-4,...,1.2e4
//! ```
//!
//! `#` starts a comment (whole line or trailing), blank lines are ignored,
//! and exactly one data row of 12 comma-separated numbers must remain.

use std::fs;
use std::ops::Index;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::file_io::write_atomic;

/// Number of unknowns in a reaction vector
pub const REACTION_COUNT: usize = 12;

pub const V_SLOPE: usize = 0;
pub const V_OFFSET: usize = 1;
pub const W_SLOPE: usize = 2;
pub const W_OFFSET: usize = 3;
pub const TWIST_OFFSET: usize = 4;
pub const HINGE_1_Z: usize = 5;
pub const HINGE_1_Y: usize = 6;
pub const HINGE_2_Z: usize = 7;
pub const HINGE_2_Y: usize = 8;
pub const HINGE_3_Z: usize = 9;
pub const HINGE_3_Y: usize = 10;
pub const ACTUATOR_I: usize = 11;

/// Solved reaction/actuator loads and integration constants.
///
/// The length is fixed by the type, so an evaluator can never index past
/// the end; wrongly sized data is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionVector([f64; REACTION_COUNT]);

impl ReactionVector {
    /// Wrap a fixed-size array
    pub fn new(values: [f64; REACTION_COUNT]) -> Self {
        ReactionVector(values)
    }

    /// Build from a slice, failing fast unless it holds exactly 12 values.
    ///
    /// ```rust
    /// use aileron_core::reactions::ReactionVector;
    ///
    /// assert!(ReactionVector::from_slice(&[0.0; 12]).is_ok());
    /// let err = ReactionVector::from_slice(&[0.0; 11]).unwrap_err();
    /// assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    /// ```
    pub fn from_slice(values: &[f64]) -> CalcResult<Self> {
        let array: [f64; REACTION_COUNT] = values
            .try_into()
            .map_err(|_| CalcError::dimension_mismatch("reaction vector", REACTION_COUNT, values.len()))?;
        Ok(ReactionVector(array))
    }

    /// Raw values in index order
    pub fn as_array(&self) -> &[f64; REACTION_COUNT] {
        &self.0
    }

    /// (R0, R1): v(x) = … + R0·x + R1
    pub fn v_constants(&self) -> (f64, f64) {
        (self.0[V_SLOPE], self.0[V_OFFSET])
    }

    /// (R2, R3): w(x) = … + R2·x + R3
    pub fn w_constants(&self) -> (f64, f64) {
        (self.0[W_SLOPE], self.0[W_OFFSET])
    }

    /// R4: φ(x) = … + R4
    pub fn twist_constant(&self) -> f64 {
        self.0[TWIST_OFFSET]
    }

    /// Hinge force components feeding S_z (R5, R7, R9)
    pub fn hinge_z(&self) -> [f64; 3] {
        [self.0[HINGE_1_Z], self.0[HINGE_2_Z], self.0[HINGE_3_Z]]
    }

    /// Hinge force components feeding S_y (R6, R8, R10)
    pub fn hinge_y(&self) -> [f64; 3] {
        [self.0[HINGE_1_Y], self.0[HINGE_2_Y], self.0[HINGE_3_Y]]
    }

    /// R11: actuator I load
    pub fn actuator(&self) -> f64 {
        self.0[ACTUATOR_I]
    }

    /// Parse a reaction cache file.
    ///
    /// # Errors
    ///
    /// * `FileError` - the file cannot be read
    /// * `MalformedData` - no data row, several data rows, a bad number or
    ///   a row that does not hold exactly 12 values
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read reaction cache", path.display().to_string(), e.to_string()))?;
        let vector = Self::parse(&contents, &path.display().to_string())?;
        debug!("loaded reaction vector from {}", path.display());
        Ok(vector)
    }

    fn parse(contents: &str, source: &str) -> CalcResult<Self> {
        let mut row: Option<(usize, Vec<f64>)> = None;

        for (index, raw) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if row.is_some() {
                return Err(CalcError::malformed_data(source, line_no, "expected a single data row"));
            }

            let values = line
                .split(',')
                .map(|field| {
                    let field = field.trim();
                    field.parse::<f64>().map_err(|e| {
                        CalcError::malformed_data(source, line_no, format!("'{}' is not a number: {}", field, e))
                    })
                })
                .collect::<CalcResult<Vec<f64>>>()?;
            row = Some((line_no, values));
        }

        let (line_no, values) = row.ok_or_else(|| CalcError::malformed_data(source, 0, "no data row"))?;
        if values.len() != REACTION_COUNT {
            return Err(CalcError::malformed_data(
                source,
                line_no,
                format!("expected {} values, found {}", REACTION_COUNT, values.len()),
            ));
        }
        Self::from_slice(&values)
    }

    /// Write the vector as a cache file (atomic: temp file, fsync, rename).
    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let row = self
            .0
            .iter()
            .map(|v| format!("{:e}", v))
            .collect::<Vec<_>>()
            .join(",");
        let contents = format!(
            "# Reaction forces and integration constants\n\
             # R0..R3 bending constants, R4 twist constant, R5..R10 hinge forces, R11 actuator I\n\
             {}\n",
            row
        );

        write_atomic(path, &contents)?;
        debug!("saved reaction vector to {}", path.display());
        Ok(())
    }
}

impl Index<usize> for ReactionVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; REACTION_COUNT]> for ReactionVector {
    fn from(values: [f64; REACTION_COUNT]) -> Self {
        ReactionVector(values)
    }
}

/// Read the reaction cache, or fall back to `solver` when the cache is
/// missing or unreadable.
///
/// Only recoverable cache errors trigger the fallback; anything else, and
/// any error from the solver itself, is returned to the caller.
///
/// ```rust
/// use std::path::Path;
/// use aileron_core::reactions::{load_or_compute, ReactionVector};
///
/// let r = load_or_compute(Path::new("does/not/exist.dat"), || {
///     Ok(ReactionVector::new([1.0; 12]))
/// })
/// .unwrap();
/// assert_eq!(r.actuator(), 1.0);
/// ```
pub fn load_or_compute<F>(path: &Path, solver: F) -> CalcResult<ReactionVector>
where
    F: FnOnce() -> CalcResult<ReactionVector>,
{
    match ReactionVector::load(path) {
        Ok(vector) => Ok(vector),
        Err(e) if e.is_recoverable() => {
            warn!("reaction cache unusable ({}), recomputing", e);
            solver()
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ReactionVector {
        ReactionVector::new([
            1.5e-3, -2.0e-3, 4.0e-4, 7.5e-3, 1.0e-2, 1.2e4, -3.4e4, 5.6e4, 7.8e4, -9.0e3, 1.1e4, 2.2e5,
        ])
    }

    #[test]
    fn test_accessors_follow_index_table() {
        let r = sample();
        assert_eq!(r.v_constants(), (1.5e-3, -2.0e-3));
        assert_eq!(r.w_constants(), (4.0e-4, 7.5e-3));
        assert_eq!(r.twist_constant(), 1.0e-2);
        assert_eq!(r.hinge_z(), [1.2e4, 5.6e4, -9.0e3]);
        assert_eq!(r.hinge_y(), [-3.4e4, 7.8e4, 1.1e4]);
        assert_eq!(r.actuator(), 2.2e5);
        assert_eq!(r[ACTUATOR_I], 2.2e5);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = ReactionVector::from_slice(&[0.0; 13]).unwrap_err();
        assert_eq!(err, CalcError::dimension_mismatch("reaction vector", 12, 13));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_parse_with_comments() {
        let text = "# header\n\n1,2,3,4,5,6,7,8,9,10,11,12  # trailing\n# footer\n";
        let r = ReactionVector::parse(text, "mem").unwrap();
        assert_eq!(r.as_array()[0], 1.0);
        assert_eq!(r.actuator(), 12.0);
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = ReactionVector::parse("1,2,3", "mem").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_DATA");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_parse_rejects_two_rows() {
        let row = "1,2,3,4,5,6,7,8,9,10,11,12";
        let err = ReactionVector::parse(&format!("{}\n{}\n", row, row), "mem").unwrap_err();
        assert_eq!(err, CalcError::malformed_data("mem", 2, "expected a single data row"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ReactionVector::parse("1,2,three,4,5,6,7,8,9,10,11,12", "mem").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_DATA");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ReactionVector::parse("# nothing here\n", "mem").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactionForces.dat");

        sample().save(&path).unwrap();
        assert!(!path.with_extension("dat.tmp").exists());

        let loaded = ReactionVector::load(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_load_or_compute_prefers_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactionForces.dat");
        sample().save(&path).unwrap();

        let r = load_or_compute(&path, || panic!("solver must not run")).unwrap();
        assert_eq!(r, sample());
    }

    #[test]
    fn test_load_or_compute_falls_back_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.dat");

        let r = load_or_compute(&path, || Ok(sample())).unwrap();
        assert_eq!(r, sample());
    }

    #[test]
    fn test_load_or_compute_falls_back_on_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.dat");
        fs::write(&path, "not,a,vector\n").unwrap();

        let r = load_or_compute(&path, || Ok(sample())).unwrap();
        assert_eq!(r, sample());
    }

    #[test]
    fn test_load_or_compute_propagates_solver_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.dat");

        let err = load_or_compute(&path, || {
            Err(CalcError::calculation_failed("equilibrium", "singular system"))
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_json_is_plain_array() {
        let json = serde_json::to_string(&ReactionVector::new([0.0; 12])).unwrap();
        assert_eq!(json, "[0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]");
    }
}
