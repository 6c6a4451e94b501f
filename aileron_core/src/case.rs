//! # Analysis Case
//!
//! The `AnalysisCase` is the root container for one analysis run: the
//! aileron description, the aerodynamic load model, where the solved
//! reactions come from and a few run settings. Cases serialize to
//! human-readable JSON (see [`crate::file_io`] for atomic saves).
//!
//! ## Structure
//!
//! ```text
//! AnalysisCase
//! ├── meta: CaseMetadata (version, id, analyst, label, timestamps)
//! ├── aileron: AileronInput (dimensions, materials, supports)
//! ├── aero: UniformAeroLoad
//! ├── reactions: ReactionSource (cache file and/or inline values)
//! ├── settings: AnalysisSettings (sampling)
//! └── verification: VerificationSettings (reference curves for V, W, φ)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use aileron_core::case::AnalysisCase;
//! use aileron_core::reactions::ReactionVector;
//!
//! let mut case = AnalysisCase::new("J. Analyst", "A320 baseline");
//! case.reactions.values = Some(ReactionVector::new([0.0; 12]));
//!
//! let report = case.run().unwrap();
//! assert_eq!(report.label, "A320 baseline");
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aero::{AeroIntegral, UniformAeroLoad};
use crate::calculations::{BeamSolution, MIN_SAMPLE_POINTS};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{AileronGeometry, AileronInput};
use crate::reactions::{load_or_compute, ReactionVector};
use crate::report::AnalysisReport;
use crate::verification::VerificationSettings;

/// Current schema version for case files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root analysis container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisCase {
    /// Case metadata (version, analyst, label)
    pub meta: CaseMetadata,

    /// Aileron dimensions, materials and supports
    #[serde(default)]
    pub aileron: AileronInput,

    /// Aerodynamic load model
    #[serde(default)]
    pub aero: UniformAeroLoad,

    /// Where the solved reaction vector comes from
    #[serde(default)]
    pub reactions: ReactionSource,

    /// Run settings
    #[serde(default)]
    pub settings: AnalysisSettings,

    /// Reference curves to check the solution against
    #[serde(default)]
    pub verification: VerificationSettings,
}

impl AnalysisCase {
    /// Create a case for the reference A320 aileron with no aerodynamic
    /// load and no reaction source yet.
    pub fn new(analyst: impl Into<String>, label: impl Into<String>) -> Self {
        let now = Utc::now();
        AnalysisCase {
            meta: CaseMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                analyst: analyst.into(),
                label: label.into(),
                created: now,
                modified: now,
            },
            aileron: AileronInput::a320(),
            aero: UniformAeroLoad::none(),
            reactions: ReactionSource::default(),
            settings: AnalysisSettings::default(),
            verification: VerificationSettings::default(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Validate the aileron input and derive its geometry.
    pub fn geometry(&self) -> CalcResult<AileronGeometry> {
        AileronGeometry::new(&self.aileron)
    }

    /// Resolve the reaction vector.
    ///
    /// With both a cache path and inline values, the cache is tried first
    /// and the inline values stand in for the equilibrium solver. A cache
    /// path alone must be readable; inline values alone are used directly.
    pub fn resolve_reactions(&self) -> CalcResult<ReactionVector> {
        match (&self.reactions.cache_path, self.reactions.values) {
            (Some(path), Some(values)) => load_or_compute(path, || Ok(values)),
            (Some(path), None) => ReactionVector::load(path),
            (None, Some(values)) => Ok(values),
            (None, None) => Err(CalcError::missing_field("reactions.values")),
        }
    }

    /// Derive the geometry and resolve the reactions.
    pub fn solve(&self) -> CalcResult<(AileronGeometry, ReactionVector)> {
        Ok((self.geometry()?, self.resolve_reactions()?))
    }

    /// Sample `solution`, run the configured verification checks and
    /// collect everything into a report.
    pub fn build_report<A: AeroIntegral>(&self, solution: &BeamSolution<'_, A>) -> CalcResult<AnalysisReport> {
        let results = solution.analyze(self.settings.effective_sample_points());
        let checks = self.verification.run(solution)?;
        Ok(AnalysisReport::new(self, solution, results, checks))
    }

    /// Run the full analysis and collect the results into a report.
    pub fn run(&self) -> CalcResult<AnalysisReport> {
        let (geometry, reactions) = self.solve()?;
        let solution = BeamSolution::new(&geometry, &reactions, self.aero);
        self.build_report(&solution)
    }
}

impl Default for AnalysisCase {
    fn default() -> Self {
        AnalysisCase::new("", "")
    }
}

/// Case metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Unique case identifier
    pub id: Uuid,

    /// Name of the responsible analyst
    pub analyst: String,

    /// Short description of the case
    pub label: String,

    /// When the case was created
    pub created: DateTime<Utc>,

    /// When the case was last modified
    pub modified: DateTime<Utc>,
}

/// Source of the solved reaction vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSource {
    /// Reaction cache file, tried first
    pub cache_path: Option<PathBuf>,

    /// Reaction values, used when there is no usable cache
    pub values: Option<ReactionVector>,
}

/// Run settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Evenly spaced stations along the span (minimum 11)
    pub sample_points: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings { sample_points: 100 }
    }
}

impl AnalysisSettings {
    /// Sample count actually used by the analysis
    pub fn effective_sample_points(&self) -> usize {
        self.sample_points.max(MIN_SAMPLE_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::{ReferenceCurve, VerifiedField};
    use tempfile::tempdir;

    fn reactions() -> ReactionVector {
        ReactionVector::new([
            -1.2e-3, 3.4e-3, 5.0e-4, -2.2e-3, 1.8e-2, 3.0e4, -2.0e4, 4.0e4, 1.0e4, -5.0e3, 6.0e3, 1.5e5,
        ])
    }

    #[test]
    fn test_case_creation() {
        let case = AnalysisCase::new("Jane Analyst", "baseline");
        assert_eq!(case.meta.analyst, "Jane Analyst");
        assert_eq!(case.meta.version, SCHEMA_VERSION);
        assert_eq!(case.aileron, AileronInput::a320());
        assert_eq!(case.settings.sample_points, 100);
    }

    #[test]
    fn test_case_serialization() {
        let mut case = AnalysisCase::new("Jane Analyst", "baseline");
        case.aero = UniformAeroLoad::new(5_500.0, 0.0);
        let json = serde_json::to_string_pretty(&case).unwrap();

        assert!(json.contains("Jane Analyst"));
        assert!(json.contains("\"sample_points\": 100"));

        let roundtrip: AnalysisCase = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.id, case.meta.id);
        assert_eq!(roundtrip.aero, case.aero);
    }

    #[test]
    fn test_sections_default_when_missing() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "analyst": "A",
                "label": "minimal",
                "created": "2026-01-01T00:00:00Z",
                "modified": "2026-01-01T00:00:00Z"
            }
        }"#;
        let case: AnalysisCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.aileron, AileronInput::a320());
        assert_eq!(case.reactions, ReactionSource::default());
        assert_eq!(case.verification, VerificationSettings::default());
    }

    #[test]
    fn test_resolve_without_source_fails() {
        let case = AnalysisCase::new("A", "no reactions");
        let err = case.resolve_reactions().unwrap_err();
        assert_eq!(err, CalcError::missing_field("reactions.values"));
    }

    #[test]
    fn test_resolve_prefers_cache_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactionForces.dat");
        reactions().save(&path).unwrap();

        let mut case = AnalysisCase::new("A", "cached");
        case.reactions.cache_path = Some(path);
        case.reactions.values = Some(ReactionVector::default());

        assert_eq!(case.resolve_reactions().unwrap(), reactions());
    }

    #[test]
    fn test_resolve_falls_back_to_inline_values() {
        let dir = tempdir().unwrap();
        let mut case = AnalysisCase::new("A", "fallback");
        case.reactions.cache_path = Some(dir.path().join("missing.dat"));
        case.reactions.values = Some(reactions());

        assert_eq!(case.resolve_reactions().unwrap(), reactions());
    }

    #[test]
    fn test_missing_cache_without_inline_values_is_file_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactionForces.dat");
        let mut case = AnalysisCase::new("A", "cache only");
        case.reactions.cache_path = Some(path.clone());

        let err = case.resolve_reactions().unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(err.to_string().contains("reactionForces.dat"));
    }

    #[test]
    fn test_malformed_cache_without_inline_values_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactionForces.dat");
        std::fs::write(&path, "1.0,2.0\n").unwrap();
        let mut case = AnalysisCase::new("A", "cache only");
        case.reactions.cache_path = Some(path);

        assert_eq!(case.resolve_reactions().unwrap_err().error_code(), "MALFORMED_DATA");
    }

    #[test]
    fn test_run_uses_effective_sample_points() {
        let mut case = AnalysisCase::new("A", "coarse");
        case.reactions.values = Some(reactions());
        case.settings.sample_points = 2;

        let report = case.run().unwrap();
        assert!(report.results.stations.len() >= MIN_SAMPLE_POINTS);
    }

    #[test]
    fn test_solve_and_build_report_match_run() {
        let mut case = AnalysisCase::new("A", "split");
        case.reactions.values = Some(reactions());
        case.aero = UniformAeroLoad::new(5_500.0, 0.0);

        let (geometry, r) = case.solve().unwrap();
        let solution = BeamSolution::new(&geometry, &r, case.aero);
        let report = case.build_report(&solution).unwrap();
        let direct = case.run().unwrap();

        assert_eq!(report.results.stations, direct.results.stations);
        assert_eq!(report.results.max_moment_z, direct.results.max_moment_z);
        assert_eq!(report.critical_section, direct.critical_section);
    }

    #[test]
    fn test_run_attaches_verification_checks() {
        let dir = tempdir().unwrap();
        let mut case = AnalysisCase::new("A", "verified");
        case.reactions.values = Some(reactions());

        let (geometry, r) = case.solve().unwrap();
        let solution = BeamSolution::new(&geometry, &r, case.aero);
        let x: Vec<f64> = (0..50).map(|i| geometry.span * i as f64 / 49.0).collect();
        let twist = x.iter().map(|&x| solution.twist(x)).collect();
        let curve = ReferenceCurve::new(x, twist).unwrap();
        let path = dir.path().join("defz.json");
        std::fs::write(&path, serde_json::to_string(&curve).unwrap()).unwrap();
        case.verification.twist = Some(path);

        let report = case.run().unwrap();
        assert_eq!(report.verification.len(), 1);
        assert_eq!(report.verification[0].field, VerifiedField::Twist);
        assert!(report.verification[0].passed);

        let json = serde_json::to_string(&case).unwrap();
        let roundtrip: AnalysisCase = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.verification, case.verification);
    }

    #[test]
    fn test_run_rejects_invalid_geometry() {
        let mut case = AnalysisCase::new("A", "bad");
        case.reactions.values = Some(reactions());
        case.aileron.stringer_count = 0;
        assert_eq!(case.run().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_effective_sample_points() {
        let settings = AnalysisSettings { sample_points: 3 };
        assert_eq!(settings.effective_sample_points(), MIN_SAMPLE_POINTS);
    }
}
