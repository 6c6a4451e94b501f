//! # Verification Against Reference Curves
//!
//! Compares fields of a [`BeamSolution`] against sampled reference curves,
//! for example numerical-model output or a hand-derived closed form.
//!
//! ```rust
//! use aileron_core::verification::{compare, ReferenceCurve};
//!
//! let curve = ReferenceCurve::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();
//! let deviation = compare(&curve, |x| 2.0 * x);
//! assert!(deviation.within(1e-12));
//! ```
//!
//! An analysis case can name reference files for the rotated deflections
//! V and W and for the twist φ (see [`VerificationSettings`]); the checks
//! then run with the case and land in the report.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::aero::AeroIntegral;
use crate::calculations::BeamSolution;
use crate::errors::{CalcError, CalcResult};

/// Sampled reference values of one field along the span.
///
/// Always holds at least two points with strictly increasing, finite
/// stations; every way of building one (including deserialization) checks
/// this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReferenceCurve")]
pub struct ReferenceCurve {
    x: Vec<f64>,
    values: Vec<f64>,
}

/// Unchecked wire form of [`ReferenceCurve`]
#[derive(Deserialize)]
struct RawReferenceCurve {
    x: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawReferenceCurve> for ReferenceCurve {
    type Error = CalcError;

    fn try_from(raw: RawReferenceCurve) -> CalcResult<Self> {
        ReferenceCurve::new(raw.x, raw.values)
    }
}

impl ReferenceCurve {
    /// Build and validate a curve.
    pub fn new(x: Vec<f64>, values: Vec<f64>) -> CalcResult<Self> {
        if x.len() != values.len() {
            return Err(CalcError::dimension_mismatch("reference curve values", x.len(), values.len()));
        }
        if x.len() < 2 {
            return Err(CalcError::invalid_input(
                "x",
                x.len().to_string(),
                "A reference curve needs at least two points",
            ));
        }
        if let Some(bad) = x.iter().chain(&values).find(|v| !v.is_finite()) {
            return Err(CalcError::invalid_input("values", bad.to_string(), "Must be finite"));
        }
        if let Some(pair) = x.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CalcError::invalid_input(
                "x",
                format!("{} then {}", pair[0], pair[1]),
                "Stations must be strictly increasing",
            ));
        }
        Ok(ReferenceCurve { x, values })
    }

    /// Load `{"x": [...], "values": [...]}` from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read reference curve", path.display().to_string(), e.to_string()))?;
        let raw: RawReferenceCurve = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
        Self::try_from(raw)
    }

    /// Stations (m)
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Reference values at each station
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed curve
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Linear interpolation, clamped to the end values outside the range.
    pub fn interpolate(&self, x: f64) -> f64 {
        let (first, last) = (0, self.x.len() - 1);
        if x <= self.x[first] {
            return self.values[first];
        }
        if x >= self.x[last] {
            return self.values[last];
        }

        // first station strictly greater than x
        let hi = self.x.partition_point(|&xi| xi <= x);
        let lo = hi - 1;
        let t = (x - self.x[lo]) / (self.x[hi] - self.x[lo]);
        self.values[lo] + t * (self.values[hi] - self.values[lo])
    }
}

/// How far a field strays from a reference curve at its stations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveDeviation {
    /// Largest absolute difference
    pub max_abs: f64,
    /// Root-mean-square difference
    pub rms: f64,
    /// Station of the largest difference
    pub worst_x: f64,
}

impl CurveDeviation {
    /// True when the largest difference does not exceed `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_abs <= tolerance
    }
}

/// Evaluate `f` at every station of `curve` and summarise the differences.
pub fn compare<F: Fn(f64) -> f64>(curve: &ReferenceCurve, f: F) -> CurveDeviation {
    let mut deviation = CurveDeviation::default();
    if curve.is_empty() {
        return deviation;
    }
    let mut sum_sq = 0.0;

    for (&x, &reference) in curve.x.iter().zip(&curve.values) {
        let diff = (f(x) - reference).abs();
        sum_sq += diff * diff;
        if diff > deviation.max_abs {
            deviation.max_abs = diff;
            deviation.worst_x = x;
        }
    }

    deviation.rms = (sum_sq / curve.len() as f64).sqrt();
    deviation
}

/// Field that a reference curve describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifiedField {
    /// V, deflection in the undeflected aileron frame (m)
    DeflectionV,
    /// W, deflection in the undeflected aileron frame (m)
    DeflectionW,
    /// φ, twist about the hinge line (rad)
    Twist,
}

impl VerifiedField {
    /// Evaluate this field of `solution` at station `x`.
    pub fn evaluate<A: AeroIntegral>(self, solution: &BeamSolution<'_, A>, x: f64) -> f64 {
        match self {
            VerifiedField::DeflectionV => solution.global_deflection(x).0,
            VerifiedField::DeflectionW => solution.global_deflection(x).1,
            VerifiedField::Twist => solution.twist(x),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VerifiedField::DeflectionV => "V",
            VerifiedField::DeflectionW => "W",
            VerifiedField::Twist => "phi",
        }
    }
}

fn default_tolerance() -> f64 {
    1.0e-3
}

/// Reference files to check a case against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationSettings {
    /// Reference curve for V
    #[serde(default)]
    pub deflection_v: Option<PathBuf>,
    /// Reference curve for W
    #[serde(default)]
    pub deflection_w: Option<PathBuf>,
    /// Reference curve for φ
    #[serde(default)]
    pub twist: Option<PathBuf>,
    /// Largest accepted absolute deviation (m or rad)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        VerificationSettings {
            deflection_v: None,
            deflection_w: None,
            twist: None,
            tolerance: default_tolerance(),
        }
    }
}

impl VerificationSettings {
    /// Configured reference files, in V, W, φ order
    pub fn references(&self) -> Vec<(VerifiedField, &Path)> {
        [
            (VerifiedField::DeflectionV, &self.deflection_v),
            (VerifiedField::DeflectionW, &self.deflection_w),
            (VerifiedField::Twist, &self.twist),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.as_deref().map(|p| (field, p)))
        .collect()
    }

    /// Load every configured reference and compare the solution with it.
    ///
    /// A configured file that cannot be read or validated is an error.
    pub fn run<A: AeroIntegral>(&self, solution: &BeamSolution<'_, A>) -> CalcResult<Vec<FieldCheck>> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(CalcError::invalid_input(
                "verification.tolerance",
                self.tolerance.to_string(),
                "Must be finite and not negative",
            ));
        }

        self.references()
            .into_iter()
            .map(|(field, path)| -> CalcResult<FieldCheck> {
                let curve = ReferenceCurve::load(path)?;
                let check = FieldCheck::new(field, path, curve, solution, self.tolerance);
                if check.passed {
                    info!("{} matches {} (max deviation {:.3e})", field.label(), path.display(), check.deviation.max_abs);
                } else {
                    warn!(
                        "{} deviates from {} by {:.3e} at x = {:.3} m",
                        field.label(),
                        path.display(),
                        check.deviation.max_abs,
                        check.deviation.worst_x
                    );
                }
                Ok(check)
            })
            .collect()
    }
}

/// Result of checking one field against its reference curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: VerifiedField,
    pub reference: PathBuf,
    pub curve: ReferenceCurve,
    pub deviation: CurveDeviation,
    pub tolerance: f64,
    pub passed: bool,
}

impl FieldCheck {
    pub fn new<A: AeroIntegral>(
        field: VerifiedField,
        reference: &Path,
        curve: ReferenceCurve,
        solution: &BeamSolution<'_, A>,
        tolerance: f64,
    ) -> Self {
        let deviation = compare(&curve, |x| field.evaluate(solution, x));
        FieldCheck {
            field,
            reference: reference.to_path_buf(),
            curve,
            deviation,
            tolerance,
            passed: deviation.within(tolerance),
        }
    }

    /// Reference value at an arbitrary station
    pub fn reference_at(&self, x: f64) -> f64 {
        self.curve.interpolate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aero::UniformAeroLoad;
    use crate::geometry::{AileronGeometry, AileronInput};
    use crate::reactions::{ReactionVector, HINGE_1_Y, HINGE_1_Z, REACTION_COUNT, TWIST_OFFSET, W_OFFSET, W_SLOPE};
    use tempfile::tempdir;

    fn unloaded_geometry() -> AileronGeometry {
        let mut g = AileronGeometry::derive(&AileronInput::a320());
        g.actuator_load = 0.0;
        g
    }

    fn stations(span: f64) -> Vec<f64> {
        (0..50).map(|i| span * i as f64 / 49.0).collect()
    }

    fn write_curve(path: &Path, curve: &ReferenceCurve) {
        fs::write(path, serde_json::to_string(curve).unwrap()).unwrap();
    }

    #[test]
    fn test_validation() {
        assert!(ReferenceCurve::new(vec![0.0, 1.0], vec![0.0]).is_err());
        assert!(ReferenceCurve::new(vec![0.0], vec![0.0]).is_err());
        assert!(ReferenceCurve::new(vec![0.0, 1.0, 1.0], vec![0.0; 3]).is_err());
        assert!(ReferenceCurve::new(vec![1.0, 0.0], vec![0.0; 2]).is_err());
        assert!(ReferenceCurve::new(vec![0.0, 1.0], vec![0.0, f64::NAN]).is_err());
        assert!(ReferenceCurve::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).is_err());
        assert!(ReferenceCurve::new(vec![0.0, 1.0], vec![0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_deserialization_validates() {
        assert!(serde_json::from_str::<ReferenceCurve>(r#"{"x": [], "values": []}"#).is_err());
        assert!(serde_json::from_str::<ReferenceCurve>(r#"{"x": [1.0, 0.0], "values": [0.0, 0.0]}"#).is_err());
        assert!(serde_json::from_str::<ReferenceCurve>(r#"{"x": [0.0, 1.0], "values": [0.0]}"#).is_err());

        // nested inside a larger document
        let nested = r#"{"field": "twist", "reference": "phi.json",
            "curve": {"x": [0.5], "values": [1.0]},
            "deviation": {"max_abs": 0.0, "rms": 0.0, "worst_x": 0.0},
            "tolerance": 0.001, "passed": true}"#;
        assert!(serde_json::from_str::<FieldCheck>(nested).is_err());

        let curve: ReferenceCurve = serde_json::from_str(r#"{"x": [0.0, 1.0], "values": [2.0, 4.0]}"#).unwrap();
        assert_eq!(curve.x(), &[0.0, 1.0]);
        assert_eq!(curve.values(), &[2.0, 4.0]);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_interpolate_linear_and_clamped() {
        let curve = ReferenceCurve::new(vec![0.0, 1.0, 3.0], vec![0.0, 10.0, 30.0]).unwrap();
        assert_eq!(curve.interpolate(-1.0), 0.0);
        assert_eq!(curve.interpolate(5.0), 30.0);
        assert_eq!(curve.interpolate(1.0), 10.0);
        assert!((curve.interpolate(0.25) - 2.5).abs() < 1e-12);
        assert!((curve.interpolate(2.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_compare_reports_worst_station() {
        let curve = ReferenceCurve::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4]).unwrap();
        let d = compare(&curve, |x| if x == 2.0 { -0.5 } else { 0.1 });
        assert_eq!(d.worst_x, 2.0);
        assert!((d.max_abs - 0.5).abs() < 1e-15);
        let expected_rms = ((0.01 * 3.0 + 0.25) / 4.0_f64).sqrt();
        assert!((d.rms - expected_rms).abs() < 1e-12);
        assert!(d.within(0.5));
        assert!(!d.within(0.4));
    }

    #[test]
    fn test_load_from_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.json");
        fs::write(&path, r#"{"x": [0.0, 0.5, 1.0], "values": [1.0, 2.0, 3.0]}"#).unwrap();

        let curve = ReferenceCurve::load(&path).unwrap();
        assert_eq!(curve.len(), 3);
        assert!((curve.interpolate(0.75) - 2.5).abs() < 1e-12);

        fs::write(&path, r#"{"x": [0.0], "values": [1.0]}"#).unwrap();
        assert_eq!(ReferenceCurve::load(&path).unwrap_err().error_code(), "INVALID_INPUT");

        fs::write(&path, "{ nope").unwrap();
        assert_eq!(ReferenceCurve::load(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_deflection_v_matches_cantilever_quartic() {
        // Aero load and v constants only: v(x) = q·x⁴/(24·E·Izz) + R0·x + R1
        let g = unloaded_geometry();
        let mut values = [0.0; REACTION_COUNT];
        values[0] = 1.5e-3;
        values[1] = -4.0e-4;
        let r = ReactionVector::new(values);
        let q = 5_500.0;
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::new(q, 0.0));

        let x = stations(g.span);
        let reference = x
            .iter()
            .map(|&x| q * x.powi(4) / (24.0 * g.e_izz) + 1.5e-3 * x - 4.0e-4)
            .collect();
        let curve = ReferenceCurve::new(x, reference).unwrap();

        let deviation = compare(&curve, |x| solution.deflection_v(x));
        assert!(deviation.within(1e-9), "max deviation {}", deviation.max_abs);
    }

    #[test]
    fn test_deflection_w_matches_point_load_cubic() {
        // Single hinge-1 y force: w(x) = −F·⟨x−x₁⟩³/(6·E·Iyy) + R2·x + R3
        let g = unloaded_geometry();
        let force = 2.0e4;
        let mut values = [0.0; REACTION_COUNT];
        values[HINGE_1_Y] = force;
        values[W_SLOPE] = -2.0e-3;
        values[W_OFFSET] = 5.0e-4;
        let r = ReactionVector::new(values);
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::none());

        let x = stations(g.span);
        let reference = x
            .iter()
            .map(|&x| {
                let arm = (x - g.x_1).max(0.0);
                -force * arm.powi(3) / (6.0 * g.e_iyy) - 2.0e-3 * x + 5.0e-4
            })
            .collect();
        let curve = ReferenceCurve::new(x, reference).unwrap();

        let deviation = compare(&curve, |x| solution.deflection_w(x));
        assert!(deviation.within(1e-12), "max deviation {}", deviation.max_abs);
    }

    #[test]
    fn test_twist_matches_constant_torque_line() {
        // Single hinge-1 z force gives T = F·(ẑ + r) past x₁, so
        // φ(x) = F·(ẑ + r)·⟨x−x₁⟩/(G·J) + R4
        let g = unloaded_geometry();
        let force = 1.0e4;
        let mut values = [0.0; REACTION_COUNT];
        values[HINGE_1_Z] = force;
        values[TWIST_OFFSET] = 3.0e-3;
        let r = ReactionVector::new(values);
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::none());

        let x = stations(g.span);
        let reference = x
            .iter()
            .map(|&x| force * g.hinge_arm() * (x - g.x_1).max(0.0) / g.g_j + 3.0e-3)
            .collect();
        let curve = ReferenceCurve::new(x, reference).unwrap();

        let deviation = compare(&curve, |x| solution.twist(x));
        assert!(deviation.within(1e-12), "max deviation {}", deviation.max_abs);
    }

    #[test]
    fn test_settings_run_checks_every_configured_field() {
        let dir = tempdir().unwrap();
        let g = unloaded_geometry();
        let mut values = [0.0; REACTION_COUNT];
        values[HINGE_1_Y] = 2.0e4;
        values[HINGE_1_Z] = 1.0e4;
        let r = ReactionVector::new(values);
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::none());

        let x = stations(g.span);
        let exact_v = x.iter().map(|&x| solution.global_deflection(x).0).collect();
        let shifted_w = x.iter().map(|&x| solution.global_deflection(x).1 + 0.01).collect();
        let v_path = dir.path().join("defx.json");
        let w_path = dir.path().join("defy.json");
        write_curve(&v_path, &ReferenceCurve::new(x.clone(), exact_v).unwrap());
        write_curve(&w_path, &ReferenceCurve::new(x, shifted_w).unwrap());

        let settings = VerificationSettings {
            deflection_v: Some(v_path.clone()),
            deflection_w: Some(w_path),
            twist: None,
            tolerance: 1e-6,
        };
        let checks = settings.run(&solution).unwrap();

        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].field, VerifiedField::DeflectionV);
        assert_eq!(checks[0].reference, v_path);
        assert!(checks[0].passed);
        assert_eq!(checks[1].field, VerifiedField::DeflectionW);
        assert!(!checks[1].passed);
        assert!((checks[1].deviation.max_abs - 0.01).abs() < 1e-9);

        let x = 1.7;
        let expected = solution.global_deflection(x).0;
        assert!((checks[0].reference_at(x) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_settings_run_fails_on_missing_reference() {
        let dir = tempdir().unwrap();
        let g = unloaded_geometry();
        let r = ReactionVector::default();
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::none());

        let settings = VerificationSettings {
            twist: Some(dir.path().join("defz.json")),
            ..VerificationSettings::default()
        };
        assert_eq!(settings.run(&solution).unwrap_err().error_code(), "FILE_ERROR");

        let bad_tolerance = VerificationSettings {
            tolerance: -1.0,
            ..VerificationSettings::default()
        };
        assert!(bad_tolerance.run(&solution).is_err());
    }

    #[test]
    fn test_no_references_means_no_checks() {
        let g = unloaded_geometry();
        let r = ReactionVector::default();
        let solution = BeamSolution::new(&g, &r, UniformAeroLoad::none());
        assert!(VerificationSettings::default().run(&solution).unwrap().is_empty());
    }
}
