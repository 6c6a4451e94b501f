//! Beam Solution
//!
//! Bundles the three inputs of every evaluator (geometry, reaction vector,
//! aerodynamic integrals) so a caller can ask for any field at any station,
//! and samples all fields along the span for diagrams.
//!
//! Every method is a pure function of x and the borrowed inputs, so a
//! `BeamSolution` can be shared across threads freely.
//!
//! ## Example
//! ```rust
//! use aileron_core::aero::UniformAeroLoad;
//! use aileron_core::calculations::BeamSolution;
//! use aileron_core::geometry::A320;
//! use aileron_core::reactions::ReactionVector;
//!
//! let reactions = ReactionVector::new([0.0; 12]);
//! let aero = UniformAeroLoad::new(5_000.0, 0.0);
//! let solution = BeamSolution::new(&A320, &reactions, aero);
//!
//! // Before the first hinge only the aerodynamic load acts
//! assert!((solution.shear_z(0.1) + 500.0).abs() < 1e-9);
//!
//! let results = solution.analyze(101);
//! assert!(!results.moment_z_diagram.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::aero::AeroIntegral;
use crate::geometry::AileronGeometry;
use crate::reactions::ReactionVector;

use super::deflection::{deflection_v, deflection_w, global_deflection, twist};
use super::internal_loads::{moment_y, moment_z, shear_y, shear_z, torque};
use super::stress::{normal_stress, section_normal_stresses, PointStress};

/// Minimum number of evenly spaced stations in [`BeamSolution::analyze`]
pub const MIN_SAMPLE_POINTS: usize = 11;

/// Largest absolute value of a field and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldExtremum {
    /// Signed value at the extremum
    pub value: f64,
    /// Spanwise station (m)
    pub position: f64,
}

impl FieldExtremum {
    fn track(&mut self, x: f64, value: f64) {
        if value.abs() > self.value.abs() {
            self.value = value;
            self.position = x;
        }
    }
}

/// Sampled fields along the span
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Stations that were evaluated, ascending
    pub stations: Vec<f64>,

    pub max_shear_y: FieldExtremum,
    pub max_shear_z: FieldExtremum,
    pub max_moment_y: FieldExtremum,
    pub max_moment_z: FieldExtremum,
    pub max_torque: FieldExtremum,
    pub max_deflection_v: FieldExtremum,
    pub max_deflection_w: FieldExtremum,
    pub max_twist: FieldExtremum,

    /// (x, value) pairs for plotting
    pub shear_y_diagram: Vec<(f64, f64)>,
    pub shear_z_diagram: Vec<(f64, f64)>,
    pub moment_y_diagram: Vec<(f64, f64)>,
    pub moment_z_diagram: Vec<(f64, f64)>,
    pub torque_diagram: Vec<(f64, f64)>,
    pub deflection_v_diagram: Vec<(f64, f64)>,
    pub deflection_w_diagram: Vec<(f64, f64)>,
    pub twist_diagram: Vec<(f64, f64)>,
    /// Deflections rotated into the aileron frame: (x, V, W)
    pub global_deflection_diagram: Vec<(f64, f64, f64)>,
}

/// Closed-form beam solution for one set of solved reactions
#[derive(Debug, Clone)]
pub struct BeamSolution<'a, A> {
    geometry: &'a AileronGeometry,
    reactions: &'a ReactionVector,
    aero: A,
}

impl<'a, A: AeroIntegral> BeamSolution<'a, A> {
    pub fn new(geometry: &'a AileronGeometry, reactions: &'a ReactionVector, aero: A) -> Self {
        BeamSolution {
            geometry,
            reactions,
            aero,
        }
    }

    pub fn geometry(&self) -> &AileronGeometry {
        self.geometry
    }

    pub fn reactions(&self) -> &ReactionVector {
        self.reactions
    }

    pub fn aero(&self) -> &A {
        &self.aero
    }

    pub fn shear_y(&self, x: f64) -> f64 {
        shear_y(x, self.geometry, self.reactions)
    }

    pub fn shear_z(&self, x: f64) -> f64 {
        shear_z(x, self.geometry, self.reactions, &self.aero)
    }

    pub fn moment_y(&self, x: f64) -> f64 {
        moment_y(x, self.geometry, self.reactions)
    }

    pub fn moment_z(&self, x: f64) -> f64 {
        moment_z(x, self.geometry, self.reactions, &self.aero)
    }

    pub fn torque(&self, x: f64) -> f64 {
        torque(x, self.geometry, self.reactions, &self.aero)
    }

    pub fn deflection_v(&self, x: f64) -> f64 {
        deflection_v(x, self.geometry, self.reactions, &self.aero)
    }

    pub fn deflection_w(&self, x: f64) -> f64 {
        deflection_w(x, self.geometry, self.reactions)
    }

    pub fn twist(&self, x: f64) -> f64 {
        twist(x, self.geometry, self.reactions, &self.aero)
    }

    /// (V, W): deflections in the undeflected aileron frame
    pub fn global_deflection(&self, x: f64) -> (f64, f64) {
        global_deflection(self.deflection_v(x), self.deflection_w(x), self.geometry.theta)
    }

    pub fn normal_stress(&self, y: f64, z: f64, x: f64) -> f64 {
        normal_stress(y, z, x, self.geometry, self.reactions, &self.aero)
    }

    pub fn section_stresses(&self, x: f64) -> Vec<PointStress> {
        section_normal_stresses(x, self.geometry, self.reactions, &self.aero)
    }

    /// Evenly spaced stations plus the stations just either side of every
    /// concentrated load, sorted and deduplicated.
    fn sample_positions(&self, sample_points: usize) -> Vec<f64> {
        let span = self.geometry.span;
        let n = sample_points.max(MIN_SAMPLE_POINTS);

        let mut positions: Vec<f64> = (0..n).map(|i| span * i as f64 / (n - 1) as f64).collect();

        let epsilon = span * 1e-4;
        for station in self.geometry.load_stations() {
            if station > epsilon && station < span - epsilon {
                positions.extend([station - epsilon, station, station + epsilon]);
            }
        }

        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < epsilon / 2.0);
        positions
    }

    /// Sample every field along the span.
    ///
    /// `sample_points` is raised to [`MIN_SAMPLE_POINTS`] if smaller.
    pub fn analyze(&self, sample_points: usize) -> AnalysisResults {
        let stations = self.sample_positions(sample_points);
        let mut results = AnalysisResults::default();

        for &x in &stations {
            let sy = self.shear_y(x);
            let sz = self.shear_z(x);
            let my = self.moment_y(x);
            let mz = self.moment_z(x);
            let t = self.torque(x);
            let v = self.deflection_v(x);
            let w = self.deflection_w(x);
            let phi = self.twist(x);
            let (big_v, big_w) = global_deflection(v, w, self.geometry.theta);

            results.shear_y_diagram.push((x, sy));
            results.shear_z_diagram.push((x, sz));
            results.moment_y_diagram.push((x, my));
            results.moment_z_diagram.push((x, mz));
            results.torque_diagram.push((x, t));
            results.deflection_v_diagram.push((x, v));
            results.deflection_w_diagram.push((x, w));
            results.twist_diagram.push((x, phi));
            results.global_deflection_diagram.push((x, big_v, big_w));

            results.max_shear_y.track(x, sy);
            results.max_shear_z.track(x, sz);
            results.max_moment_y.track(x, my);
            results.max_moment_z.track(x, mz);
            results.max_torque.track(x, t);
            results.max_deflection_v.track(x, v);
            results.max_deflection_w.track(x, w);
            results.max_twist.track(x, phi);
        }

        results.stations = stations;
        results
    }
}
