//! # Beam Solution Calculations
//!
//! Internal loads, deflections and stresses of the aileron. Every field is
//! available two ways:
//!
//! - as a free function taking `(x, geometry, reactions[, aero])`, with all
//!   dependencies passed explicitly;
//! - as a method on [`BeamSolution`], which holds those references for you.
//!
//! ## Modules
//!
//! - [`internal_loads`] - S_y, S_z, M_y, M_z, T
//! - [`deflection`] - v, w, φ and the rotation to the aileron frame
//! - [`stress`] - σx and von Mises
//! - [`beam_solution`] - the bundled evaluator and span sampling

pub mod beam_solution;
pub mod deflection;
pub mod internal_loads;
pub mod stress;

pub use beam_solution::{AnalysisResults, BeamSolution, FieldExtremum, MIN_SAMPLE_POINTS};
pub use deflection::{deflection_v, deflection_w, global_deflection, twist};
pub use internal_loads::{moment_y, moment_z, shear_y, shear_z, torque};
pub use stress::{normal_stress, section_normal_stresses, PointStress, StressState};
