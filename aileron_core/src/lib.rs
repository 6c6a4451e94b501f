//! # aileron_core - Aileron Beam Analysis Engine
//!
//! `aileron_core` evaluates the internal loads, deflections, twist and
//! bending stresses of a hinged aileron modelled as a thin-walled beam. Every
//! field is a closed-form sum of Macaulay singularity terms, so any station
//! can be evaluated directly once the twelve reactions and integration
//! constants are known.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Evaluators are pure functions of station, geometry,
//!   reactions and aerodynamic load
//! - **JSON-First**: Cases, results and reports implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use aileron_core::aero::UniformAeroLoad;
//! use aileron_core::calculations::BeamSolution;
//! use aileron_core::geometry::A320;
//! use aileron_core::reactions::ReactionVector;
//!
//! let reactions = ReactionVector::new([0.0; 12]);
//! let solution = BeamSolution::new(&A320, &reactions, UniformAeroLoad::new(5_500.0, 0.0));
//!
//! let mz = solution.moment_z(1.0);
//! let results = solution.analyze(100);
//! assert!(results.max_moment_z.value.abs() >= mz.abs());
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Aileron input, derived geometry and section properties
//! - [`reactions`] - The twelve solved unknowns and their cache file
//! - [`aero`] - Aerodynamic load integrals
//! - [`calculations`] - Internal loads, deflections, twist, stresses, sampling
//! - [`equations`] - Singularity functions and closed-form section/stress formulas
//! - [`case`] - Analysis case container, metadata and settings
//! - [`report`] - Serializable analysis report
//! - [`verification`] - Comparison against reference curves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Case and report files with atomic saves

pub mod aero;
pub mod calculations;
pub mod case;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod reactions;
pub mod report;
pub mod units;
pub mod verification;

// Re-export commonly used types at crate root for convenience
pub use aero::{AeroIntegral, UniformAeroLoad};
pub use calculations::{AnalysisResults, BeamSolution};
pub use case::{AnalysisCase, AnalysisSettings, CaseMetadata, ReactionSource};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_case, save_case, save_report};
pub use geometry::{AileronGeometry, AileronInput, A320};
pub use reactions::{load_or_compute, ReactionVector};
pub use report::AnalysisReport;
pub use verification::{FieldCheck, ReferenceCurve, VerificationSettings, VerifiedField};
