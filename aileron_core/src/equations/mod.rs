//! # Structural Mechanics Equations
//!
//! Closed-form building blocks shared by the geometry and beam-solution
//! modules.
//!
//! ## Modules
//!
//! - [`singularity`] - Macaulay bracket `⟨x − a⟩ⁿ`
//! - [`section`] - Thin-walled D-section properties
//! - [`stress`] - Bending normal stress and von Mises stress
//!
//! ## Axes
//!
//! - **x**: spanwise, from the root hinge end (x = 0) to the tip (x = span)
//! - **y**: perpendicular to the chord, up positive
//! - **z**: along the chord, from the hinge line toward the leading edge

pub mod section;
pub mod singularity;
pub mod stress;

pub use singularity::{macaulay, macaulay_cubic, step_active, DEFAULT_EXPONENT};

pub use section::{
    d_section_perimeter,
    inclined_wall_inertia,
    parallel_axis,
    semicircle_area,
    semicircle_centroid,
    semicircle_inertia,
    straight_skin_length,
    stringer_area,
};

pub use stress::{bending_normal_stress, von_mises};
