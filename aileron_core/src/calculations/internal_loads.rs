//! Internal Loads
//!
//! Shear forces, bending moments and torque along the span, written as a
//! Macaulay superposition of the hinge forces, the two actuator loads and
//! the pre-integrated aerodynamic load.
//!
//! ## Load Application Points
//!
//! ```text
//!   x=0     x₁            x_I  x₂  x_II                 x₃      x=l_a
//!    ├──────┼──────────────┼────┼────┼───────────────────┼────────┤
//!        hinge 1      actuator I │ actuator II        hinge 3
//!                              hinge 2
//! ```
//!
//! ## Step Activation
//!
//! Both shear sums include a concentrated load only where its step bracket
//! is strictly positive, so at the application point itself the load is
//! not yet counted. The torque uses the p = 0 bracket directly. The two
//! rules give the same values but are kept as separate code paths.

use crate::aero::AeroIntegral;
use crate::equations::singularity::{macaulay, step_active};
use crate::geometry::AileronGeometry;
use crate::reactions::ReactionVector;

/// Order of the aerodynamic integral that yields shear / torque
pub const SHEAR_ORDER: u32 = 2;
/// Order of the aerodynamic integral that yields moment / twist
pub const MOMENT_ORDER: u32 = 3;

/// Step term, counted only once the step bracket is strictly positive.
#[inline]
fn gated_step(x: f64, a: f64, magnitude: f64) -> f64 {
    if step_active(x, a) {
        magnitude * macaulay(x, a, 0)
    } else {
        0.0
    }
}

/// Shear force in y, S_y(x)
///
/// ```text
/// S_y = −R6⟨x−x₁⟩⁰ − R11·cosθ⟨x−x_I⟩⁰ − R8⟨x−x₂⟩⁰ − R10⟨x−x₃⟩⁰ + P·cosθ⟨x−x_II⟩⁰
/// ```
///
/// No aerodynamic contribution.
pub fn shear_y(x: f64, g: &AileronGeometry, r: &ReactionVector) -> f64 {
    let cos_t = g.theta.cos();
    let [_, r6, _, r8, _, r10] = hinge_pairs(r);

    gated_step(x, g.x_1, -r6)
        + gated_step(x, g.x_i, -r.actuator() * cos_t)
        + gated_step(x, g.x_2, -r8)
        + gated_step(x, g.x_3, -r10)
        + gated_step(x, g.x_ii, g.actuator_load * cos_t)
}

/// Shear force in z, S_z(x)
///
/// ```text
/// S_z = R5⟨x−x₁⟩⁰ + R11·sinθ⟨x−x_I⟩⁰ + R7⟨x−x₂⟩⁰ + R9⟨x−x₃⟩⁰ − P·sinθ⟨x−x_II⟩⁰ − Q₂(x)
/// ```
///
/// where Q₂ is the order-2 aerodynamic integral.
pub fn shear_z<A: AeroIntegral + ?Sized>(x: f64, g: &AileronGeometry, r: &ReactionVector, aero: &A) -> f64 {
    let sin_t = g.theta.sin();
    let [r5, _, r7, _, r9, _] = hinge_pairs(r);

    gated_step(x, g.x_1, r5)
        + gated_step(x, g.x_i, r.actuator() * sin_t)
        + gated_step(x, g.x_2, r7)
        + gated_step(x, g.x_3, r9)
        + gated_step(x, g.x_ii, -g.actuator_load * sin_t)
        - aero.integral(x, SHEAR_ORDER)
}

/// Bending moment about y, M_y(x)
///
/// ```text
/// M_y = −R6⟨x−x₁⟩ − R11·cosθ⟨x−x_I⟩ − R8⟨x−x₂⟩ − R10⟨x−x₃⟩ + P·cosθ⟨x−x_II⟩
/// ```
pub fn moment_y(x: f64, g: &AileronGeometry, r: &ReactionVector) -> f64 {
    let cos_t = g.theta.cos();
    let [_, r6, _, r8, _, r10] = hinge_pairs(r);

    -r6 * macaulay(x, g.x_1, 1)
        - r.actuator() * cos_t * macaulay(x, g.x_i, 1)
        - r8 * macaulay(x, g.x_2, 1)
        - r10 * macaulay(x, g.x_3, 1)
        + g.actuator_load * cos_t * macaulay(x, g.x_ii, 1)
}

/// Bending moment about z, M_z(x)
///
/// ```text
/// M_z = R5⟨x−x₁⟩ + R11·sinθ⟨x−x_I⟩ + R7⟨x−x₂⟩ + R9⟨x−x₃⟩ − P·sinθ⟨x−x_II⟩ − Q₃(x)
/// ```
pub fn moment_z<A: AeroIntegral + ?Sized>(x: f64, g: &AileronGeometry, r: &ReactionVector, aero: &A) -> f64 {
    let sin_t = g.theta.sin();
    let [r5, _, r7, _, r9, _] = hinge_pairs(r);

    r5 * macaulay(x, g.x_1, 1)
        + r.actuator() * sin_t * macaulay(x, g.x_i, 1)
        + r7 * macaulay(x, g.x_2, 1)
        + r9 * macaulay(x, g.x_3, 1)
        - g.actuator_load * sin_t * macaulay(x, g.x_ii, 1)
        - aero.integral(x, MOMENT_ORDER)
}

/// Torque about the hinge line, T(x)
///
/// ```text
/// T = (R11⟨x−x_I⟩⁰ − P⟨x−x_II⟩⁰)·(cosθ·r + sinθ·ẑ)
///   + (R5⟨x−x₁⟩⁰ + R7⟨x−x₂⟩⁰ + R9⟨x−x₃⟩⁰)·(ẑ + r)
///   − τ₂(x, ẑ + r)
/// ```
pub fn torque<A: AeroIntegral + ?Sized>(x: f64, g: &AileronGeometry, r: &ReactionVector, aero: &A) -> f64 {
    let actuator_arm = g.actuator_arm();
    let hinge_arm = g.hinge_arm();
    let [r5, _, r7, _, r9, _] = hinge_pairs(r);

    r.actuator() * macaulay(x, g.x_i, 0) * actuator_arm
        - g.actuator_load * macaulay(x, g.x_ii, 0) * actuator_arm
        + r5 * macaulay(x, g.x_1, 0) * hinge_arm
        + r7 * macaulay(x, g.x_2, 0) * hinge_arm
        + r9 * macaulay(x, g.x_3, 0) * hinge_arm
        - aero.shear_integral(x, hinge_arm, SHEAR_ORDER)
}

/// R5..R10 in index order
#[inline]
pub(crate) fn hinge_pairs(r: &ReactionVector) -> [f64; 6] {
    let [z1, z2, z3] = r.hinge_z();
    let [y1, y2, y3] = r.hinge_y();
    [z1, y1, z2, y2, z3, y3]
}
