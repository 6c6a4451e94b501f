//! Deflections and Twist
//!
//! Doubly-integrated bending moments (cubic brackets) and the integrated
//! torque, each closed with the integration constants held in the reaction
//! vector.
//!
//! ## Formulas
//!
//! ```text
//! v(x) = −1/(E·Izz) · [ R5/6⟨x−x₁⟩³ + R11·sinθ/6⟨x−x_I⟩³ + R7/6⟨x−x₂⟩³
//!                       − P·sinθ/6⟨x−x_II⟩³ + R9/6⟨x−x₃⟩³ − Q₅(x) ] + R0·x + R1
//!
//! w(x) =  1/(E·Iyy) · [ −R6/6⟨x−x₁⟩³ − R11·cosθ/6⟨x−x_I⟩³ − R8/6⟨x−x₂⟩³
//!                       + P·cosθ/6⟨x−x_II⟩³ − R10/6⟨x−x₃⟩³ ] + R2·x + R3
//!
//! φ(x) =  1/(G·J)   · [ (R11⟨x−x_I⟩ − P⟨x−x_II⟩)·(cosθ·r + sinθ·ẑ)
//!                       + (R5⟨x−x₁⟩ + R7⟨x−x₂⟩ + R9⟨x−x₃⟩)·(ẑ + r)
//!                       − τ₃(x, ẑ + r) ] + R4
//! ```
//!
//! v'' = −M_z/(E·Izz), w'' = M_y/(E·Iyy) and φ' = T/(G·J).

use crate::aero::AeroIntegral;
use crate::equations::singularity::{macaulay, macaulay_cubic};
use crate::geometry::AileronGeometry;
use crate::reactions::ReactionVector;

use super::internal_loads::{hinge_pairs, MOMENT_ORDER};

/// Order of the aerodynamic integral that yields E·I times deflection
pub const DEFLECTION_ORDER: u32 = 5;

/// Deflection in y from bending about z
pub fn deflection_v<A: AeroIntegral + ?Sized>(x: f64, g: &AileronGeometry, r: &ReactionVector, aero: &A) -> f64 {
    let sin_t = g.theta.sin();
    let [r5, _, r7, _, r9, _] = hinge_pairs(r);
    let (slope, offset) = r.v_constants();

    let bending = r5 / 6.0 * macaulay_cubic(x, g.x_1)
        + r.actuator() / 6.0 * macaulay_cubic(x, g.x_i) * sin_t
        + r7 / 6.0 * macaulay_cubic(x, g.x_2)
        - g.actuator_load / 6.0 * macaulay_cubic(x, g.x_ii) * sin_t
        + r9 / 6.0 * macaulay_cubic(x, g.x_3)
        - aero.integral(x, DEFLECTION_ORDER);

    -bending / g.e_izz + slope * x + offset
}

/// Deflection in z from bending about y (no aerodynamic term)
pub fn deflection_w(x: f64, g: &AileronGeometry, r: &ReactionVector) -> f64 {
    let cos_t = g.theta.cos();
    let [_, r6, _, r8, _, r10] = hinge_pairs(r);
    let (slope, offset) = r.w_constants();

    let bending = -r6 / 6.0 * macaulay_cubic(x, g.x_1)
        - r.actuator() / 6.0 * macaulay_cubic(x, g.x_i) * cos_t
        - r8 / 6.0 * macaulay_cubic(x, g.x_2)
        + g.actuator_load / 6.0 * macaulay_cubic(x, g.x_ii) * cos_t
        - r10 / 6.0 * macaulay_cubic(x, g.x_3);

    bending / g.e_iyy + slope * x + offset
}

/// Twist angle about the hinge line (rad)
pub fn twist<A: AeroIntegral + ?Sized>(x: f64, g: &AileronGeometry, r: &ReactionVector, aero: &A) -> f64 {
    let actuator_arm = g.actuator_arm();
    let hinge_arm = g.hinge_arm();
    let [r5, _, r7, _, r9, _] = hinge_pairs(r);

    let torsion = r.actuator() * macaulay(x, g.x_i, 1) * actuator_arm
        - g.actuator_load * macaulay(x, g.x_ii, 1) * actuator_arm
        + r5 * macaulay(x, g.x_1, 1) * hinge_arm
        + r7 * macaulay(x, g.x_2, 1) * hinge_arm
        + r9 * macaulay(x, g.x_3, 1) * hinge_arm
        - aero.shear_integral(x, hinge_arm, MOMENT_ORDER);

    torsion / g.g_j + r.twist_constant()
}

/// Rotate local deflections (v, w) into the undeflected aileron frame.
///
/// ```text
/// V = v·cosθ + w·sinθ
/// W = −(w·cosθ + v·sinθ)
/// ```
///
/// Returns `(V, W)`.
pub fn global_deflection(v: f64, w: f64, theta: f64) -> (f64, f64) {
    let (sin_t, cos_t) = theta.sin_cos();
    let big_v = v * cos_t + w * sin_t;
    let big_w = -(w * cos_t + v * sin_t);
    (big_v, big_w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aero::UniformAeroLoad;
    use crate::calculations::internal_loads::{moment_y, moment_z, torque};
    use crate::geometry::{AileronGeometry, AileronInput};

    fn geometry() -> AileronGeometry {
        AileronGeometry::derive(&AileronInput::a320())
    }

    fn reactions() -> ReactionVector {
        ReactionVector::new([
            -1.2e-3, 3.4e-3, 5.0e-4, -2.2e-3, 1.8e-2, 3.0e4, -2.0e4, 4.0e4, 1.0e4, -5.0e3, 6.0e3, 1.5e5,
        ])
    }

    #[test]
    fn test_root_values_are_integration_constants() {
        let g = geometry();
        let r = reactions();
        let q = UniformAeroLoad::new(5_500.0, 0.02);

        assert_eq!(deflection_v(0.0, &g, &r, &q), r.v_constants().1);
        assert_eq!(deflection_w(0.0, &g, &r), r.w_constants().1);
        assert_eq!(twist(0.0, &g, &r, &q), r.twist_constant());
    }

    #[test]
    fn test_linear_before_first_hinge_without_aero() {
        let g = geometry();
        let r = reactions();
        let none = UniformAeroLoad::none();
        let x = 0.1;
        let (a, b) = r.v_constants();
        assert!((deflection_v(x, &g, &r, &none) - (a * x + b)).abs() < 1e-15);
        let (c, d) = r.w_constants();
        assert!((deflection_w(x, &g, &r) - (c * x + d)).abs() < 1e-15);
    }

    #[test]
    fn test_curvature_matches_moment() {
        let g = geometry();
        let r = reactions();
        let q = UniformAeroLoad::new(5_500.0, 0.0);
        let h = 1e-3;

        for &x in &[0.5, 1.0, 1.6, 2.3] {
            let v2 = (deflection_v(x + h, &g, &r, &q) - 2.0 * deflection_v(x, &g, &r, &q)
                + deflection_v(x - h, &g, &r, &q))
                / (h * h);
            let expected_v2 = -moment_z(x, &g, &r, &q) / g.e_izz;
            assert!((v2 - expected_v2).abs() < 1e-3 * expected_v2.abs().max(1e-6), "x = {}", x);

            let w2 = (deflection_w(x + h, &g, &r) - 2.0 * deflection_w(x, &g, &r) + deflection_w(x - h, &g, &r))
                / (h * h);
            let expected_w2 = moment_y(x, &g, &r) / g.e_iyy;
            assert!((w2 - expected_w2).abs() < 1e-3 * expected_w2.abs().max(1e-6), "x = {}", x);
        }
    }

    #[test]
    fn test_twist_rate_matches_torque() {
        let g = geometry();
        let r = reactions();
        let q = UniformAeroLoad::new(5_500.0, 0.03);
        let h = 1e-5;

        for &x in &[0.5, 1.2, 1.6, 2.75] {
            let rate = (twist(x + h, &g, &r, &q) - twist(x - h, &g, &r, &q)) / (2.0 * h);
            let expected = torque(x, &g, &r, &q) / g.g_j;
            assert!((rate - expected).abs() < 1e-6 * expected.abs().max(1e-3), "x = {}", x);
        }
    }

    #[test]
    fn test_global_deflection_rotation() {
        let (v, w) = global_deflection(1.0, 0.0, 0.0);
        assert_eq!((v, w), (1.0, -0.0));

        let theta = 26.0_f64.to_radians();
        let (big_v, big_w) = global_deflection(0.01, 0.02, theta);
        assert!((big_v - (0.01 * theta.cos() + 0.02 * theta.sin())).abs() < 1e-15);
        assert!((big_w + (0.02 * theta.cos() + 0.01 * theta.sin())).abs() < 1e-15);
    }
}
