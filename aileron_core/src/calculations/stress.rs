//! Section Stresses
//!
//! Bending normal stress at arbitrary section points and at the stringers,
//! and a small stress-state value type for the von Mises check.

use serde::{Deserialize, Serialize};

use crate::aero::AeroIntegral;
use crate::equations::stress::{bending_normal_stress, von_mises};
use crate::geometry::AileronGeometry;
use crate::reactions::ReactionVector;

use super::internal_loads::{moment_y, moment_z};

/// Normal stress σx at section point (y, z) and span station x.
///
/// `z` is measured from the hinge line, like the stringer positions; the
/// centroid offset is applied here.
pub fn normal_stress<A: AeroIntegral + ?Sized>(
    y: f64,
    z: f64,
    x: f64,
    g: &AileronGeometry,
    r: &ReactionVector,
    aero: &A,
) -> f64 {
    bending_normal_stress(
        moment_z(x, g, r, aero),
        moment_y(x, g, r),
        g.i_zz,
        g.i_yy,
        y,
        z - g.z_centroid,
    )
}

/// σx at one section point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStress {
    pub y: f64,
    pub z: f64,
    pub sigma_x: f64,
}

/// Normal stress at every stringer plus the top and bottom spar caps.
pub fn section_normal_stresses<A: AeroIntegral + ?Sized>(
    x: f64,
    g: &AileronGeometry,
    r: &ReactionVector,
    aero: &A,
) -> Vec<PointStress> {
    // evaluate the moments once for the whole section
    let m_z = moment_z(x, g, r, aero);
    let m_y = moment_y(x, g, r);

    let spar_caps = [(g.r, 0.0), (-g.r, 0.0)];
    g.section
        .stringers
        .iter()
        .map(|s| (s.y, s.z))
        .chain(spar_caps)
        .map(|(y, z)| PointStress {
            y,
            z,
            sigma_x: bending_normal_stress(m_z, m_y, g.i_zz, g.i_yy, y, z - g.z_centroid),
        })
        .collect()
}

/// Full stress state at a point.
///
/// ```rust
/// use aileron_core::calculations::StressState;
///
/// let s = StressState::new([100.0, 0.0, 0.0], [0.0; 3]);
/// assert!((s.von_mises() - 100.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressState {
    /// [σxx, σyy, σzz]
    pub normal: [f64; 3],
    /// [τxy, τxz, τyz]
    pub shear: [f64; 3],
}

impl StressState {
    pub fn new(normal: [f64; 3], shear: [f64; 3]) -> Self {
        StressState { normal, shear }
    }

    /// Uniaxial state from a bending normal stress
    pub fn uniaxial(sigma_x: f64) -> Self {
        StressState {
            normal: [sigma_x, 0.0, 0.0],
            shear: [0.0; 3],
        }
    }

    /// Von Mises equivalent stress, never negative
    pub fn von_mises(&self) -> f64 {
        von_mises(self.normal, self.shear)
    }
}
