//! Cross-section properties of the stiffened D-section.
//!
//! ```text
//!                  y
//!        ___-----  ↑  ---___
//!      /           │        ---___
//!     (   ●   LE   ┃ spar         ---___  TE
//!      \           │        ___---
//!        ‾‾‾-----  │  ---‾‾‾
//!        z ←───────┼ hinge line
//! ```
//!
//! Origin on the hinge line at the spar, z positive toward the leading edge.
//! Stringers are spaced evenly along the outer perimeter, starting at the
//! leading edge.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    d_section_perimeter, inclined_wall_inertia, parallel_axis, semicircle_area,
    semicircle_centroid, semicircle_inertia, straight_skin_length, stringer_area,
};

use super::AileronInput;

/// Location of one stringer in section coordinates (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StringerPosition {
    pub y: f64,
    pub z: f64,
}

/// Derived properties of the aileron cross-section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total cross-sectional area (m²)
    pub cross_area: f64,
    /// Area of one stringer (m²)
    pub stringer_area: f64,
    /// Stringer pitch along the perimeter (m)
    pub stringer_pitch: f64,
    /// Stringer locations, leading edge first
    pub stringers: Vec<StringerPosition>,
    /// Centroid z coordinate measured from the hinge line (m)
    pub z_centroid: f64,
    /// Second moment of area about the z axis (m⁴)
    pub i_zz: f64,
    /// Second moment of area about the centroidal y axis (m⁴)
    pub i_yy: f64,
}

impl SectionProperties {
    /// Compute all section properties from the raw aileron dimensions.
    pub fn compute(input: &AileronInput) -> Self {
        let chord = input.chord.0;
        let height = input.height.0;
        let r = height / 2.0;
        let t_sk = input.skin_thickness.0;
        let t_sp = input.spar_thickness.0;

        let skin_len = straight_skin_length(r, chord);
        let trailing = chord - r;

        let a_st = stringer_area(
            input.stringer_thickness.0,
            input.stringer_height.0,
            input.stringer_width.0,
        );
        let stringers = stringer_positions(r, chord, input.stringer_count);
        let pitch = d_section_perimeter(r, chord) / input.stringer_count.max(1) as f64;

        let a_circle = semicircle_area(r, t_sk);
        let z_circle = semicircle_centroid(r);
        let a_spar = height * t_sp;
        let a_skin = skin_len * t_sk;
        let z_skin = -trailing / 2.0;

        let cross_area = a_circle + a_spar + 2.0 * a_skin + a_st * stringers.len() as f64;

        let first_moment = a_circle * z_circle
            + 2.0 * a_skin * z_skin
            + a_st * stringers.iter().map(|s| s.z).sum::<f64>();
        let z_centroid = first_moment / cross_area;

        let sin_alpha = r / skin_len;
        let cos_alpha = trailing / skin_len;

        let i_zz = semicircle_inertia(r, t_sk)
            + inclined_wall_inertia(t_sp, height, 1.0)
            + 2.0 * parallel_axis(inclined_wall_inertia(t_sk, skin_len, sin_alpha), a_skin, r / 2.0)
            + a_st * stringers.iter().map(|s| s.y * s.y).sum::<f64>();

        // Semicircle inertia is about the spar line; move it to its own centroid first.
        let circle_own = semicircle_inertia(r, t_sk) - a_circle * z_circle * z_circle;
        let i_yy = parallel_axis(circle_own, a_circle, z_circle - z_centroid)
            + parallel_axis(0.0, a_spar, z_centroid)
            + 2.0
                * parallel_axis(
                    inclined_wall_inertia(t_sk, skin_len, cos_alpha),
                    a_skin,
                    z_skin - z_centroid,
                )
            + a_st
                * stringers
                    .iter()
                    .map(|s| (s.z - z_centroid).powi(2))
                    .sum::<f64>();

        SectionProperties {
            cross_area,
            stringer_area: a_st,
            stringer_pitch: pitch,
            stringers,
            z_centroid,
            i_zz,
            i_yy,
        }
    }
}

/// Place `count` stringers at equal arc spacing around the perimeter.
///
/// Walks from the leading edge over the upper quarter circle, down the
/// upper straight skin to the trailing edge, back along the lower skin and
/// round the lower quarter circle.
pub fn stringer_positions(r: f64, chord: f64, count: usize) -> Vec<StringerPosition> {
    if count == 0 {
        return Vec::new();
    }

    let skin_len = straight_skin_length(r, chord);
    let trailing = chord - r;
    let quarter = FRAC_PI_2 * r;
    let perimeter = d_section_perimeter(r, chord);
    let pitch = perimeter / count as f64;

    (0..count)
        .map(|i| {
            let d = i as f64 * pitch;
            if d <= quarter {
                let phi = d / r;
                StringerPosition {
                    y: r * phi.sin(),
                    z: r * phi.cos(),
                }
            } else if d <= quarter + skin_len {
                let u = (d - quarter) / skin_len;
                StringerPosition {
                    y: r * (1.0 - u),
                    z: -u * trailing,
                }
            } else if d <= quarter + 2.0 * skin_len {
                let u = (d - quarter - skin_len) / skin_len;
                StringerPosition {
                    y: -r * u,
                    z: -trailing * (1.0 - u),
                }
            } else {
                let phi = (perimeter - d) / r;
                StringerPosition {
                    y: -r * phi.sin(),
                    z: r * phi.cos(),
                }
            }
        })
        .collect()
}
