//! # Thin-Walled Section Property Formulas
//!
//! Geometric building blocks for the aileron cross-section: a semicircular
//! leading-edge skin, a vertical spar, two straight trailing skins and
//! hat/L stringers idealized as point areas.
//!
//! ## Notation
//!
//! - `r` = Leading-edge radius (half the section height)
//! - `c` = Chord length
//! - `t` = Wall thickness
//! - `l` = Length of a straight wall
//! - `A` = Area, `I` = Second moment of area
//!
//! All thin-wall formulas drop terms of order `t³`.
//!
//! ## References
//!
//! - Megson, Aircraft Structures for Engineering Students, Ch. 15-16
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

use std::f64::consts::PI;

// =============================================================================
// STRINGERS
// =============================================================================

/// Area of an L-shaped stringer
///
/// ```text
///   ┃
///   ┃ h_st
///   ┃
///   ┗━━━━━
///     w_st
/// ```
///
/// # Formula
/// A = t·w + (h − t)·t
///
/// # Example
/// ```rust
/// use aileron_core::equations::section::stringer_area;
///
/// // 1.2 mm thick, 15 mm high, 20 mm wide
/// let a = stringer_area(0.0012, 0.015, 0.020);
/// assert!((a - 4.056e-5).abs() < 1e-12);
/// ```
#[inline]
pub fn stringer_area(t_st: f64, h_st: f64, w_st: f64) -> f64 {
    t_st * w_st + (h_st - t_st) * t_st
}

// =============================================================================
// PERIMETER
// =============================================================================

/// Length of one straight trailing skin, from spar cap to trailing edge
///
/// # Formula
/// l = √(r² + (c − r)²)
#[inline]
pub fn straight_skin_length(r: f64, c: f64) -> f64 {
    (r * r + (c - r).powi(2)).sqrt()
}

/// Outer perimeter of the D-section (semicircle plus both straight skins)
///
/// # Formula
/// P = πr + 2√(r² + (c − r)²)
#[inline]
pub fn d_section_perimeter(r: f64, c: f64) -> f64 {
    PI * r + 2.0 * straight_skin_length(r, c)
}

// =============================================================================
// SEMICIRCULAR SKIN
// =============================================================================

/// Area of a thin semicircular skin
#[inline]
pub fn semicircle_area(r: f64, t: f64) -> f64 {
    PI * r * t
}

/// Distance of a thin semicircular arc's centroid from its diameter
///
/// # Formula
/// z̄ = 2r/π
#[inline]
pub fn semicircle_centroid(r: f64) -> f64 {
    2.0 * r / PI
}

/// Second moment of area of a thin semicircular arc about its diameter,
/// or about the axis of symmetry (both are πr³t/2)
#[inline]
pub fn semicircle_inertia(r: f64, t: f64) -> f64 {
    PI * r.powi(3) * t / 2.0
}

// =============================================================================
// STRAIGHT WALLS
// =============================================================================

/// Second moment of area of a thin straight wall about its own centroid,
/// measured about an axis making angle α with the wall
///
/// ```text
///          ╱
///       l ╱
///        ╱ α
///   ────┴──────── axis
/// ```
///
/// # Formula
/// I = t·l³·sin²α / 12
///
/// A vertical wall (α = 90°) reduces to t·h³/12.
#[inline]
pub fn inclined_wall_inertia(t: f64, l: f64, sin_alpha: f64) -> f64 {
    t * l.powi(3) * sin_alpha.powi(2) / 12.0
}

/// Parallel axis theorem
///
/// # Formula
/// I = I₀ + A·d²
#[inline]
pub fn parallel_axis(i_own: f64, area: f64, d: f64) -> f64 {
    i_own + area * d * d
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_straight_skin_length_pythagoras() {
        assert!((straight_skin_length(3.0, 7.0) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_perimeter_of_degenerate_section() {
        // chord == r: straight skins collapse onto the spar
        let p = d_section_perimeter(1.0, 1.0);
        assert!((p - (PI + 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_wall_matches_rectangle() {
        let i = inclined_wall_inertia(0.003, 0.2, 1.0);
        assert!((i - 0.003 * 0.2_f64.powi(3) / 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_parallel_axis() {
        assert!((parallel_axis(2.0, 3.0, 2.0) - 14.0).abs() < EPSILON);
    }

    #[test]
    fn test_semicircle_properties() {
        let r = 0.1;
        let t = 0.001;
        assert!((semicircle_area(r, t) - PI * 1e-4).abs() < EPSILON);
        assert!((semicircle_centroid(r) - 0.2 / PI).abs() < EPSILON);
        assert!((semicircle_inertia(r, t) - PI * 1e-6 / 2.0).abs() < EPSILON);
    }
}
