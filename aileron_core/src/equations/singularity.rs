//! # Singularity (Macaulay Bracket) Functions
//!
//! Piecewise loading on a beam is written as a superposition of bracket
//! terms `⟨x − a⟩ⁿ`, each of which is zero until the load application point
//! `a` and a plain power of the distance beyond it:
//!
//! ```text
//!            ⎧ 0            x ≤ a
//! ⟨x − a⟩ⁿ = ⎨
//!            ⎩ (x − a)ⁿ     x > a
//! ```
//!
//! | exponent | used for                         |
//! |----------|----------------------------------|
//! | 0        | step: shear and torque           |
//! | 1        | ramp: bending moment, twist      |
//! | 3        | cubic: deflection                |
//!
//! The bracket is zero *at* the application point for every exponent,
//! including 0. A step therefore activates strictly after its location.

/// Exponent used when no other is given (deflection terms).
pub const DEFAULT_EXPONENT: i32 = 3;

/// Evaluate the Macaulay bracket `⟨x − a⟩ᵖ`.
///
/// Returns 0 when `x − a ≤ 0`, otherwise `(x − a)ᵖ`.
///
/// # Example
/// ```rust
/// use aileron_core::equations::singularity::macaulay;
///
/// assert_eq!(macaulay(1.0, 2.0, 3), 0.0);
/// assert_eq!(macaulay(2.0, 2.0, 0), 0.0);
/// assert_eq!(macaulay(4.0, 2.0, 0), 1.0);
/// assert_eq!(macaulay(4.0, 2.0, 3), 8.0);
/// ```
#[inline]
pub fn macaulay(x: f64, a: f64, p: i32) -> f64 {
    let arm = x - a;
    if arm <= 0.0 {
        0.0
    } else {
        arm.powi(p)
    }
}

/// `⟨x − a⟩³`, the bracket at [`DEFAULT_EXPONENT`].
#[inline]
pub fn macaulay_cubic(x: f64, a: f64) -> f64 {
    macaulay(x, a, DEFAULT_EXPONENT)
}

/// Unit step that is 1 only where the step bracket is strictly positive.
///
/// Shear sums gate every term on this test rather than multiplying by the
/// bracket directly.
#[inline]
pub fn step_active(x: f64, a: f64) -> bool {
    macaulay(x, a, 0) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_and_before_location() {
        for p in 0..=5 {
            assert_eq!(macaulay(0.5, 1.0, p), 0.0, "p = {}", p);
            assert_eq!(macaulay(1.0, 1.0, p), 0.0, "p = {}", p);
            assert_eq!(macaulay(-3.0, 1.0, p), 0.0, "p = {}", p);
        }
    }

    #[test]
    fn test_power_after_location() {
        let x: f64 = 2.5;
        let a: f64 = 1.0;
        for p in 0..=5 {
            let expected = (x - a).powi(p);
            assert!((macaulay(x, a, p) - expected).abs() < 1e-12, "p = {}", p);
        }
    }

    #[test]
    fn test_default_exponent_is_cubic() {
        assert_eq!(macaulay_cubic(3.0, 1.0), 8.0);
        assert_eq!(macaulay_cubic(3.0, 1.0), macaulay(3.0, 1.0, DEFAULT_EXPONENT));
    }

    #[test]
    fn test_step_activates_after_location() {
        assert!(!step_active(1.0, 1.0));
        assert!(!step_active(0.999, 1.0));
        assert!(step_active(1.0 + 1e-9, 1.0));
    }
}
