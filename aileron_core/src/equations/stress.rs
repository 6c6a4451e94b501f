//! # Stress Formulas
//!
//! Bending normal stress for unsymmetric bending and the von Mises
//! equivalent stress.
//!
//! ## Sign Conventions
//!
//! - `y` measured from the z axis (up positive)
//! - `z` measured from the centroidal y axis (toward the leading edge positive)
//! - Tension positive

/// Normal stress from biaxial bending about the centroidal axes
///
/// # Formula
/// ```text
/// σx = (Mz·Iyy·y + My·Izz·z) / (Izz·Iyy)
/// ```
///
/// `z` must already be measured from the centroid.
///
/// # Example
/// ```rust
/// use aileron_core::equations::stress::bending_normal_stress;
///
/// // Pure Mz: σ = Mz·y/Izz
/// let sigma = bending_normal_stress(100.0, 0.0, 2.0, 5.0, 0.5, 0.0);
/// assert!((sigma - 25.0).abs() < 1e-12);
/// ```
#[inline]
pub fn bending_normal_stress(m_z: f64, m_y: f64, i_zz: f64, i_yy: f64, y: f64, z: f64) -> f64 {
    (m_z * i_yy * y + m_y * i_zz * z) / (i_zz * i_yy)
}

/// Von Mises equivalent stress
///
/// # Formula
/// ```text
/// σvm = √( ((σxx−σyy)² + (σyy−σzz)² + (σxx−σzz)²)/2 + 3(τxy² + τxz² + τyz²) )
/// ```
///
/// # Arguments
/// * `sigma` - `[σxx, σyy, σzz]`
/// * `tau` - `[τxy, τxz, τyz]`
///
/// The radicand is a sum of squares, so the result is never negative.
#[inline]
pub fn von_mises(sigma: [f64; 3], tau: [f64; 3]) -> f64 {
    let [sxx, syy, szz] = sigma;
    let [txy, txz, tyz] = tau;
    let normal = ((sxx - syy).powi(2) + (syy - szz).powi(2) + (sxx - szz).powi(2)) / 2.0;
    let shear = 3.0 * (txy * txy + txz * txz + tyz * tyz);
    (normal + shear).sqrt()
}
