//! # Aerodynamic Load Integrals
//!
//! The beam solution never sees the distributed aerodynamic load itself,
//! only its repeated spanwise integrals. [`AeroIntegral`] is that contract:
//!
//! | order | `integral(x, n)`     | `shear_integral(x, arm, n)` |
//! |-------|----------------------|-----------------------------|
//! | 1     | running intensity    | running torque intensity    |
//! | 2     | shear                | torque                      |
//! | 3     | bending moment       | twist angle (× G·J)         |
//! | 4     | slope (× E·I)        |                             |
//! | 5     | deflection (× E·I)   |                             |
//!
//! The first integration is the chordwise one that turns the pressure
//! distribution into a line load, so order `n` carries `n − 1` spanwise
//! integrations from 0 to x.
//!
//! How the integrals are produced (quadrature over a pressure grid, curve
//! fits, ...) is up to the implementor. [`UniformAeroLoad`] is the closed
//! form for a spanwise-constant line load; [`AeroCallables`] adapts any pair
//! of plain functions.

use serde::{Deserialize, Serialize};

/// Pre-integrated aerodynamic load, keyed by span position and order.
pub trait AeroIntegral {
    /// n-fold integral of the transverse aerodynamic line load from 0 to x.
    fn integral(&self, x: f64, order: u32) -> f64;

    /// n-fold integral of the aerodynamic torque about an axis `arm`
    /// metres from the load's reference line.
    fn shear_integral(&self, x: f64, arm: f64, order: u32) -> f64;
}

impl<T: AeroIntegral + ?Sized> AeroIntegral for &T {
    fn integral(&self, x: f64, order: u32) -> f64 {
        (**self).integral(x, order)
    }

    fn shear_integral(&self, x: f64, arm: f64, order: u32) -> f64 {
        (**self).shear_integral(x, arm, order)
    }
}

/// `x^(n−1) / (n−1)!`, the n-th integral of a unit line load.
///
/// Orders 0 and 1 both return 1 (the intensity itself).
fn unit_load_integral(x: f64, order: u32) -> f64 {
    let spanwise = order.saturating_sub(1);
    (1..=spanwise).fold(1.0, |acc, k| acc * x / k as f64)
}

/// Spanwise-constant aerodynamic line load.
///
/// ```rust
/// use aileron_core::aero::{AeroIntegral, UniformAeroLoad};
///
/// let q = UniformAeroLoad::new(5_000.0, 0.0);
/// // shear q·x, moment q·x²/2
/// assert!((q.integral(2.0, 2) - 10_000.0).abs() < 1e-9);
/// assert!((q.integral(2.0, 3) - 10_000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UniformAeroLoad {
    /// Line load q (N/m), positive in +y
    pub intensity: f64,
    /// Offset of the centre of pressure added to the torque arm (m)
    pub centre_of_pressure: f64,
}

impl UniformAeroLoad {
    /// Create a uniform line load
    pub fn new(intensity: f64, centre_of_pressure: f64) -> Self {
        UniformAeroLoad {
            intensity,
            centre_of_pressure,
        }
    }

    /// No aerodynamic load at all
    pub fn none() -> Self {
        Self::default()
    }
}

impl AeroIntegral for UniformAeroLoad {
    fn integral(&self, x: f64, order: u32) -> f64 {
        self.intensity * unit_load_integral(x, order)
    }

    fn shear_integral(&self, x: f64, arm: f64, order: u32) -> f64 {
        self.intensity * (arm + self.centre_of_pressure) * unit_load_integral(x, order)
    }
}

/// Adapter over two externally supplied functions.
///
/// ```rust
/// use aileron_core::aero::{AeroCallables, AeroIntegral};
///
/// let aero = AeroCallables::new(|x: f64, _n: u32| x, |x: f64, arm: f64, _n: u32| arm * x);
/// assert_eq!(aero.integral(3.0, 2), 3.0);
/// assert_eq!(aero.shear_integral(3.0, 0.5, 2), 1.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AeroCallables<F, G> {
    integral: F,
    shear_integral: G,
}

impl<F, G> AeroCallables<F, G>
where
    F: Fn(f64, u32) -> f64,
    G: Fn(f64, f64, u32) -> f64,
{
    pub fn new(integral: F, shear_integral: G) -> Self {
        AeroCallables {
            integral,
            shear_integral,
        }
    }
}

impl<F, G> AeroIntegral for AeroCallables<F, G>
where
    F: Fn(f64, u32) -> f64,
    G: Fn(f64, f64, u32) -> f64,
{
    fn integral(&self, x: f64, order: u32) -> f64 {
        (self.integral)(x, order)
    }

    fn shear_integral(&self, x: f64, arm: f64, order: u32) -> f64 {
        (self.shear_integral)(x, arm, order)
    }
}
