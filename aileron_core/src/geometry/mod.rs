//! # Aileron Geometry Model
//!
//! Dimensions, material constants and support locations of the aileron,
//! plus the section properties derived from them.
//!
//! The model is built in two stages:
//!
//! - [`AileronInput`] - the raw record, as an engineer would quote it
//!   (chord, span, hinge stations, skin gauges, ...). JSON-serializable.
//! - [`AileronGeometry`] - derived once from the input: actuator stations,
//!   hinge-line offset, section properties and stiffnesses. Never mutated
//!   afterwards; every evaluator borrows it.
//!
//! ## Example
//!
//! ```rust
//! use aileron_core::geometry::{AileronGeometry, AileronInput};
//!
//! let geometry = AileronGeometry::new(&AileronInput::a320()).unwrap();
//!
//! // Actuators straddle the middle hinge
//! assert!(geometry.x_i < geometry.x_2 && geometry.x_2 < geometry.x_ii);
//! assert!(geometry.check_station(1.0).is_ok());
//! assert!(geometry.check_station(3.0).is_err());
//! ```

pub mod section;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Degrees, Gigapascals, Kilonewtons, Meters, Millimeters, Newtons, Pascals, Radians};

pub use section::{SectionProperties, StringerPosition};

/// Shear-centre z offset of the reference section (m)
pub const A320_SHEAR_CENTRE_Z: f64 = -0.215;

/// Torsional constant of the reference section (m⁴)
pub const A320_TORSIONAL_CONSTANT: f64 = 0.00024311681258111343;

/// Reference A320 aileron, derived on first use.
pub static A320: Lazy<AileronGeometry> = Lazy::new(|| AileronGeometry::derive(&AileronInput::a320()));

/// Raw aileron description.
///
/// Lengths are stored in metres; use the [`crate::units`] conversions when
/// quoting centimetres or millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AileronInput {
    /// Chord length C_a
    pub chord: Meters,
    /// Span l_a
    pub span: Meters,
    /// Spanwise station of hinge 1
    pub hinge_1: Meters,
    /// Spanwise station of hinge 2
    pub hinge_2: Meters,
    /// Spanwise station of hinge 3
    pub hinge_3: Meters,
    /// Distance between actuator I and actuator II, centred on hinge 2
    pub actuator_spacing: Meters,
    /// Section height h (leading-edge diameter)
    pub height: Meters,
    /// Skin thickness t_sk
    pub skin_thickness: Meters,
    /// Spar thickness t_sp
    pub spar_thickness: Meters,
    /// Stringer thickness t_st
    pub stringer_thickness: Meters,
    /// Stringer height h_st
    pub stringer_height: Meters,
    /// Stringer width w_st
    pub stringer_width: Meters,
    /// Number of stringers n_st
    pub stringer_count: usize,
    /// Vertical displacement of hinge 1 (boundary condition for the solver)
    pub hinge_1_deflection: Meters,
    /// Vertical displacement of hinge 3 (boundary condition for the solver)
    pub hinge_3_deflection: Meters,
    /// Maximum upward deflection angle θ
    pub max_deflection: Degrees,
    /// Load in actuator II
    pub actuator_load: Newtons,
    /// Young's modulus E
    pub elastic_modulus: Pascals,
    /// Shear modulus G
    pub shear_modulus: Pascals,
    /// Shear-centre z offset
    pub shear_centre_z: Meters,
    /// Torsional constant J (m⁴)
    pub torsional_constant: f64,
}

impl AileronInput {
    /// Reference A320 aileron (aluminium 2024-T3).
    pub fn a320() -> Self {
        AileronInput {
            chord: Meters(0.547),
            span: Meters(2.771),
            hinge_1: Meters(0.153),
            hinge_2: Meters(1.281),
            hinge_3: Meters(2.681),
            actuator_spacing: Centimeters(28.0).into(),
            height: Centimeters(22.5).into(),
            skin_thickness: Millimeters(1.1).into(),
            spar_thickness: Millimeters(2.9).into(),
            stringer_thickness: Millimeters(1.2).into(),
            stringer_height: Centimeters(1.5).into(),
            stringer_width: Centimeters(2.0).into(),
            stringer_count: 17,
            hinge_1_deflection: Centimeters(1.103).into(),
            hinge_3_deflection: Centimeters(1.642).into(),
            max_deflection: Degrees(26.0),
            actuator_load: Kilonewtons(91.7).into(),
            elastic_modulus: Gigapascals(73.1).into(),
            shear_modulus: Gigapascals(28.0).into(),
            shear_centre_z: Meters(A320_SHEAR_CENTRE_Z),
            torsional_constant: A320_TORSIONAL_CONSTANT,
        }
    }

    /// Check dimensions and support ordering.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("chord", self.chord.0),
            ("span", self.span.0),
            ("height", self.height.0),
            ("skin_thickness", self.skin_thickness.0),
            ("spar_thickness", self.spar_thickness.0),
            ("stringer_thickness", self.stringer_thickness.0),
            ("elastic_modulus", self.elastic_modulus.0),
            ("shear_modulus", self.shear_modulus.0),
            ("torsional_constant", self.torsional_constant),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive and finite"));
            }
        }

        if self.stringer_count == 0 {
            return Err(CalcError::invalid_input("stringer_count", "0", "At least one stringer is required"));
        }

        if self.chord.0 <= self.height.0 / 2.0 {
            return Err(CalcError::invalid_input(
                "chord",
                self.chord.0.to_string(),
                "Chord must extend past the leading-edge radius",
            ));
        }

        let span = self.span.0;
        let (x1, x2, x3) = (self.hinge_1.0, self.hinge_2.0, self.hinge_3.0);
        if !(0.0 <= x1 && x1 < x2 && x2 < x3 && x3 <= span) {
            return Err(CalcError::invalid_input(
                "hinge stations",
                format!("{}, {}, {}", x1, x2, x3),
                format!("Hinges must satisfy 0 <= x1 < x2 < x3 <= span ({})", span),
            ));
        }

        let half = self.actuator_spacing.0 / 2.0;
        if self.actuator_spacing.0 < 0.0 || x2 - half < 0.0 || x2 + half > span {
            return Err(CalcError::invalid_input(
                "actuator_spacing",
                self.actuator_spacing.0.to_string(),
                "Actuators must lie within the span",
            ));
        }

        Ok(())
    }
}

impl Default for AileronInput {
    fn default() -> Self {
        Self::a320()
    }
}

/// Derived, read-only geometry and stiffness model shared by every evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AileronGeometry {
    /// Span length (m)
    pub span: f64,
    /// Chord length (m)
    pub chord: f64,
    /// Section height (m)
    pub height: f64,
    /// Actuator II load P (N)
    pub actuator_load: f64,
    /// Deflection angle θ (rad)
    pub theta: f64,
    /// Hinge-line offset r = h/2 (m)
    pub r: f64,
    /// Shear-centre z offset ẑ (m)
    pub shear_centre_z: f64,
    /// Hinge stations (m)
    pub x_1: f64,
    pub x_2: f64,
    pub x_3: f64,
    /// Actuator I station, x₂ − x_a/2 (m)
    pub x_i: f64,
    /// Actuator II station, x₂ + x_a/2 (m)
    pub x_ii: f64,
    /// Hinge 1 and hinge 3 displacements (m)
    pub d_1: f64,
    pub d_3: f64,
    /// Young's and shear moduli (Pa)
    pub elastic_modulus: f64,
    pub shear_modulus: f64,
    /// Torsional constant J (m⁴)
    pub torsional_constant: f64,
    /// Second moments of area (m⁴)
    pub i_zz: f64,
    pub i_yy: f64,
    /// Centroid z offset from the hinge line (m)
    pub z_centroid: f64,
    /// Bending stiffnesses E·Izz, E·Iyy (N·m²)
    pub e_izz: f64,
    pub e_iyy: f64,
    /// Torsional stiffness G·J (N·m²)
    pub g_j: f64,
    /// Full section description
    pub section: SectionProperties,
}

impl AileronGeometry {
    /// Validate the input and derive the geometry.
    pub fn new(input: &AileronInput) -> CalcResult<Self> {
        input.validate()?;
        Ok(Self::derive(input))
    }

    /// Derive the geometry without validation.
    pub fn derive(input: &AileronInput) -> Self {
        let section = SectionProperties::compute(input);
        let e = input.elastic_modulus.0;
        let g = input.shear_modulus.0;
        let j = input.torsional_constant;
        let half_spacing = input.actuator_spacing.0 / 2.0;

        AileronGeometry {
            span: input.span.0,
            chord: input.chord.0,
            height: input.height.0,
            actuator_load: input.actuator_load.0,
            theta: Radians::from(input.max_deflection).0,
            r: input.height.0 / 2.0,
            shear_centre_z: input.shear_centre_z.0,
            x_1: input.hinge_1.0,
            x_2: input.hinge_2.0,
            x_3: input.hinge_3.0,
            x_i: input.hinge_2.0 - half_spacing,
            x_ii: input.hinge_2.0 + half_spacing,
            d_1: input.hinge_1_deflection.0,
            d_3: input.hinge_3_deflection.0,
            elastic_modulus: e,
            shear_modulus: g,
            torsional_constant: j,
            i_zz: section.i_zz,
            i_yy: section.i_yy,
            z_centroid: section.z_centroid,
            e_izz: e * section.i_zz,
            e_iyy: e * section.i_yy,
            g_j: g * j,
            section,
        }
    }

    /// Lever arm of the actuator forces about the shear centre:
    /// cos θ·r + sin θ·ẑ
    pub fn actuator_arm(&self) -> f64 {
        self.theta.cos() * self.r + self.theta.sin() * self.shear_centre_z
    }

    /// Lever arm of the hinge forces and aerodynamic load: ẑ + r
    pub fn hinge_arm(&self) -> f64 {
        self.shear_centre_z + self.r
    }

    /// Every spanwise station where a concentrated load is applied, in
    /// ascending order.
    pub fn load_stations(&self) -> [f64; 5] {
        let mut stations = [self.x_1, self.x_i, self.x_2, self.x_ii, self.x_3];
        stations.sort_by(f64::total_cmp);
        stations
    }

    /// Reject spanwise coordinates outside [0, span].
    ///
    /// Evaluators accept any x; call this where extrapolation is unwanted.
    pub fn check_station(&self, x: f64) -> CalcResult<f64> {
        if x.is_finite() && (0.0..=self.span).contains(&x) {
            Ok(x)
        } else {
            Err(CalcError::invalid_input(
                "x",
                x.to_string(),
                format!("Station must lie within [0, {}] m", self.span),
            ))
        }
    }
}
