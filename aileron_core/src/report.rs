//! # Analysis Report
//!
//! Serializable summary of one run: who and what was analysed, the derived
//! geometry, the reaction vector used, the sampled fields and the most
//! stressed section.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aero::AeroIntegral;
use crate::calculations::{AnalysisResults, BeamSolution, PointStress, StressState};
use crate::case::AnalysisCase;
use crate::geometry::AileronGeometry;
use crate::reactions::ReactionVector;
use crate::verification::FieldCheck;

/// Key derived geometry values, in SI units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySummary {
    pub span: f64,
    pub chord: f64,
    pub height: f64,
    /// Maximum deflection angle (deg)
    pub theta_deg: f64,
    /// x1, x_I, x2, x_II, x3
    pub load_stations: [f64; 5],
    pub cross_area: f64,
    pub stringer_area: f64,
    pub z_centroid: f64,
    pub i_zz: f64,
    pub i_yy: f64,
    pub shear_centre_z: f64,
    pub torsional_constant: f64,
}

impl GeometrySummary {
    pub fn from_geometry(g: &AileronGeometry) -> Self {
        GeometrySummary {
            span: g.span,
            chord: g.chord,
            height: g.height,
            theta_deg: g.theta.to_degrees(),
            load_stations: g.load_stations(),
            cross_area: g.section.cross_area,
            stringer_area: g.section.stringer_area,
            z_centroid: g.z_centroid,
            i_zz: g.i_zz,
            i_yy: g.i_yy,
            shear_centre_z: g.shear_centre_z,
            torsional_constant: g.torsional_constant,
        }
    }
}

/// Section with the highest equivalent stress among the sampled stations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalSection {
    /// Spanwise station (m)
    pub station: f64,
    /// σx at every stringer and spar cap of that section (Pa)
    pub stresses: Vec<PointStress>,
    /// Largest von Mises stress in the section (Pa)
    pub max_von_mises: f64,
    /// Section point (y, z) where it occurs
    pub location: (f64, f64),
}

impl CriticalSection {
    /// Scan the sections at `stations` and keep the worst one.
    pub fn find<A: AeroIntegral>(solution: &BeamSolution<'_, A>, stations: &[f64]) -> Self {
        let mut critical = CriticalSection::default();

        for &x in stations {
            let stresses = solution.section_stresses(x);
            let worst = stresses
                .iter()
                .map(|p| (StressState::uniaxial(p.sigma_x).von_mises(), (p.y, p.z)))
                .max_by(|a, b| a.0.total_cmp(&b.0));

            if let Some((von_mises, location)) = worst {
                if von_mises > critical.max_von_mises || critical.stresses.is_empty() {
                    critical = CriticalSection {
                        station: x,
                        stresses,
                        max_von_mises: von_mises,
                        location,
                    };
                }
            }
        }

        critical
    }
}

/// Complete result of an analysis case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub case_id: Uuid,
    pub label: String,
    pub analyst: String,
    pub generated_at: DateTime<Utc>,
    pub geometry: GeometrySummary,
    pub reactions: ReactionVector,
    pub results: AnalysisResults,
    pub critical_section: CriticalSection,
    /// Reference-curve checks configured on the case
    #[serde(default)]
    pub verification: Vec<FieldCheck>,
}

impl AnalysisReport {
    pub fn new<A: AeroIntegral>(
        case: &AnalysisCase,
        solution: &BeamSolution<'_, A>,
        results: AnalysisResults,
        verification: Vec<FieldCheck>,
    ) -> Self {
        let critical_section = CriticalSection::find(solution, &results.stations);

        info!(
            "report for '{}': {} stations, max von Mises {:.1} MPa at x = {:.3} m",
            case.meta.label,
            results.stations.len(),
            critical_section.max_von_mises / 1e6,
            critical_section.station
        );

        AnalysisReport {
            case_id: case.meta.id,
            label: case.meta.label.clone(),
            analyst: case.meta.analyst.clone(),
            generated_at: Utc::now(),
            geometry: GeometrySummary::from_geometry(solution.geometry()),
            reactions: *solution.reactions(),
            results,
            critical_section,
            verification,
        }
    }
}
