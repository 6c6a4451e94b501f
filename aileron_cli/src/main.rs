//! # Aileron Loads CLI
//!
//! Terminal front end for `aileron_core`: runs an analysis case, prints the
//! load and deflection table plus a stress summary, then evaluates one
//! station in detail.
//!
//! ```text
//! aileron_cli [case.json] [report.json]
//! ```
//!
//! Without a case file the reference A320 aileron is analysed with the
//! reactions read from `reactionForces.dat`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use aileron_core::calculations::StressState;
use aileron_core::file_io::{load_case, save_report};
use aileron_core::units::{Megapascals, Pascals};
use aileron_core::{AeroIntegral, AnalysisCase, AnalysisReport, BeamSolution, CalcError, CalcResult, FieldCheck};

const DEFAULT_REACTION_CACHE: &str = "reactionForces.dat";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn default_case() -> AnalysisCase {
    let mut case = AnalysisCase::new("", "A320 reference aileron");
    case.reactions.cache_path = Some(PathBuf::from(DEFAULT_REACTION_CACHE));
    case
}

/// Extra help when the default case cannot read its reaction cache
fn default_case_hint(case_path: Option<&Path>, error: &CalcError) -> Option<String> {
    if case_path.is_some() || !matches!(error, CalcError::FileError { .. } | CalcError::MalformedData { .. }) {
        return None;
    }

    Some(format!(
        "No case file was given, so the A320 reactions are read from '{}'.\n\
         Place a 12-value reaction row there, or pass a case JSON with inline reactions:\n  \
         aileron_cli case.json [report.json]",
        DEFAULT_REACTION_CACHE
    ))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Aileron Loads - Internal Loads, Deflections and Stresses");
    println!("========================================================");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let case_path = args.first().map(Path::new);
    if let Err(e) = run(case_path, args.get(1).map(Path::new)) {
        eprintln!("Error: {}", e);
        if let Some(hint) = default_case_hint(case_path, &e) {
            eprintln!();
            eprintln!("{}", hint);
        }
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(case_path: Option<&Path>, report_path: Option<&Path>) -> CalcResult<()> {
    let case = match case_path {
        Some(path) => load_case(path)?,
        None => default_case(),
    };

    let (geometry, reactions) = case.solve()?;
    let solution = BeamSolution::new(&geometry, &reactions, case.aero);
    let report = case.build_report(&solution)?;

    print_summary(&report);
    print_verification(&report.verification);

    let default_x = report.critical_section.station;
    let x = prompt_f64(&format!("Station to evaluate (m) [{:.3}]: ", default_x), default_x);
    let x = match geometry.check_station(x) {
        Ok(x) => x,
        Err(e) => {
            println!("  {} - using x = {:.3} m", e, default_x);
            default_x
        }
    };
    print_station(&solution, &report.verification, x);

    println!();
    println!("JSON Output (for tooling):");
    if let Ok(json) = serde_json::to_string_pretty(&report.results.max_moment_z) {
        println!("max_moment_z: {}", json);
    }
    if let Ok(json) = serde_json::to_string_pretty(&report.geometry) {
        println!("{}", json);
    }

    if let Some(path) = report_path {
        save_report(&report, path)?;
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let g = &report.geometry;
    let r = &report.results;

    println!("═══════════════════════════════════════");
    println!("  CASE: {}", report.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Geometry:");
    println!("  Span:       {:.3} m", g.span);
    println!("  Chord:      {:.3} m", g.chord);
    println!("  Height:     {:.3} m", g.height);
    println!("  θ:          {:.1}°", g.theta_deg);
    println!("  Izz / Iyy:  {:.4e} / {:.4e} m⁴", g.i_zz, g.i_yy);
    println!("  z centroid: {:.4} m", g.z_centroid);
    println!();

    println!("  {:>7} {:>11} {:>11} {:>11} {:>11} {:>11} {:>10} {:>10} {:>10}",
        "x [m]", "Sy [N]", "Sz [N]", "My [Nm]", "Mz [Nm]", "T [Nm]", "v [mm]", "w [mm]", "φ [deg]");
    let step = (r.stations.len() / 20).max(1);
    for i in (0..r.stations.len()).step_by(step) {
        println!("  {:>7.3} {:>11.1} {:>11.1} {:>11.1} {:>11.1} {:>11.1} {:>10.3} {:>10.3} {:>10.4}",
            r.stations[i],
            r.shear_y_diagram[i].1,
            r.shear_z_diagram[i].1,
            r.moment_y_diagram[i].1,
            r.moment_z_diagram[i].1,
            r.torque_diagram[i].1,
            r.deflection_v_diagram[i].1 * 1000.0,
            r.deflection_w_diagram[i].1 * 1000.0,
            r.twist_diagram[i].1.to_degrees(),
        );
    }
    println!();

    println!("Maxima:");
    let rows = [
        ("Sy", r.max_shear_y, "N", 1.0),
        ("Sz", r.max_shear_z, "N", 1.0),
        ("My", r.max_moment_y, "Nm", 1.0),
        ("Mz", r.max_moment_z, "Nm", 1.0),
        ("T", r.max_torque, "Nm", 1.0),
        ("v", r.max_deflection_v, "mm", 1000.0),
        ("w", r.max_deflection_w, "mm", 1000.0),
        ("φ", r.max_twist, "deg", 180.0 / std::f64::consts::PI),
    ];
    for (name, extremum, unit, scale) in rows {
        println!("  {:<3} = {:>12.3} {:<4} at x = {:.3} m", name, extremum.value * scale, unit, extremum.position);
    }
    println!();

    let c = &report.critical_section;
    println!("Critical section:");
    println!("  x = {:.3} m, σvm = {:.1} MPa at (y, z) = ({:.4}, {:.4}) m",
        c.station, mpa(c.max_von_mises), c.location.0, c.location.1);
    println!();
}

fn mpa(pascals: f64) -> f64 {
    Megapascals::from(Pascals(pascals)).0
}

fn print_verification(checks: &[FieldCheck]) {
    if checks.is_empty() {
        return;
    }

    println!("Verification:");
    for check in checks {
        println!("  {:<4} {:<6} max |Δ| = {:.3e} at x = {:.3} m, rms = {:.3e} (tol {:.1e})  {}",
            check.field.label(),
            if check.passed { "PASS" } else { "FAIL" },
            check.deviation.max_abs,
            check.deviation.worst_x,
            check.deviation.rms,
            check.tolerance,
            check.reference.display(),
        );
    }
    println!();
}

fn print_station<A: AeroIntegral>(solution: &BeamSolution<'_, A>, checks: &[FieldCheck], x: f64) {
    let (big_v, big_w) = solution.global_deflection(x);

    println!();
    println!("Station x = {:.4} m:", x);
    println!("  Sy = {:.1} N, Sz = {:.1} N", solution.shear_y(x), solution.shear_z(x));
    println!("  My = {:.1} Nm, Mz = {:.1} Nm, T = {:.1} Nm",
        solution.moment_y(x), solution.moment_z(x), solution.torque(x));
    println!("  v = {:.3} mm, w = {:.3} mm, φ = {:.4}°",
        solution.deflection_v(x) * 1000.0, solution.deflection_w(x) * 1000.0, solution.twist(x).to_degrees());
    println!("  Aileron frame: V = {:.3} mm, W = {:.3} mm", big_v * 1000.0, big_w * 1000.0);
    for check in checks {
        println!("  {} reference = {:.6e}, computed = {:.6e}",
            check.field.label(), check.reference_at(x), check.field.evaluate(solution, x));
    }
    println!();
    println!("  {:>9} {:>9} {:>10} {:>10}", "y [m]", "z [m]", "σx [MPa]", "σvm [MPa]");
    for p in solution.section_stresses(x) {
        println!("  {:>9.4} {:>9.4} {:>10.2} {:>10.2}",
            p.y, p.z, mpa(p.sigma_x), mpa(StressState::uniaxial(p.sigma_x).von_mises()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_unreadable_default_cache() {
        let missing = CalcError::file_error("read reaction cache", DEFAULT_REACTION_CACHE, "not found");
        let hint = default_case_hint(None, &missing).unwrap();
        assert!(hint.contains(DEFAULT_REACTION_CACHE));
        assert!(hint.contains("case.json"));

        let malformed = CalcError::malformed_data(DEFAULT_REACTION_CACHE, 1, "expected 12 values, found 3");
        assert!(default_case_hint(None, &malformed).is_some());
        assert!(default_case_hint(Some(Path::new("case.json")), &missing).is_none());
        assert!(default_case_hint(None, &CalcError::missing_field("reactions.values")).is_none());
    }

    #[test]
    fn test_default_case_reads_reaction_cache() {
        let case = default_case();
        assert_eq!(case.reactions.cache_path, Some(PathBuf::from(DEFAULT_REACTION_CACHE)));
        assert!(case.reactions.values.is_none());
    }

    #[test]
    fn test_megapascal_conversion() {
        assert!((mpa(1.5e8) - 150.0).abs() < 1e-12);
    }
}
