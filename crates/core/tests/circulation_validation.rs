//! Circulation analysis validation suite.
//!
//! Exercises the Stokes-side estimators end to end:
//! 1. Solid-body rotation: interior curl ≈ 2ω and circulation ≈ 2ω·area
//! 2. Agreement between the line integral and the curl surface estimate
//! 3. Calm-field and degenerate-path behavior
//! 4. The storm gate: circulation and curl must trigger together
//! 5. Invariance under longitude translation of the whole request

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fluxcast_core::analysis::curl_field;
use fluxcast_core::{CirculationAnalyzer, LatLon, Vec3, VectorField};

/// One degree of arc along a meridian (m).
const METERS_PER_DEGREE: f64 = 6_371_000.0 * std::f64::consts::PI / 180.0;

/// Solid-body rotation with angular velocity `omega` (1/s) around
/// `center`, sampled on a square lattice spanning `center ± half_extent`
/// degrees.
///
/// Offsets are taken in a local planar frame (degrees scaled to meters),
/// which is accurate to a few parts in 10⁵ at this extent near the
/// equator.
fn rotating_field(center: LatLon, half_extent: f64, samples: usize, omega: f64) -> VectorField {
    let step = 2.0 * half_extent / (samples - 1) as f64;
    let mut wind = Vec::new();
    let mut coordinates = Vec::new();
    for row in 0..samples {
        for col in 0..samples {
            let lat = center.lat - half_extent + row as f64 * step;
            let lon = center.lon - half_extent + col as f64 * step;
            let x_m = (lon - center.lon) * METERS_PER_DEGREE;
            let y_m = (lat - center.lat) * METERS_PER_DEGREE;
            wind.push(Vec3::new(-omega * y_m, omega * x_m, 0.0));
            coordinates.push(LatLon::new(lat, lon));
        }
    }
    VectorField::new(wind, coordinates, samples, samples).unwrap()
}

/// Circular path of `vertices` points with radius `radius_deg` around
/// `center`, closed.
fn circular_path(center: LatLon, radius_deg: f64, vertices: usize) -> Vec<LatLon> {
    let mut path: Vec<LatLon> = (0..vertices)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / vertices as f64;
            LatLon::new(
                center.lat + radius_deg * theta.sin(),
                center.lon + radius_deg * theta.cos(),
            )
        })
        .collect();
    path.push(path[0]);
    path
}

#[test]
fn solid_body_rotation_has_curl_two_omega() {
    let omega = 1e-4;
    let field = rotating_field(LatLon::new(0.0, 0.0), 0.5, 41, omega);
    let curl = curl_field(&field);

    // Interior cells: central differences on a linear field are exact up
    // to the small spherical correction in the column spacing.
    for row in 1..40 {
        for col in 1..40 {
            assert_relative_eq!(curl.get(row, col), 2.0 * omega, max_relative = 1e-3);
        }
    }
}

#[test]
fn circulation_matches_twice_omega_times_enclosed_area() {
    let omega = 1e-4;
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, omega);
    let path = circular_path(center, 0.35, 72);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);

    let radius_m = 0.35 * METERS_PER_DEGREE;
    let expected = 2.0 * omega * std::f64::consts::PI * radius_m * radius_m;
    assert_relative_eq!(analysis.circulation, expected, max_relative = 0.1);
    // Counterclockwise rotation: positive circulation.
    assert!(analysis.circulation > 0.0);
}

#[test]
fn surface_estimate_tracks_mean_interior_curl() {
    // The estimate is (mean interior curl) × (shoelace area in degrees²);
    // for solid-body rotation that is 2ω times the polygon area.
    let omega = 1e-4;
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, omega);
    let path = circular_path(center, 0.35, 72);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);

    let polygon_area_deg2 = std::f64::consts::PI * 0.35 * 0.35;
    let expected = 2.0 * omega * polygon_area_deg2;
    assert_relative_eq!(
        analysis.computation_details.surface_integral,
        expected,
        max_relative = 0.05
    );
}

#[test]
fn clockwise_rotation_gives_negative_circulation() {
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, -1e-4);
    let path = circular_path(center, 0.35, 72);
    let analysis = CirculationAnalyzer::default().analyze(&field, &path);

    assert!(analysis.circulation < 0.0);
    assert!(analysis.interpretation.contains("clockwise"));
}

#[test]
fn calm_field_over_square_path_is_inert() {
    let mut wind = Vec::new();
    let mut coordinates = Vec::new();
    for row in 0..5 {
        for col in 0..5 {
            wind.push(Vec3::zeros());
            coordinates.push(LatLon::new(row as f64 * 0.25, col as f64 * 0.25));
        }
    }
    let field = VectorField::new(wind, coordinates, 5, 5).unwrap();
    let square = [
        LatLon::new(0.0, 0.0),
        LatLon::new(0.0, 1.0),
        LatLon::new(1.0, 1.0),
        LatLon::new(1.0, 0.0),
        LatLon::new(0.0, 0.0),
    ];

    let analysis = CirculationAnalyzer::default().analyze(&field, &square);
    assert_eq!(analysis.circulation, 0.0);
    assert_eq!(analysis.curl_magnitude, 0.0);
    assert!(!analysis.storm_detection);
    assert_eq!(analysis.computation_details.surface_integral, 0.0);
}

#[test]
fn storm_detected_for_fast_rotation() {
    // ω = 0.01 gives curl 0.02 (above the 0.01 peak threshold) and a
    // circulation far above 1000 m²/s around this path.
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, 0.01);
    let path = circular_path(center, 0.35, 72);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);
    assert!(analysis.storm_detection);
    assert!(analysis.interpretation.starts_with("Strong counterclockwise"));
    assert!(analysis
        .interpretation
        .ends_with("possible storm formation"));
}

#[test]
fn no_storm_without_significant_circulation() {
    // Same fast rotation, but a path so small that every vertex snaps to
    // the calm center sample: circulation stays under the 1000 m²/s gate,
    // so the strong curl alone must not trigger a storm.
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, 0.01);
    let path = circular_path(center, 0.001, 16);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);
    assert!(analysis.circulation.abs() <= 1000.0);
    assert!(!analysis.storm_detection);
}

#[test]
fn no_storm_for_weak_rotation() {
    // Synoptic-scale ω = 1e-4 yields large circulation but curl well below
    // both rotation thresholds: the AND gate must stay closed.
    let center = LatLon::new(0.0, 0.0);
    let field = rotating_field(center, 0.5, 41, 1e-4);
    let path = circular_path(center, 0.35, 72);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);
    assert!(analysis.circulation.abs() > 1000.0);
    assert!(!analysis.storm_detection);
}

#[test]
fn analysis_is_invariant_under_longitude_translation() {
    let omega = 2e-4;
    let base_center = LatLon::new(0.0, 0.0);
    let shifted_center = LatLon::new(0.0, 40.0);
    let base_field = rotating_field(base_center, 0.5, 21, omega);
    let shifted_field = rotating_field(shifted_center, 0.5, 21, omega);
    let base_path = circular_path(base_center, 0.3, 36);
    let shifted_path = circular_path(shifted_center, 0.3, 36);

    let analyzer = CirculationAnalyzer::default();
    let base = analyzer.analyze(&base_field, &base_path);
    let shifted = analyzer.analyze(&shifted_field, &shifted_path);

    assert_relative_eq!(base.circulation, shifted.circulation, max_relative = 1e-9);
    assert_relative_eq!(
        base.curl_magnitude,
        shifted.curl_magnitude,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        base.computation_details.surface_integral,
        shifted.computation_details.surface_integral,
        max_relative = 1e-6
    );
    assert_eq!(base.storm_detection, shifted.storm_detection);
}

#[test]
fn uniform_wind_produces_no_rotation_signal() {
    let mut wind = Vec::new();
    let mut coordinates = Vec::new();
    for row in 0..9 {
        for col in 0..9 {
            wind.push(Vec3::new(12.0, 5.0, 0.0));
            coordinates.push(LatLon::new(row as f64 * 0.1, col as f64 * 0.1));
        }
    }
    let field = VectorField::new(wind, coordinates, 9, 9).unwrap();
    let path = circular_path(LatLon::new(0.4, 0.4), 0.3, 48);

    let analysis = CirculationAnalyzer::default().analyze(&field, &path);
    // The curl vanishes identically for uniform flow.
    assert_abs_diff_eq!(analysis.curl_magnitude, 0.0, epsilon = 1e-12);
    // The discrete loop around uniform flow nearly cancels; what remains
    // is quantization of the path against the sample lattice.
    assert!(!analysis.storm_detection);
}
