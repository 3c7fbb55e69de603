//! Headless FluxCast demo: builds a synthetic wind field around a vortex
//! and runs both analyses, printing the JSON payloads a renderer would
//! consume.

use clap::Parser;
use fluxcast_core::{
    build_grid, CirculationAnalyzer, DivergenceAnalyzer, FetchError, GeographicBounds, LatLon,
    ObservationProvider, WeatherObservation,
};
use rand::Rng;

/// Weather vector-calculus analysis demo with a synthetic vortex provider
#[derive(Parser, Debug)]
#[command(name = "fluxcast-demo")]
#[command(about = "Divergence and circulation analysis over a synthetic wind field", long_about = None)]
struct Args {
    /// Northern bound of the analysis region (degrees)
    #[arg(long, default_value_t = 1.0)]
    north: f64,

    /// Southern bound of the analysis region (degrees)
    #[arg(long, default_value_t = -1.0)]
    south: f64,

    /// Eastern bound of the analysis region (degrees)
    #[arg(long, default_value_t = 1.0)]
    east: f64,

    /// Western bound of the analysis region (degrees)
    #[arg(long, default_value_t = -1.0)]
    west: f64,

    /// Grid resolution (samples per axis)
    #[arg(short, long, default_value_t = 15)]
    resolution: usize,

    /// Peak tangential wind speed of the synthetic vortex (m/s)
    #[arg(long, default_value_t = 15.0)]
    vortex_speed: f64,

    /// Central pressure drop of the vortex (hPa)
    #[arg(long, default_value_t = 25.0)]
    pressure_drop: f64,

    /// Random jitter added to each observation's wind speed (m/s)
    #[arg(long, default_value_t = 0.5)]
    jitter: f64,

    /// Radius of the circulation path around the vortex center (degrees)
    #[arg(long, default_value_t = 0.5)]
    path_radius: f64,

    /// Number of vertices on the circulation path
    #[arg(long, default_value_t = 36)]
    path_points: usize,
}

/// Synthetic provider: a cyclonic vortex with a pressure minimum at its
/// center plus optional speed jitter. Stands in for a remote weather API.
struct VortexProvider {
    center_lat: f64,
    center_lon: f64,
    peak_speed: f64,
    pressure_drop: f64,
    jitter: f64,
}

impl ObservationProvider for VortexProvider {
    fn fetch(&self, lat: f64, lon: f64) -> Result<WeatherObservation, FetchError> {
        let dlat = lat - self.center_lat;
        let dlon = lon - self.center_lon;
        let radius = dlat.hypot(dlon);

        // Rankine-style profile: speed rises to a peak at 0.3° then decays.
        let shape = (radius / 0.3).min(0.3 / radius.max(1e-6));
        let speed = self.peak_speed * shape + rand::rng().random_range(-self.jitter..=self.jitter);

        // Tangential direction for counterclockwise rotation: 90° ahead of
        // the radial angle, expressed in the u = cos / v = sin convention.
        let direction = dlat.atan2(dlon).to_degrees() + 90.0;

        let pressure = 1013.25 - self.pressure_drop * (-radius * radius / 0.18).exp();

        Ok(WeatherObservation {
            temperature_c: 22.0,
            humidity_pct: 65.0,
            pressure_hpa: pressure,
            wind_speed_m_s: speed.max(0.0),
            wind_direction_deg: direction,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let bounds = GeographicBounds::new(args.north, args.south, args.east, args.west)?;
    let center = LatLon::new(bounds.mean_latitude(), (bounds.east + bounds.west) / 2.0);

    let provider = VortexProvider {
        center_lat: center.lat,
        center_lon: center.lon,
        peak_speed: args.vortex_speed,
        pressure_drop: args.pressure_drop,
        jitter: args.jitter,
    };

    let field = build_grid(&provider, &bounds, args.resolution)?;

    let divergence = DivergenceAnalyzer::default().analyze(&field, &bounds);
    println!("=== Divergence analysis ===");
    println!("{}", serde_json::to_string_pretty(&divergence)?);

    let path: Vec<LatLon> = (0..args.path_points)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / args.path_points as f64;
            LatLon::new(
                center.lat + args.path_radius * theta.sin(),
                center.lon + args.path_radius * theta.cos(),
            )
        })
        .collect();

    let circulation = CirculationAnalyzer::default().analyze(&field, &path);
    println!("=== Circulation analysis ===");
    println!("{}", serde_json::to_string_pretty(&circulation)?);

    Ok(())
}
