//! Latitude-band spatial index for nearest-neighbor lookups over grid
//! coordinates.
//!
//! The circulation line integral samples the wind field at the nearest
//! grid point to every path vertex. An exhaustive scan is O(R·C) per
//! lookup; this index buckets the samples into latitude bands so a lookup
//! only visits bands that can still contain a closer sample. Results are
//! identical to the exhaustive row-major scan, including its tie-breaking:
//! among equidistant samples the smallest row-major cell index wins.

use rustc_hash::FxHashMap;

use crate::core_types::field::{LatLon, VectorField};
use crate::geodesy::{constants::EARTH_RADIUS_M, haversine_distance};

/// Nearest-neighbor index over a [`VectorField`]'s sample coordinates.
pub struct SpatialIndex {
    /// Sample ids (row-major cell index) bucketed by latitude band. Ids
    /// within a band are in increasing order because samples are inserted
    /// in row-major order.
    bands: FxHashMap<i32, Vec<u32>>,
    coordinates: Vec<LatLon>,
    cols: usize,
    origin_lat: f64,
    band_deg: f64,
    band_min: i32,
    band_max: i32,
}

impl SpatialIndex {
    /// Build an index over the field's sample coordinates.
    #[must_use]
    pub fn new(field: &VectorField) -> Self {
        let coordinates = field.coordinates().to_vec();
        let min_lat = coordinates
            .iter()
            .map(|c| c.lat)
            .fold(f64::INFINITY, f64::min);
        let max_lat = coordinates
            .iter()
            .map(|c| c.lat)
            .fold(f64::NEG_INFINITY, f64::max);

        // One band per grid row on average; a degenerate single-latitude
        // grid collapses into one band and lookups fall back to a plain
        // scan of it.
        let band_deg = ((max_lat - min_lat) / field.rows() as f64).max(1e-9);

        let mut bands: FxHashMap<i32, Vec<u32>> = FxHashMap::default();
        let mut band_min = i32::MAX;
        let mut band_max = i32::MIN;
        for (id, coordinate) in coordinates.iter().enumerate() {
            let band = quantize((coordinate.lat - min_lat) / band_deg);
            band_min = band_min.min(band);
            band_max = band_max.max(band);
            bands.entry(band).or_default().push(id as u32);
        }

        SpatialIndex {
            bands,
            coordinates,
            cols: field.cols(),
            origin_lat: min_lat,
            band_deg,
            band_min,
            band_max,
        }
    }

    /// Row and column of the sample nearest to `(lat, lon)` by
    /// great-circle distance.
    ///
    /// Bands are visited outward from the query latitude and the search
    /// stops once every unvisited band is provably farther than the best
    /// candidate: a sample `k` bands away differs by at least `k - 1`
    /// band-widths of latitude, and great-circle distance is never less
    /// than the latitude separation alone.
    #[must_use]
    pub fn nearest(&self, lat: f64, lon: f64) -> (usize, usize) {
        let center = quantize((lat - self.origin_lat) / self.band_deg).clamp(self.band_min, self.band_max);
        let max_offset = (center - self.band_min).max(self.band_max - center);

        let mut best: Option<(f64, u32)> = None;
        for offset in 0..=max_offset {
            if let Some((best_distance, _)) = best {
                if self.band_floor_distance(offset) > best_distance {
                    break;
                }
            }
            self.scan_band(center + offset, lat, lon, &mut best);
            if offset > 0 {
                self.scan_band(center - offset, lat, lon, &mut best);
            }
        }

        let (_, id) = best.expect("index always contains at least one sample");
        ((id as usize) / self.cols, (id as usize) % self.cols)
    }

    /// Lower bound (m) on the distance from the query to any sample in a
    /// band `offset` bands away.
    fn band_floor_distance(&self, offset: i32) -> f64 {
        let gap_bands = f64::from((offset - 1).max(0));
        (gap_bands * self.band_deg).to_radians() * EARTH_RADIUS_M
    }

    fn scan_band(&self, band: i32, lat: f64, lon: f64, best: &mut Option<(f64, u32)>) {
        let Some(ids) = self.bands.get(&band) else {
            return;
        };
        for &id in ids {
            let candidate = self.coordinates[id as usize];
            let distance = haversine_distance(lat, lon, candidate.lat, candidate.lon);
            let better = match *best {
                None => true,
                Some((best_distance, best_id)) => {
                    distance < best_distance || (distance == best_distance && id < best_id)
                }
            };
            if better {
                *best = Some((distance, id));
            }
        }
    }
}

/// Floor-quantize a band coordinate, saturating instead of wrapping for
/// far-away queries.
fn quantize(value: f64) -> i32 {
    value.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::vec3::Vec3;

    fn lattice(rows: usize, cols: usize, south: f64, west: f64, step: f64) -> VectorField {
        let mut wind = Vec::with_capacity(rows * cols);
        let mut coordinates = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                wind.push(Vec3::zeros());
                coordinates.push(LatLon::new(
                    south + row as f64 * step,
                    west + col as f64 * step,
                ));
            }
        }
        VectorField::new(wind, coordinates, rows, cols).unwrap()
    }

    /// Exhaustive row-major scan with strict improvement, the semantics the
    /// index must reproduce exactly.
    fn nearest_by_scan(field: &VectorField, lat: f64, lon: f64) -> (usize, usize) {
        let mut best = (f64::INFINITY, 0, 0);
        for row in 0..field.rows() {
            for col in 0..field.cols() {
                let c = field.coordinate(row, col);
                let d = haversine_distance(lat, lon, c.lat, c.lon);
                if d < best.0 {
                    best = (d, row, col);
                }
            }
        }
        (best.1, best.2)
    }

    #[test]
    fn matches_exhaustive_scan() {
        let field = lattice(7, 9, -2.0, 10.0, 0.5);
        let index = SpatialIndex::new(&field);
        let queries = [
            (-2.0, 10.0),
            (1.3, 13.9),
            (0.26, 11.74),
            (-1.99, 14.0),
            (0.0, 12.25),
        ];
        for (lat, lon) in queries {
            assert_eq!(
                index.nearest(lat, lon),
                nearest_by_scan(&field, lat, lon),
                "query ({lat}, {lon})"
            );
        }
    }

    #[test]
    fn queries_outside_grid_resolve_to_edge_samples() {
        let field = lattice(5, 5, 0.0, 0.0, 1.0);
        let index = SpatialIndex::new(&field);
        assert_eq!(index.nearest(90.0, 2.0), nearest_by_scan(&field, 90.0, 2.0));
        assert_eq!(
            index.nearest(-45.0, -45.0),
            nearest_by_scan(&field, -45.0, -45.0)
        );
    }

    #[test]
    fn equidistant_samples_break_ties_row_major() {
        // Query on the exact midpoint of two equal-latitude samples: both
        // distances are bitwise identical, so the lower cell id must win.
        let field = lattice(1, 2, 0.0, 0.0, 1.0);
        let index = SpatialIndex::new(&field);
        assert_eq!(index.nearest(0.0, 0.5), (0, 0));
    }

    #[test]
    fn single_sample_grid() {
        let field = lattice(1, 1, 12.0, 34.0, 1.0);
        let index = SpatialIndex::new(&field);
        assert_eq!(index.nearest(-80.0, 170.0), (0, 0));
    }
}
