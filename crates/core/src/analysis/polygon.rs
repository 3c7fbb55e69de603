//! Point-in-polygon and area helpers for closed geographic paths.

use crate::core_types::field::LatLon;

/// Ray-casting containment test treating (lon, lat) as (x, y).
///
/// Uses the even-odd rule over the polygon's edges. Polygons with fewer
/// than three vertices contain nothing.
#[must_use]
pub fn point_in_polygon(lat: f64, lon: f64, polygon: &[LatLon]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let (x, y) = (lon, lat);
    let n = polygon.len();
    let mut inside = false;

    let mut p1 = polygon[0];
    for i in 1..=n {
        let p2 = polygon[i % n];
        let (p1x, p1y) = (p1.lon, p1.lat);
        let (p2x, p2y) = (p2.lon, p2.lat);
        if y > p1y.min(p2y) && y <= p1y.max(p2y) && x <= p1x.max(p2x) {
            // A horizontal edge (p1y == p2y) cannot reach here: y cannot be
            // both above the minimum and at most the maximum of two equal
            // values, so the division is safe.
            let x_intersection = (y - p1y) * (p2x - p1x) / (p2y - p1y) + p1x;
            if p1x == p2x || x <= x_intersection {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

/// Shoelace area of a polygon over its raw (lat, lon) coordinates.
///
/// The result is in degrees²; fewer than three vertices give 0. A closing
/// duplicate of the first vertex contributes nothing and may be present or
/// absent.
#[must_use]
pub fn polygon_area(polygon: &[LatLon]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += polygon[i].lat * polygon[j].lon;
        area -= polygon[j].lat * polygon[i].lon;
    }
    area.abs() / 2.0
}

/// Copy of `path` with the first point appended when the loop is open.
#[must_use]
pub fn close_path(path: &[LatLon]) -> Vec<LatLon> {
    let mut closed = path.to_vec();
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        if first != last {
            closed.push(first);
        }
    }
    closed
}
