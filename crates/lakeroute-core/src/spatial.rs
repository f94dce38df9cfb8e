//! Spatial math: polygon membership and great-circle distances.

/// A `[lon, lat]` pair, the GeoJSON coordinate order.
pub type LonLat = [f64; 2];

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Check whether a point lies inside a polygon ring.
///
/// Ray casting: count crossings of a horizontal ray from the point towards
/// +x; an odd count means inside. An edge only counts when the point's y lies
/// strictly on one side of each endpoint, so horizontal edges are skipped
/// before the intercept division. The ring may be open or closed. Rings with
/// fewer than three vertices contain nothing.
pub fn point_in_ring(point: LonLat, ring: &[LonLat]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let [px, py] = point;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Check a point against a set of polygons, using only the outer ring of each.
///
/// Returns the index of the first containing polygon.
pub fn first_containing_polygon(point: LonLat, polygons: &[Vec<LonLat>]) -> Option<usize> {
    polygons
        .iter()
        .position(|ring| point_in_ring(point, ring))
}

/// Calculate distance between two points in meters using Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine distance between two `[lon, lat]` pairs in kilometers.
pub fn distance_km(a: LonLat, b: LonLat) -> f64 {
    haversine_distance(a[1], a[0], b[1], b[0]) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<LonLat> {
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
    }

    #[test]
    fn point_inside_open_square() {
        assert!(point_in_ring([0.5, 0.5], &unit_square()));
        assert!(!point_in_ring([1.5, 0.5], &unit_square()));
        assert!(!point_in_ring([0.5, -0.1], &unit_square()));
    }

    #[test]
    fn closed_ring_matches_open_ring() {
        let mut closed = unit_square();
        closed.push([0.0, 0.0]);
        for point in [[0.5, 0.5], [0.1, 0.9], [2.0, 2.0], [-0.5, 0.5]] {
            assert_eq!(
                point_in_ring(point, &closed),
                point_in_ring(point, &unit_square())
            );
        }
    }

    #[test]
    fn horizontal_edges_do_not_divide_by_zero() {
        // Bottom edge counts as inside, top edge as outside.
        assert!(point_in_ring([0.5, 0.0], &unit_square()));
        assert!(!point_in_ring([0.5, 1.0], &unit_square()));
        assert!(!point_in_ring([2.0, 0.0], &unit_square()));

        let degenerate = vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        assert!(!point_in_ring([1.0, 0.0], &degenerate));
    }

    #[test]
    fn concave_ring_excludes_notch() {
        // U shape opening to the north.
        let ring = vec![
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
        ];
        assert!(point_in_ring([0.5, 2.0], &ring));
        assert!(point_in_ring([2.5, 2.0], &ring));
        assert!(!point_in_ring([1.5, 2.0], &ring));
        assert!(point_in_ring([1.5, 0.5], &ring));
    }

    #[test]
    fn short_rings_contain_nothing() {
        assert!(!point_in_ring([0.0, 0.0], &[]));
        assert!(!point_in_ring([0.5, 0.5], &[[0.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn first_containing_polygon_wins() {
        let polygons = vec![
            vec![[10.0, 10.0], [11.0, 10.0], [11.0, 11.0]],
            unit_square(),
            vec![[-1.0, -1.0], [2.0, -1.0], [2.0, 2.0], [-1.0, 2.0]],
        ];
        assert_eq!(first_containing_polygon([0.5, 0.5], &polygons), Some(1));
        assert_eq!(first_containing_polygon([1.5, 1.5], &polygons), Some(2));
        assert_eq!(first_containing_polygon([5.0, 5.0], &polygons), None);
    }

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_194.0).abs() < 100.0);
    }

    #[test]
    fn distance_km_uses_lon_lat_order() {
        let detroit = [-83.0458, 42.3314];
        let chicago = [-87.6298, 41.8781];
        let km = distance_km(detroit, chicago);
        assert!((km - 381.0).abs() < 5.0, "got {km}");
    }
}
