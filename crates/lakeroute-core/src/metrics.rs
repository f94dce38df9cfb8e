//! Distance, ETA and extent of a planned route.

use crate::geojson::FeatureCollection;
use crate::models::Vessel;
use crate::spatial::distance_km;
use serde::{Deserialize, Serialize};

pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Great-circle length of every `LineString` in the collection, in km.
pub fn line_distance_km(collection: &FeatureCollection) -> f64 {
    collection
        .line_strings()
        .flat_map(|coords| coords.windows(2))
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum()
}

pub fn eta_hours(distance_km: f64, speed_knots: f64) -> f64 {
    let kmph = (speed_knots * KM_PER_NAUTICAL_MILE).max(1e-6);
    distance_km / kmph
}

/// `[min_lon, min_lat, max_lon, max_lat]` over line coordinates.
pub fn route_bbox(collection: &FeatureCollection) -> Option<[f64; 4]> {
    let mut coords = collection.line_strings().flatten().peekable();
    coords.peek()?;
    Some(coords.fold(
        [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY],
        |[min_x, min_y, max_x, max_y], [x, y]| {
            [min_x.min(*x), min_y.min(*y), max_x.max(*x), max_y.max(*y)]
        },
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub eta_hours: f64,
    pub bbox: Option<[f64; 4]>,
}

impl RouteMetrics {
    pub fn for_route(route: &FeatureCollection, vessel: &Vessel) -> Self {
        let distance_km = line_distance_km(route);
        Self {
            distance_km,
            eta_hours: eta_hours(distance_km, vessel.speed_knots),
            bbox: route_bbox(route),
        }
    }
}
