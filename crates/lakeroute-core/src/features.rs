//! Land and ice polygon sets used to rasterize the cost grid.

use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::spatial::{first_containing_polygon, LonLat};
use serde::{Deserialize, Serialize};

pub const MAX_ICE_VALUE: f64 = 100.0;

/// An impassable land mass. Only outer rings are kept; holes are not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandFeature {
    pub name: Option<String>,
    pub polygons: Vec<Vec<LonLat>>,
}

impl LandFeature {
    pub fn new(name: impl Into<String>, ring: Vec<LonLat>) -> Self {
        Self {
            name: Some(name.into()),
            polygons: vec![ring],
        }
    }

    pub fn contains(&self, point: LonLat) -> bool {
        first_containing_polygon(point, &self.polygons).is_some()
    }
}

/// An ice-covered area with a concentration between 0 and 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceFeature {
    pub value: f64,
    pub polygons: Vec<Vec<LonLat>>,
}

impl IceFeature {
    pub fn new(value: f64, ring: Vec<LonLat>) -> Self {
        Self {
            value: clamp_ice_value(value),
            polygons: vec![ring],
        }
    }

    pub fn contains(&self, point: LonLat) -> bool {
        first_containing_polygon(point, &self.polygons).is_some()
    }
}

/// Missing or non-numeric values count as open water; the rest clamp to 0..=100.
pub fn clamp_ice_value(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_ICE_VALUE)
    } else {
        0.0
    }
}

fn polygonal_rings(feature: &Feature) -> Option<Vec<Vec<LonLat>>> {
    let rings = feature.geometry.as_ref().map(Geometry::outer_rings)?;
    if rings.is_empty() {
        None
    } else {
        Some(rings)
    }
}

/// Convert a GeoJSON collection into land features, keeping feature order.
///
/// Features without polygonal geometry are skipped.
pub fn land_from_collection(collection: &FeatureCollection) -> Vec<LandFeature> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let polygons = polygonal_rings(feature)?;
            Some(LandFeature {
                name: feature.property_str("name").map(str::to_string),
                polygons,
            })
        })
        .collect()
}

/// Convert a GeoJSON collection into ice features using `properties.value`.
pub fn ice_from_collection(collection: &FeatureCollection) -> Vec<IceFeature> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let polygons = polygonal_rings(feature)?;
            let value = feature.property_f64("value").unwrap_or(0.0);
            Some(IceFeature {
                value: clamp_ice_value(value),
                polygons,
            })
        })
        .collect()
}
