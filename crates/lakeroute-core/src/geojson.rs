//! Minimal GeoJSON model covering the shapes the router reads and writes.

use crate::spatial::LonLat;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: LonLat },
    LineString { coordinates: Vec<LonLat> },
    Polygon { coordinates: Vec<Vec<LonLat>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<LonLat>>> },
    /// Any other geometry type; carried through parsing and ignored.
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Outer rings of a polygonal geometry; empty for points and lines.
    pub fn outer_rings(&self) -> Vec<Vec<LonLat>> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.first().cloned().into_iter().collect(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first().cloned())
                .collect(),
            Geometry::Point { .. } | Geometry::LineString { .. } | Geometry::Unsupported => {
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionTag {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub kind: FeatureTag,
    #[serde(default, deserialize_with = "properties_or_null")]
    pub properties: Map<String, Value>,
    pub geometry: Option<Geometry>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            kind: FeatureTag::Feature,
            properties: Map::new(),
            geometry: Some(geometry),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(Value::as_f64)
    }
}

fn properties_or_null<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: CollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: CollectionTag::FeatureCollection,
            features,
        }
    }

    /// Features carrying `properties.role == role`.
    pub fn with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Feature> + 'a {
        self.features
            .iter()
            .filter(move |feature| feature.property_str("role") == Some(role))
    }

    /// Coordinates of every `LineString` feature.
    pub fn line_strings(&self) -> impl Iterator<Item = &[LonLat]> {
        self.features
            .iter()
            .filter_map(|feature| match &feature.geometry {
                Some(Geometry::LineString { coordinates }) => Some(coordinates.as_slice()),
                _ => None,
            })
    }
}
