//! Request and response models for route planning.

use crate::geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceClass {
    None,
    #[default]
    Light,
    Medium,
    Heavy,
}

impl IceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IceClass::None => "none",
            IceClass::Light => "light",
            IceClass::Medium => "medium",
            IceClass::Heavy => "heavy",
        }
    }
}

impl fmt::Display for IceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(IceClass::None),
            "light" => Ok(IceClass::Light),
            "medium" => Ok(IceClass::Medium),
            "heavy" => Ok(IceClass::Heavy),
            other => Err(format!(
                "unknown ice class '{other}' (expected none, light, medium or heavy)"
            )),
        }
    }
}

/// Vessel parameters supplied with a route request.
///
/// Accepted and echoed for clients; the cost grid does not use them.
/// `speed_knots` feeds the ETA estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    #[serde(default = "default_draft_m")]
    pub draft_m: f64,
    #[serde(default)]
    pub ice_class: IceClass,
    #[serde(default = "default_speed_knots")]
    pub speed_knots: f64,
}

fn default_draft_m() -> f64 {
    7.0
}

fn default_speed_knots() -> f64 {
    12.0
}

impl Default for Vessel {
    fn default() -> Self {
        Self {
            draft_m: default_draft_m(),
            ice_class: IceClass::default(),
            speed_knots: default_speed_knots(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start_lon: f64,
    pub start_lat: f64,
    pub dest_lon: f64,
    pub dest_lat: f64,
    #[serde(default)]
    pub vessel: Vessel,
}

impl RouteRequest {
    pub fn new(start: [f64; 2], dest: [f64; 2]) -> Self {
        Self {
            start_lon: start[0],
            start_lat: start[1],
            dest_lon: dest[0],
            dest_lat: dest[1],
            vessel: Vessel::default(),
        }
    }

    pub fn with_vessel(mut self, vessel: Vessel) -> Self {
        self.vessel = vessel;
        self
    }

    pub fn start(&self) -> [f64; 2] {
        [self.start_lon, self.start_lat]
    }

    pub fn dest(&self) -> [f64; 2] {
        [self.dest_lon, self.dest_lat]
    }
}

/// Result of a route query. Always carries a drawable route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route: FeatureCollection,
    pub notes: String,
}

impl RouteResponse {
    pub fn is_fallback(&self) -> bool {
        self.notes.ends_with(crate::routing::FALLBACK_NOTE)
    }
}
