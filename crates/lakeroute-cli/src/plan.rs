//! Endpoint resolution and local planning.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use lakeroute_core::{
    best_route_with, builtin_ice, builtin_land, find_port, CostGrid, GridConfig, RouteMetrics,
    RouteRequest, RouteResponse, PORTS,
};
use serde::{Deserialize, Serialize};

/// A route plus the figures printed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedRoute {
    #[serde(flatten)]
    pub response: RouteResponse,
    pub metrics: RouteMetrics,
    #[serde(default)]
    pub computed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cached: bool,
}

/// Resolve an endpoint from a port name or an explicit lon/lat pair.
pub fn resolve_endpoint(
    label: &str,
    port: Option<&str>,
    lon: Option<f64>,
    lat: Option<f64>,
) -> Result<[f64; 2]> {
    match (port, lon, lat) {
        (Some(name), None, None) => match find_port(name) {
            Some(port) => Ok(port.lon_lat()),
            None => {
                let known: Vec<&str> = PORTS.iter().map(|port| port.name).collect();
                bail!("unknown {label} port '{name}' (known: {})", known.join(", "))
            }
        },
        (None, Some(lon), Some(lat)) => {
            if !lon.is_finite() || !lat.is_finite() {
                bail!("{label} coordinates must be finite");
            }
            Ok([lon, lat])
        }
        (Some(_), _, _) => bail!("give either a {label} port or {label} coordinates, not both"),
        _ => bail!("{label} needs a port name or both longitude and latitude"),
    }
}

/// Plan against the built-in land and ice data without a server.
pub fn plan_locally(request: &RouteRequest) -> PlannedRoute {
    let grid = CostGrid::build(&GridConfig::default(), &builtin_land(), &builtin_ice());
    let response = best_route_with(grid.as_ref().map_err(|err| err.clone()), request);
    let metrics = RouteMetrics::for_route(&response.route, &request.vessel);
    PlannedRoute {
        response,
        metrics,
        computed_at: Some(Utc::now()),
        cached: false,
    }
}
