//! Server configuration from environment.

use lakeroute_core::GridConfig;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// `builtin`, a file path or an `http(s)://` URL.
    pub ice_source: String,
    pub land_source: String,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Build the cost grid at startup instead of on the first request.
    pub prebuild_grid: bool,
    pub route_cache_max_entries: usize,
    pub route_cache_ttl_s: u64,
    pub source_timeout_s: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            ice_source: "sample_data/ice_concentration.latest.geojson".to_string(),
            land_source: "builtin".to_string(),
            grid_width: lakeroute_core::grid::DEFAULT_GRID_WIDTH,
            grid_height: lakeroute_core::grid::DEFAULT_GRID_HEIGHT,
            prebuild_grid: false,
            route_cache_max_entries: 256,
            route_cache_ttl_s: 600,
            source_timeout_s: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("LAKEROUTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            ice_source: env::var("LAKEROUTE_ICE_SOURCE").unwrap_or(defaults.ice_source),
            land_source: env::var("LAKEROUTE_LAND_SOURCE").unwrap_or(defaults.land_source),
            grid_width: env::var("LAKEROUTE_GRID_WIDTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.grid_width),
            grid_height: env::var("LAKEROUTE_GRID_HEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.grid_height),
            prebuild_grid: env::var("LAKEROUTE_PREBUILD_GRID")
                .ok()
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.prebuild_grid),
            route_cache_max_entries: env::var("LAKEROUTE_ROUTE_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.route_cache_max_entries),
            route_cache_ttl_s: env::var("LAKEROUTE_ROUTE_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.route_cache_ttl_s),
            source_timeout_s: env::var("LAKEROUTE_SOURCE_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.source_timeout_s),
        }
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig::with_dimensions(self.grid_width, self.grid_height)
    }

    pub fn route_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.route_cache_ttl_s)
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_s.max(1))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
