//! Shared application state.

use crate::cache::RouteCache;
use crate::config::Config;
use crate::route_service::{GridCache, RouteService};
use crate::sources::{FeatureSource, SourceLoader};
use std::sync::Arc;

pub struct AppState {
    config: Config,
    route_service: RouteService,
    route_cache: RouteCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let grid_cache = Arc::new(GridCache::new(
            config.grid_config(),
            FeatureSource::parse(&config.land_source),
            FeatureSource::parse(&config.ice_source),
            SourceLoader::new(config.source_timeout()),
        ));
        Self::with_grid_cache(config, grid_cache)
    }

    pub fn with_grid_cache(config: Config, grid_cache: Arc<GridCache>) -> Self {
        let route_cache = RouteCache::new(config.route_cache_max_entries, config.route_cache_ttl());
        Self {
            route_service: RouteService::new(grid_cache),
            route_cache,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn route_service(&self) -> &RouteService {
        &self.route_service
    }

    pub fn grid_cache(&self) -> &GridCache {
        self.route_service.grid_cache()
    }

    pub fn route_cache(&self) -> &RouteCache {
        &self.route_cache
    }
}
