//! Memoized cost grid and the route service built on it.

use crate::sources::{FeatureSource, SourceLoader, SourceOrigin};
use chrono::{DateTime, Utc};
use lakeroute_core::routing::{route_outcome, RouteOutcome};
use lakeroute_core::{CostGrid, CostGridStats, GridConfig, RouteError, RouteRequest, RouteResponse};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridState {
    Uninitialized,
    Building,
    Ready,
}

/// A built grid together with where its inputs came from.
#[derive(Debug)]
pub struct GridSnapshot {
    pub grid: CostGrid,
    pub stats: CostGridStats,
    pub land_origin: SourceOrigin,
    pub ice_origin: SourceOrigin,
    pub built_at: DateTime<Utc>,
    pub build_ms: u64,
}

/// Clears the building flag however the build future ends, including when
/// the caller drops it mid-build.
struct BuildingGuard<'a>(&'a AtomicBool);

impl<'a> BuildingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BuildingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Builds the cost grid once and hands out the shared result.
///
/// Concurrent first callers wait on the same build. A failed build is not
/// stored, so the next caller retries.
pub struct GridCache {
    config: GridConfig,
    land_source: FeatureSource,
    ice_source: FeatureSource,
    loader: SourceLoader,
    cell: OnceCell<Arc<GridSnapshot>>,
    building: AtomicBool,
    builds: AtomicUsize,
}

impl GridCache {
    pub fn new(
        config: GridConfig,
        land_source: FeatureSource,
        ice_source: FeatureSource,
        loader: SourceLoader,
    ) -> Self {
        Self {
            config,
            land_source,
            ice_source,
            loader,
            cell: OnceCell::new(),
            building: AtomicBool::new(false),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn state(&self) -> GridState {
        if self.cell.initialized() {
            GridState::Ready
        } else if self.building.load(Ordering::SeqCst) {
            GridState::Building
        } else {
            GridState::Uninitialized
        }
    }

    /// The snapshot if already built; never triggers a build.
    pub fn get(&self) -> Option<Arc<GridSnapshot>> {
        self.cell.get().cloned()
    }

    /// Number of build attempts so far.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub async fn get_or_build(&self) -> Result<Arc<GridSnapshot>, RouteError> {
        self.cell.get_or_try_init(|| self.build()).await.cloned()
    }

    async fn build(&self) -> Result<Arc<GridSnapshot>, RouteError> {
        let _building = BuildingGuard::start(&self.building);
        self.builds.fetch_add(1, Ordering::SeqCst);
        self.build_snapshot().await
    }

    async fn build_snapshot(&self) -> Result<Arc<GridSnapshot>, RouteError> {
        self.config.validate()?;

        let started = Instant::now();
        tracing::info!("Building {} cost grid", self.config.resolution_label());

        let (land, land_origin) = self.loader.load_land(&self.land_source).await;
        let (ice, ice_origin) = self.loader.load_ice(&self.ice_source).await;
        let grid = CostGrid::build(&self.config, &land, &ice)?;
        let stats = grid.stats();
        let build_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            "Cost grid ready in {}ms: {} land cells, {} ice cells (land from {}, ice from {})",
            build_ms,
            stats.land_cells,
            stats.ice_cells,
            land_origin.loaded_from,
            ice_origin.loaded_from
        );

        Ok(Arc::new(GridSnapshot {
            grid,
            stats,
            land_origin,
            ice_origin,
            built_at: Utc::now(),
            build_ms,
        }))
    }
}

/// Answers route queries. Every query gets a drawable route.
#[derive(Clone)]
pub struct RouteService {
    grid_cache: Arc<GridCache>,
}

impl RouteService {
    pub fn new(grid_cache: Arc<GridCache>) -> Self {
        Self { grid_cache }
    }

    pub fn grid_cache(&self) -> &GridCache {
        &self.grid_cache
    }

    /// Build the grid ahead of the first query.
    pub async fn warm(&self) -> Result<(), RouteError> {
        self.grid_cache.get_or_build().await.map(|_| ())
    }

    pub async fn best_route(&self, request: &RouteRequest) -> RouteResponse {
        self.best_route_outcome(request).await.response
    }

    /// Like [`best_route`](Self::best_route), keeping the error behind a fallback.
    pub async fn best_route_outcome(&self, request: &RouteRequest) -> RouteOutcome {
        let outcome = match self.grid_cache.get_or_build().await {
            Ok(snapshot) => route_outcome(Ok(&snapshot.grid), request),
            Err(err) => route_outcome(Err(err), request),
        };

        match &outcome.error {
            None => tracing::debug!("Route planned: {}", outcome.response.notes),
            Some(err) if err.is_routing_outcome() => tracing::warn!(
                "Route ({:.4}, {:.4}) -> ({:.4}, {:.4}) fell back: {}",
                request.start_lon,
                request.start_lat,
                request.dest_lon,
                request.dest_lat,
                outcome.response.notes
            ),
            Some(err) => tracing::error!("Cost grid unavailable, serving straight line: {}", err),
        }
        outcome
    }
}
