//! REST API routes.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use lakeroute_core::{CostGridStats, Port, RouteMetrics, RouteRequest, RouteResponse, PORTS};
use serde::Serialize;
use std::sync::Arc;

use crate::api::request_id;
use crate::cache::{CachedRoute, RouteCacheKey};
use crate::route_service::GridState;
use crate::sources::SourceOrigin;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/routes/best", post(best_route))
        .route("/v1/grid", get(grid_status))
        .route("/v1/ports", get(list_ports))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

// === Request/Response types ===

#[derive(Debug, Serialize)]
pub struct BestRouteResponse {
    #[serde(flatten)]
    pub response: RouteResponse,
    pub metrics: RouteMetrics,
    pub computed_at: DateTime<Utc>,
    /// Served from the route cache.
    pub cached: bool,
}

impl BestRouteResponse {
    fn from_entry(entry: CachedRoute, cached: bool) -> Self {
        Self {
            response: entry.response,
            metrics: entry.metrics,
            computed_at: entry.computed_at,
            cached,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GridStatusResponse {
    pub state: GridState,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CostGridStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_source: Option<SourceOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_source: Option<SourceOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_ms: Option<u64>,
}

// === Handlers ===

/// Best route between two points. Falls back to a straight line instead of
/// failing, so a well-formed request always gets 200.
async fn best_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> impl IntoResponse {
    let key = RouteCacheKey::from_request(&request);
    if let Some(hit) = state.route_cache().get(&key) {
        tracing::debug!("Route cache hit for {}", key.as_str());
        return (StatusCode::OK, Json(BestRouteResponse::from_entry(hit, true)));
    }

    let outcome = state.route_service().best_route_outcome(&request).await;
    let cacheable = outcome.is_cacheable();
    let metrics = RouteMetrics::for_route(&outcome.response.route, &request.vessel);
    let entry = CachedRoute::new(outcome.response, metrics);
    // A grid that failed to build is retried on the next request.
    if cacheable {
        state.route_cache().insert(key, entry.clone());
    }

    (StatusCode::OK, Json(BestRouteResponse::from_entry(entry, false)))
}

async fn grid_status(State(state): State<Arc<AppState>>) -> Json<GridStatusResponse> {
    let grid_cache = state.grid_cache();
    let snapshot = grid_cache.get();

    Json(GridStatusResponse {
        state: grid_cache.state(),
        resolution: grid_cache.config().resolution_label(),
        stats: snapshot.as_ref().map(|s| s.stats),
        land_source: snapshot.as_ref().map(|s| s.land_origin.clone()),
        ice_source: snapshot.as_ref().map(|s| s.ice_origin.clone()),
        built_at: snapshot.as_ref().map(|s| s.built_at),
        build_ms: snapshot.as_ref().map(|s| s.build_ms),
    })
}

async fn list_ports() -> Json<Vec<Port>> {
    Json(PORTS.to_vec())
}
