//! Route assembly and the straight-line fallback contract.

use crate::cost_grid::CostGrid;
use crate::error::{Endpoint, RouteError};
use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::grid::GridConfig;
use crate::models::{RouteRequest, RouteResponse};
use crate::route_engine::search;
use crate::spatial::LonLat;

pub const ROLE_ROUTE: &str = "route";
pub const ROLE_START: &str = "start";
pub const ROLE_DEST: &str = "dest";
pub const FALLBACK_NOTE: &str = "Showing straight line as fallback.";

/// Plan a water route across `grid`.
///
/// The line follows cell lon/lats; the start and dest points keep the
/// requested coordinates.
pub fn plan_route(grid: &CostGrid, request: &RouteRequest) -> Result<FeatureCollection, RouteError> {
    let config = grid.config();
    let start = config.to_grid(request.start_lon, request.start_lat);
    let goal = config.to_grid(request.dest_lon, request.dest_lat);

    if grid.is_impassable(start) {
        return Err(RouteError::EndpointOnLand(Endpoint::Start));
    }
    if grid.is_impassable(goal) {
        return Err(RouteError::EndpointOnLand(Endpoint::End));
    }

    let path = search(grid, start, goal).ok_or(RouteError::NoPathFound)?;
    let mut line: Vec<LonLat> = path.cells().map(|cell| config.cell_lon_lat(cell)).collect();
    // Same start and goal cell.
    if line.len() == 1 {
        line.push(line[0]);
    }

    Ok(route_collection(line, request))
}

/// Two-point line between the requested endpoints.
pub fn straight_line_route(request: &RouteRequest) -> FeatureCollection {
    route_collection(vec![request.start(), request.dest()], request)
}

fn route_collection(line: Vec<LonLat>, request: &RouteRequest) -> FeatureCollection {
    FeatureCollection::new(vec![
        Feature::new(Geometry::LineString { coordinates: line }).with_property("role", ROLE_ROUTE),
        Feature::new(Geometry::Point {
            coordinates: request.start(),
        })
        .with_property("role", ROLE_START),
        Feature::new(Geometry::Point {
            coordinates: request.dest(),
        })
        .with_property("role", ROLE_DEST),
    ])
}

pub fn success_notes(config: &GridConfig) -> String {
    format!("A* route (grid: {}).", config.resolution_label())
}

pub fn fallback_notes(error: &RouteError) -> String {
    format!("{error} {FALLBACK_NOTE}")
}

/// A route response plus the error that forced a fallback, if any.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub response: RouteResponse,
    pub error: Option<RouteError>,
}

impl RouteOutcome {
    /// Successes and routing outcomes on a built grid repeat for the same
    /// request; a fallback caused by a grid failure does not.
    pub fn is_cacheable(&self) -> bool {
        self.error.as_ref().map_or(true, RouteError::is_routing_outcome)
    }
}

/// Resolve a request against an already obtained grid, or the error that
/// prevented obtaining it. Failures become the straight-line fallback.
pub fn route_outcome(grid: Result<&CostGrid, RouteError>, request: &RouteRequest) -> RouteOutcome {
    let planned = grid.and_then(|grid| {
        plan_route(grid, request).map(|route| (route, success_notes(grid.config())))
    });

    match planned {
        Ok((route, notes)) => RouteOutcome {
            response: RouteResponse { route, notes },
            error: None,
        },
        Err(error) => RouteOutcome {
            response: RouteResponse {
                route: straight_line_route(request),
                notes: fallback_notes(&error),
            },
            error: Some(error),
        },
    }
}

pub fn best_route_with(grid: Result<&CostGrid, RouteError>, request: &RouteRequest) -> RouteResponse {
    route_outcome(grid, request).response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_grid::IMPASSABLE;
    use crate::data::{builtin_ice, builtin_land};
    use crate::ports::find_port;

    fn builtin_grid() -> CostGrid {
        CostGrid::build(&GridConfig::default(), &builtin_land(), &builtin_ice()).unwrap()
    }

    fn port_request(from: &str, to: &str) -> RouteRequest {
        let from = find_port(from).unwrap();
        let to = find_port(to).unwrap();
        RouteRequest::new(from.lon_lat(), to.lon_lat())
    }

    fn route_line(collection: &FeatureCollection) -> &[LonLat] {
        collection.line_strings().next().unwrap()
    }

    #[test]
    fn milwaukee_to_chicago_follows_water() {
        let grid = builtin_grid();
        let request = port_request("Milwaukee", "Chicago");
        let response = best_route_with(Ok(&grid), &request);

        assert_eq!(response.notes, "A* route (grid: 120x90).");
        let line = route_line(&response.route);
        assert!(line.len() > 2);
        for point in line {
            let cell = grid.config().to_grid(point[0], point[1]);
            assert!(!grid.is_impassable(cell));
        }
    }

    #[test]
    fn endpoints_keep_requested_coordinates() {
        let grid = builtin_grid();
        let request = port_request("Toledo", "Cleveland");
        let route = plan_route(&grid, &request).unwrap();

        let start = route.with_role(ROLE_START).next().unwrap();
        let dest = route.with_role(ROLE_DEST).next().unwrap();
        assert_eq!(start.geometry, Some(Geometry::Point { coordinates: request.start() }));
        assert_eq!(dest.geometry, Some(Geometry::Point { coordinates: request.dest() }));
        assert_eq!(route.with_role(ROLE_ROUTE).count(), 1);
    }

    #[test]
    fn detroit_start_falls_back() {
        let grid = builtin_grid();
        let request = port_request("Detroit", "Chicago");
        let response = best_route_with(Ok(&grid), &request);

        assert_eq!(
            response.notes,
            "Start point is on land. Showing straight line as fallback."
        );
        assert_eq!(route_line(&response.route), &[request.start(), request.dest()]);
    }

    #[test]
    fn inland_destination_falls_back() {
        let grid = builtin_grid();
        let request = RouteRequest::new([-87.9065, 43.0389], [-88.2, 44.0]);
        assert_eq!(
            plan_route(&grid, &request),
            Err(RouteError::EndpointOnLand(Endpoint::End))
        );
        let response = best_route_with(Ok(&grid), &request);
        assert!(response.notes.starts_with("End point is on land."));
    }

    #[test]
    fn unreachable_goal_reports_no_path() {
        let x = IMPASSABLE;
        let mut config = GridConfig::with_dimensions(3, 3);
        config.bounds.min_lon = 0.0;
        config.bounds.max_lon = 3.0;
        config.bounds.min_lat = 0.0;
        config.bounds.max_lat = 3.0;
        let grid =
            CostGrid::from_costs(config, vec![1.0, x, 1.0, 1.0, x, 1.0, 1.0, x, 1.0]).unwrap();
        // col 0 and col 2 are split by the middle column.
        let request = RouteRequest::new([0.0, 2.0], [2.0, 2.0]);

        let response = best_route_with(Ok(&grid), &request);
        assert_eq!(response.notes, "No A* path found. Showing straight line as fallback.");
        assert_eq!(route_line(&response.route).len(), 2);
    }

    #[test]
    fn grid_failure_still_returns_a_route() {
        let request = port_request("Milwaukee", "Chicago");
        let error = RouteError::Configuration("grid dimensions must be non-zero, got 0x0".into());
        let response = best_route_with(Err(error), &request);

        assert!(response.notes.ends_with("Showing straight line as fallback."));
        assert_eq!(response.route.features.len(), 3);
    }

    #[test]
    fn only_grid_failures_are_uncacheable() {
        let grid = builtin_grid();

        let planned = route_outcome(Ok(&grid), &port_request("Milwaukee", "Chicago"));
        assert!(planned.error.is_none());
        assert!(planned.is_cacheable());

        let on_land = route_outcome(Ok(&grid), &port_request("Detroit", "Chicago"));
        assert_eq!(on_land.error, Some(RouteError::EndpointOnLand(Endpoint::Start)));
        assert!(on_land.is_cacheable());

        let error = RouteError::Configuration("grid dimensions must be non-zero, got 0x90".into());
        let unbuilt = route_outcome(Err(error), &port_request("Milwaukee", "Chicago"));
        assert!(unbuilt.response.is_fallback());
        assert!(!unbuilt.is_cacheable());
    }

    #[test]
    fn same_cell_request_draws_a_degenerate_line() {
        let grid = builtin_grid();
        let chicago = find_port("Chicago").unwrap().lon_lat();
        let route = plan_route(&grid, &RouteRequest::new(chicago, chicago)).unwrap();
        let line = route_line(&route);
        assert_eq!(line.len(), 2);
        assert_eq!(line[0], line[1]);
    }
}
