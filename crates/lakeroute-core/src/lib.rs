pub mod cost_grid;
pub mod data;
pub mod error;
pub mod features;
pub mod geojson;
pub mod grid;
pub mod metrics;
pub mod models;
pub mod ports;
pub mod route_engine;
pub mod routing;
pub mod spatial;

pub use cost_grid::{CostGrid, CostGridStats, IMPASSABLE};
pub use data::{builtin_ice, builtin_land};
pub use error::{Endpoint, RouteError};
pub use features::{ice_from_collection, land_from_collection, IceFeature, LandFeature};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use grid::{GridBounds, GridCell, GridConfig};
pub use metrics::{eta_hours, line_distance_km, route_bbox, RouteMetrics};
pub use models::{IceClass, RouteRequest, RouteResponse, Vessel};
pub use ports::{find_port, Port, PORTS};
pub use route_engine::{search, PathNode, SearchPath};
pub use routing::{best_route_with, plan_route, route_outcome, straight_line_route, RouteOutcome};
pub use spatial::{haversine_distance, point_in_ring, LonLat};
