//! Routing error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of the requested route an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("Start"),
            Endpoint::End => f.write_str("End"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Grid dimensions or bounding region are unusable.
    #[error("Invalid grid configuration: {0}.")]
    Configuration(String),

    #[error("{0} point is on land.")]
    EndpointOnLand(Endpoint),

    #[error("No A* path found.")]
    NoPathFound,

    /// A land or ice feature source could not be loaded.
    #[error("Feature source unavailable: {0}.")]
    DataSource(String),
}

impl RouteError {
    /// Whether this is an answer about the request itself on a built grid.
    ///
    /// Such errors repeat for the same request. Grid-level failures return
    /// false: they still get a fallback line, but a later attempt may succeed.
    pub fn is_routing_outcome(&self) -> bool {
        matches!(self, RouteError::EndpointOnLand(_) | RouteError::NoPathFound)
    }
}
