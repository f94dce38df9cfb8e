//! Lakeroute CLI - plan routes locally or against a running server.

pub mod client;
pub mod plan;

pub use client::RouteClient;
pub use plan::{plan_locally, resolve_endpoint, PlannedRoute};
