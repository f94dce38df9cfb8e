//! HTTP API for the route service.

pub mod request_id;
mod routes;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    routes::create_router()
}
