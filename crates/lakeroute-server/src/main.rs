//! Lakeroute Server - ice-aware Great Lakes route planning over HTTP

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lakeroute_server::api;
use lakeroute_server::config::Config;
use lakeroute_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lakeroute_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting Lakeroute Server...");

    let config = Config::from_env();
    let port = config.server_port;
    let prebuild = config.prebuild_grid;
    let state = Arc::new(AppState::new(config));

    if prebuild {
        let warm_state = state.clone();
        tokio::spawn(async move {
            if let Err(err) = warm_state.route_service().warm().await {
                tracing::error!("Grid prebuild failed: {}", err);
            }
        });
    }

    let app = api::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
