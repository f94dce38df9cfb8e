//! End-to-end routing tests over the built-in Great Lakes data.
//!
//! The live test needs a running server:
//! cargo test --test route_test -- --ignored

use lakeroute_core::{find_port, GridConfig, RouteRequest, RouteResponse};
use lakeroute_server::route_service::{GridCache, RouteService};
use lakeroute_server::sources::{FeatureSource, SourceLoader};
use std::sync::Arc;
use std::time::Duration;

fn service() -> RouteService {
    RouteService::new(Arc::new(GridCache::new(
        GridConfig::default(),
        FeatureSource::BuiltIn,
        FeatureSource::BuiltIn,
        SourceLoader::new(Duration::from_secs(1)),
    )))
}

fn port_request(from: &str, to: &str) -> RouteRequest {
    RouteRequest::new(
        find_port(from).expect("port").lon_lat(),
        find_port(to).expect("port").lon_lat(),
    )
}

async fn assert_water_route(service: &RouteService, from: &str, to: &str) -> RouteResponse {
    let response = service.best_route(&port_request(from, to)).await;
    assert_eq!(response.notes, "A* route (grid: 120x90).", "{from} -> {to}");

    let snapshot = service.grid_cache().get().expect("grid built");
    let config = snapshot.grid.config();
    let line = response.route.line_strings().next().expect("route line");
    assert!(line.len() > 2, "{from} -> {to} should bend around land");
    for point in line {
        let cell = config.to_grid(point[0], point[1]);
        assert!(!snapshot.grid.is_impassable(cell), "{from} -> {to} crosses land at {point:?}");
    }
    response
}

#[tokio::test]
async fn water_ports_route_around_land() {
    let service = service();
    assert_water_route(&service, "Milwaukee", "Chicago").await;
    assert_water_route(&service, "Sault Ste. Marie", "Chicago").await;
    assert_water_route(&service, "Toledo", "Cleveland").await;
    assert_water_route(&service, "Thunder Bay", "Sault Ste. Marie").await;
    assert_eq!(service.grid_cache().build_count(), 1);
}

/// Detroit's preset coordinates fall inside the Lower Peninsula land mask.
#[tokio::test]
async fn detroit_preset_starts_on_land() {
    let response = service().best_route(&port_request("Detroit", "Chicago")).await;
    assert!(response.is_fallback());
    assert!(response.notes.contains("land"));
    assert_eq!(response.route.line_strings().next().map(<[_]>::len), Some(2));
}

#[tokio::test]
async fn door_peninsula_start_is_blocked() {
    let request = RouteRequest::new([-88.2, 44.0], find_port("Chicago").unwrap().lon_lat());
    let response = service().best_route(&request).await;
    assert_eq!(
        response.notes,
        "Start point is on land. Showing straight line as fallback."
    );
    let line = response.route.line_strings().next().unwrap();
    assert_eq!(line, &[request.start(), request.dest()]);
}

#[tokio::test]
async fn inland_destination_is_blocked() {
    let response = service().best_route(&port_request("Chicago", "Duluth")).await;
    assert_eq!(
        response.notes,
        "End point is on land. Showing straight line as fallback."
    );
}

fn base_url() -> String {
    std::env::var("LAKEROUTE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore]
async fn live_server_plans_route() {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/v1/routes/best", base_url()))
        .json(&port_request("Milwaukee", "Chicago"))
        .send()
        .await
        .expect("Failed to reach server");

    assert!(resp.status().is_success());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["notes"].as_str().unwrap().starts_with("A* route"));
    assert!(body["metrics"]["distance_km"].as_f64().unwrap() > 0.0);
}
