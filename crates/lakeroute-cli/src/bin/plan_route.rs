//! Plan an ice-aware route between two Great Lakes points.
//!
//! Usage:
//!   cargo run -p lakeroute-cli --bin plan_route -- --from Milwaukee --to Chicago
//!   cargo run -p lakeroute-cli --bin plan_route -- --from Toledo --to Cleveland --url http://localhost:3000

use anyhow::{Context, Result};
use clap::Parser;
use lakeroute_cli::{plan_locally, resolve_endpoint, RouteClient};
use lakeroute_core::{IceClass, RouteRequest, Vessel, PORTS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan an ice-aware Great Lakes route")]
struct Args {
    /// Start port name (e.g. "Milwaukee" or "Milwaukee, WI")
    #[arg(long)]
    from: Option<String>,

    /// Destination port name
    #[arg(long)]
    to: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    start_lon: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    start_lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    dest_lon: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    dest_lat: Option<f64>,

    /// Vessel draft in meters
    #[arg(long, default_value_t = 7.0)]
    draft_m: f64,

    /// none, light, medium or heavy
    #[arg(long, default_value_t = IceClass::Light)]
    ice_class: IceClass,

    /// Cruise speed used for the ETA
    #[arg(long, default_value_t = 12.0)]
    speed_knots: f64,

    /// Route server URL; plans locally from built-in data when omitted
    #[arg(long)]
    url: Option<String>,

    /// Write the route GeoJSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the port presets and exit
    #[arg(long)]
    list_ports: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_ports {
        for port in PORTS.iter() {
            println!("{:<22} {:>10.4} {:>9.4}", port.name, port.lon, port.lat);
        }
        return Ok(());
    }

    let start = resolve_endpoint("start", args.from.as_deref(), args.start_lon, args.start_lat)?;
    let dest = resolve_endpoint("dest", args.to.as_deref(), args.dest_lon, args.dest_lat)?;
    let request = RouteRequest::new(start, dest).with_vessel(Vessel {
        draft_m: args.draft_m,
        ice_class: args.ice_class,
        speed_knots: args.speed_knots,
    });

    let planned = match &args.url {
        Some(url) => {
            println!("Requesting route from {}...", url);
            RouteClient::new(url.as_str())?.best_route(&request)?
        }
        None => plan_locally(&request),
    };

    println!("{}", planned.response.notes);
    if planned.cached {
        println!("(served from server cache)");
    }
    if let Some(line) = planned.response.route.line_strings().next() {
        println!("Waypoints: {}", line.len());
    }
    println!("Distance: {:.1} km", planned.metrics.distance_km);
    println!(
        "ETA: {:.1} h at {} kn",
        planned.metrics.eta_hours, request.vessel.speed_knots
    );

    if let Some(path) = &args.output {
        let geojson = serde_json::to_string_pretty(&planned.response.route)?;
        std::fs::write(path, geojson)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Route written to {}", path.display());
    }

    Ok(())
}
