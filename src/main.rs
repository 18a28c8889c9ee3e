//! Place-name suffix lookup server.
//!
//! Loads a CSV of named geographic points once at startup, then serves:
//!   GET /api/places?ending=X  - coordinates of places whose name ends with X
//!   GET /api/stats            - dataset load status
//!   GET /health               - health check
//!   GET /                     - heatmap landing page

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use suffix_map::api::{self, PlaceService};
use suffix_map::loader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "suffix_map")]
#[command(about = "HTTP lookup of place coordinates by name suffix")]
struct Args {
    /// Path to the places CSV (name,latitude,longitude columns)
    #[arg(long, default_value = "data/places.csv")]
    csv: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Directory holding the landing page and its assets
    #[arg(long, default_value = "ui")]
    ui: PathBuf,
}

fn print_banner(addr: &SocketAddr) {
    println!("============================================================");
    println!("              PLACE SUFFIX LOOKUP SERVER");
    println!("============================================================");
    println!();
    println!("  Listening: http://{}", addr);
    println!();
    println!("Endpoints:");
    println!("  GET /                     Heatmap landing page");
    println!("  GET /api/places?ending=X  Coordinates of matching places");
    println!("  GET /api/stats            Dataset load status");
    println!("  GET /health               Health check");
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    // Load once, before binding. A bad dataset is not fatal: the service
    // starts anyway and answers queries with a data-unavailable error.
    let (outcome, summary) = loader::load_places(&args.csv);
    let service = Arc::new(PlaceService::new(outcome, summary));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    print_banner(&addr);

    let app = api::router(service, &args.ui);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
