use std::fs;
use std::path::PathBuf;

use canvas::{MemorySurface, SvgDocument};
use clap::Parser;
use foundation::math::Vec2;
use foundation::{ChartLayout, MapLayout};
use scene::Session;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viewer::{load, Coordinator};

#[derive(Parser, Debug)]
#[command(name = "routeatlas", version, about = "Airline route atlas renderer")]
struct Args {
    /// Route table CSV
    #[arg(long, default_value = "routes.csv")]
    routes: PathBuf,

    /// Country boundaries GeoJSON (FeatureCollection of polygons)
    #[arg(long, default_value = "countries.geo.json")]
    boundaries: PathBuf,

    /// Output SVG file
    #[arg(long, default_value = "routeatlas.svg")]
    out: PathBuf,

    /// Airline selected at startup
    #[arg(long, default_value = "24")]
    airline: String,
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let data = load(&args.routes, &args.boundaries)?;
    for skip in &data.routes.skipped {
        warn!("{skip}");
    }

    // Chart on the left, map to its right, on one shared canvas.
    let chart = ChartLayout::default();
    let map = MapLayout::at(Vec2::new(chart.width, 0.0));
    let session = Session::new(data.routes.routes, data.boundaries, &map);

    let mut surface = MemorySurface::new();
    let mut coordinator = Coordinator::new(session, chart, Some(&args.airline));
    coordinator.init(&mut surface);

    let document = SvgDocument::new(chart.width + map.width, chart.height.max(map.height));
    fs::write(&args.out, document.render(surface.elements()))?;
    info!("wrote {}", args.out.display());

    Ok(())
}
