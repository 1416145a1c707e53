//! biscay — Brest to the Azores across a synthetic westerly.
//!
//! Usage:
//!
//! ```text
//! biscay [config.json] [polar.csv]
//! ```
//!
//! Without a config the route runs over lat 35–50 × lon −35–0 at 0.5°.
//! Without a polar CSV the default absolute table is used.  Output goes to
//! `output/biscay/`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use wr_core::{Domain, GeoPoint, RoutingConfig, WindVector};
use wr_metrics::RouteMetricsRecord;
use wr_output::{CsvWriter, OutputWriter};
use wr_planner::PlannerBuilder;
use wr_polar::{PolarKind, PolarTable, load_polar_csv};
use wr_spatial::{DijkstraRouter, Grid, WindField};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/biscay";

/// Mean westerly strength, m/s.
const BASE_WIND_MS: f64 = 9.0;

fn default_config() -> RoutingConfig {
    RoutingConfig {
        domain:         Domain::new(35.0, 50.0, -35.0, 0.0),
        resolution_deg: 0.5,
        origin:         GeoPoint::new(48.2, -4.9),  // off Brest
        destination:    GeoPoint::new(38.5, -28.5), // Faial, Azores
    }
}

fn load_config(path: &Path) -> Result<RoutingConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Synthetic wind ────────────────────────────────────────────────────────────

/// A westerly (blowing from ~270°) that strengthens to the north and backs
/// and veers with longitude, so the optimum is not a straight line.
fn westerly(grid: &Grid) -> Result<WindField> {
    let field = WindField::from_fn(grid, |p| {
        let strength = BASE_WIND_MS + 0.4 * (p.lat - 42.0);
        let swing = 3.0 * (p.lon.to_radians() * 6.0).sin();
        WindVector::new(-strength, swing)
    })?;
    Ok(field)
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_legs(records: &[RouteMetricsRecord]) {
    println!(
        "{:>6} {:>8} {:>8} {:>7} {:>7} {:>7} {:>6} {:>7} {:>8}",
        "Node", "Lat", "Lon", "TWD", "Hdg", "TWA", "Boat", "Leg h", "Elapsed"
    );
    println!("{}", "-".repeat(75));
    for r in records {
        println!(
            "{:>6} {:>8.2} {:>8.2} {:>7.0} {:>7.0} {:>7.0} {:>6.1} {:>7.2} {:>8.2}",
            r.node.0,
            r.position.lat,
            r.position.lon,
            r.wind_direction_deg,
            r.heading_to_next_deg,
            r.relative_wind_angle_deg,
            r.boat_speed_kn,
            r.leg_hours,
            r.elapsed_hours,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("=== biscay — windroute sailing router ===");

    let mut args = std::env::args().skip(1);

    // 1. Configuration.
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };
    println!(
        "Domain: {} @ {}°  |  {} → {}",
        config.domain, config.resolution_deg, config.origin, config.destination
    );

    // 2. Boat.
    let polar = match args.next() {
        Some(path) => load_polar_csv(Path::new(&path), PolarKind::Absolute)?,
        None => PolarTable::absolute(),
    };
    info!("{} polar with {} bins", polar.kind(), polar.bins().len());

    // 3. Planner and wind snapshot.
    let planner = PlannerBuilder::new(config, polar, DijkstraRouter).build()?;
    let wind = westerly(planner.grid())?;
    println!("Grid: {} × {} cells", planner.grid().rows(), planner.grid().cols());
    println!();

    // 4. Route.
    let t0 = Instant::now();
    let plan = planner.plan(&wind)?;
    let elapsed = t0.elapsed();

    print_legs(&plan.records);
    println!();
    println!("Planned in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  graph     : {} nodes, {} edges ({} sailable)",
        plan.graph.nodes, plan.graph.edges, plan.graph.sailable_edges
    );
    println!(
        "  route     : {} legs, {:.1} nm, {:.1} h ({:.2} kn average)",
        plan.summary.legs,
        plan.summary.total_distance_nm,
        plan.summary.total_hours,
        plan.summary.average_speed_kn
    );

    // 5. Output.
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_records(&plan.records)?;
    writer.write_summary(&plan.summary)?;
    writer.finish()?;
    println!("  output    : {OUTPUT_DIR}/");

    Ok(())
}
