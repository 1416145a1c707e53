//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `route_metrics.csv`, one row per route node
//! - `route_summary.csv`, one row per route

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::info;

use wr_metrics::{RouteMetricsRecord, RouteSummary};

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const METRICS_FILE: &str = "route_metrics.csv";
pub const SUMMARY_FILE: &str = "route_summary.csv";

const METRICS_HEADER: [&str; 15] = [
    "node",
    "lat",
    "lon",
    "wind_u",
    "wind_v",
    "wind_speed_ms",
    "wind_speed_kn",
    "wind_direction_deg",
    "heading_to_next_deg",
    "relative_wind_angle_deg",
    "boat_speed_kn",
    "leg_distance_nm",
    "leg_hours",
    "elapsed_hours",
    "is_final",
];

const SUMMARY_HEADER: [&str; 6] = [
    "legs",
    "total_distance_nm",
    "total_hours",
    "average_speed_kn",
    "min_boat_speed_kn",
    "max_boat_speed_kn",
];

/// Writes route output to two CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record(METRICS_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        info!("writing route output to {}", dir.display());
        Ok(Self { metrics, summaries, finished: false })
    }
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, records: &[RouteMetricsRecord]) -> OutputResult<()> {
        for r in records {
            self.metrics.write_record(&[
                r.node.0.to_string(),
                r.position.lat.to_string(),
                r.position.lon.to_string(),
                r.wind.u.to_string(),
                r.wind.v.to_string(),
                r.wind_speed_ms.to_string(),
                r.wind_speed_kn.to_string(),
                r.wind_direction_deg.to_string(),
                r.heading_to_next_deg.to_string(),
                r.relative_wind_angle_deg.to_string(),
                r.boat_speed_kn.to_string(),
                r.leg_distance_nm.to_string(),
                r.leg_hours.to_string(),
                r.elapsed_hours.to_string(),
                (r.is_final() as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RouteSummary) -> OutputResult<()> {
        self.summaries.write_record(&[
            summary.legs.to_string(),
            summary.total_distance_nm.to_string(),
            summary.total_hours.to_string(),
            summary.average_speed_kn.to_string(),
            opt(summary.min_boat_speed_kn),
            opt(summary.max_boat_speed_kn),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
