//! The `OutputWriter` trait implemented by backend writers.

use wr_metrics::{RouteMetricsRecord, RouteSummary};

use crate::OutputResult;

/// Sink for the per-node records and the summary of one or more routes.
pub trait OutputWriter {
    /// Append the per-node records of a route.
    fn write_records(&mut self, records: &[RouteMetricsRecord]) -> OutputResult<()>;

    /// Append one route summary row.
    fn write_summary(&mut self, summary: &RouteSummary) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
