//! Whole-route aggregates.

use crate::RouteMetricsRecord;

/// Totals over the legs of one route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub legs:              usize,
    pub total_distance_nm: f64,
    pub total_hours:       f64,
    /// Distance over time; 0 for a zero-length route.
    pub average_speed_kn:  f64,
    /// Slowest and fastest polar speed over the legs.  `None` without legs.
    pub min_boat_speed_kn: Option<f64>,
    pub max_boat_speed_kn: Option<f64>,
}

impl RouteSummary {
    /// Aggregate records produced by [`reconstruct`](crate::reconstruct).
    /// The final record carries no leg and is skipped.
    pub fn from_records(records: &[RouteMetricsRecord]) -> Self {
        let legs = &records[..records.len().saturating_sub(1)];

        let total_distance_nm: f64 = legs.iter().map(|r| r.leg_distance_nm).sum();
        let total_hours = records.last().map_or(0.0, |r| r.elapsed_hours);
        let average_speed_kn =
            if total_hours > 0.0 { total_distance_nm / total_hours } else { 0.0 };

        let speeds = legs.iter().map(|r| r.boat_speed_kn);
        Self {
            legs: legs.len(),
            total_distance_nm,
            total_hours,
            average_speed_kn,
            min_boat_speed_kn: speeds.clone().min_by(f64::total_cmp),
            max_boat_speed_kn: speeds.max_by(f64::total_cmp),
        }
    }
}
