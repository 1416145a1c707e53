//! Per-node metrics along a computed route.

use log::debug;

use wr_core::{GeoPoint, NodeId, WindVector};
use wr_polar::PolarModel;
use wr_spatial::{Grid, Path, SpatialError, SpatialResult, WindField, leg_cost, point_of_sail};

/// Conditions at one node of a route and the leg that leaves it.
///
/// The final node has no outgoing leg: its heading is the `0.0` sentinel,
/// relative angle and boat speed are what the boat would see heading north,
/// and leg distance and hours are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetricsRecord {
    pub node:                    NodeId,
    pub position:                GeoPoint,
    pub wind:                    WindVector,
    pub wind_speed_ms:           f64,
    pub wind_speed_kn:           f64,
    pub wind_direction_deg:      f64,
    pub heading_to_next_deg:     f64,
    pub relative_wind_angle_deg: f64,
    pub boat_speed_kn:           f64,
    pub leg_distance_nm:         f64,
    pub leg_hours:               f64,
    /// Hours from departure until arrival at this node.
    pub elapsed_hours:           f64,
}

impl RouteMetricsRecord {
    /// `true` for the last node of a route.
    pub fn is_final(&self) -> bool {
        self.leg_distance_nm == 0.0 && self.leg_hours == 0.0
    }
}

/// Recompute the metrics of every node on `path`.
///
/// Each outgoing leg goes through [`leg_cost`] with the wind at its start
/// node, so the values equal the routing graph's edge values for the same
/// snapshot and polar.
pub fn reconstruct<P: PolarModel + ?Sized>(
    path: &Path,
    grid: &Grid,
    wind: &WindField,
    polar: &P,
) -> SpatialResult<Vec<RouteMetricsRecord>> {
    wind.check_shape(grid)?;
    if let Some(&bad) = path.nodes.iter().find(|&&n| !grid.contains(n)) {
        return Err(SpatialError::NodeNotFound(bad));
    }

    let mut records = Vec::with_capacity(path.nodes.len());
    let mut elapsed = 0.0;

    for (i, &node) in path.nodes.iter().enumerate() {
        let position = grid.point(node);
        let w = wind.at(node);

        let (heading, rel, speed, dist, hours) = match path.nodes.get(i + 1) {
            Some(&next) => {
                let leg = leg_cost(position, grid.point(next), w, polar);
                (leg.heading_deg, leg.relative_angle_deg, leg.boat_speed_kn, leg.distance_nm, leg.hours)
            }
            None => {
                let (rel, speed) = point_of_sail(w, 0.0, polar);
                (0.0, rel, speed, 0.0, 0.0)
            }
        };

        records.push(RouteMetricsRecord {
            node,
            position,
            wind: w,
            wind_speed_ms: w.speed(),
            wind_speed_kn: w.speed_knots(),
            wind_direction_deg: w.direction_from(),
            heading_to_next_deg: heading,
            relative_wind_angle_deg: rel,
            boat_speed_kn: speed,
            leg_distance_nm: dist,
            leg_hours: hours,
            elapsed_hours: elapsed,
        });
        elapsed += hours;
    }

    debug!("reconstructed {} route records, {elapsed:.3} h", records.len());
    Ok(records)
}
