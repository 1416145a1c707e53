//! Cost of sailing one grid leg.
//!
//! [`leg_cost`] is the only place a leg's time is computed.  The graph
//! builder stores its output on every edge and the route-metrics
//! reconstructor calls it again per leg, so both always agree.

use wr_core::{GeoPoint, WindVector, relative_wind_angle};
use wr_polar::PolarModel;

/// Geometry and timing of a single directed leg.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Great-circle length, nautical miles.
    pub distance_nm: f64,
    /// Planar heading `atan2(Δlon, Δlat)`, degrees in [0, 360).
    pub heading_deg: f64,
    /// Angle between heading and wind-from direction, [0, 180].
    pub relative_angle_deg: f64,
    /// Polar boat speed for this leg, knots.
    pub boat_speed_kn: f64,
    /// `distance_nm / boat_speed_kn`, or `+∞` when the boat makes no way.
    pub hours: f64,
}

impl Leg {
    /// `true` if the leg cannot be sailed (zero boat speed).
    #[inline]
    pub fn is_blocked(&self) -> bool {
        !self.hours.is_finite()
    }
}

/// Relative wind angle and polar boat speed when sailing `heading_deg`
/// through `wind`.
#[inline]
pub fn point_of_sail<P: PolarModel + ?Sized>(
    wind: WindVector,
    heading_deg: f64,
    polar: &P,
) -> (f64, f64) {
    let rel = relative_wind_angle(wind, heading_deg);
    (rel, polar.boat_speed(rel, wind.speed_knots()))
}

/// Cost of sailing from `from` to `to` with the wind found at `from`.
pub fn leg_cost<P: PolarModel + ?Sized>(
    from: GeoPoint,
    to: GeoPoint,
    wind: WindVector,
    polar: &P,
) -> Leg {
    let distance_nm = from.distance_nm(to);
    let heading_deg = from.planar_heading_deg(to);
    let (relative_angle_deg, boat_speed_kn) = point_of_sail(wind, heading_deg, polar);
    let hours = if boat_speed_kn > 0.0 { distance_nm / boat_speed_kn } else { f64::INFINITY };
    Leg { distance_nm, heading_deg, relative_angle_deg, boat_speed_kn, hours }
}
