//! Wind vector and relative-wind-angle geometry.
//!
//! # Direction convention
//!
//! The direction the wind comes *from* is `atan2(u, v)` in degrees, wrapped
//! into [0, 360), with 0 = north and 90 = east.  No 180° offset is applied:
//!
//! | (u, v)     | direction_from |
//! |------------|----------------|
//! | (0, +10)   | 0   (north)    |
//! | (+10, 0)   | 90  (east)     |
//! | (0, -10)   | 180 (south)    |
//! | (-10, 0)   | 270 (west)     |
//!
//! The graph builder and the route-metrics reconstructor both go through
//! [`WindVector::direction_from`] and [`relative_wind_angle`], so they cannot
//! disagree on which heading is upwind.

use crate::geo::normalize_deg;

/// Metres per second → knots.
pub const MS_TO_KNOTS: f64 = 1.943_844;

/// Wind components for one cell of a single forecast snapshot, in m/s.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindVector {
    pub u: f64,
    pub v: f64,
}

impl WindVector {
    #[inline]
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Wind speed `√(u² + v²)` in m/s.
    #[inline]
    pub fn speed(self) -> f64 {
        self.u.hypot(self.v)
    }

    /// Wind speed in knots, the unit wind-scaled polars take.
    #[inline]
    pub fn speed_knots(self) -> f64 {
        self.speed() * MS_TO_KNOTS
    }

    /// Direction the wind blows from, degrees in [0, 360).  See the module
    /// docs for the convention.
    #[inline]
    pub fn direction_from(self) -> f64 {
        normalize_deg(self.u.atan2(self.v).to_degrees())
    }

    /// `false` if either component is NaN or infinite (a missing value in
    /// the forecast grid).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}

/// Angle between a heading and the direction the wind comes from, in
/// [0, 180].  0 = wind dead ahead, 180 = wind dead astern.
pub fn relative_wind_angle(wind: WindVector, heading_deg: f64) -> f64 {
    let angle = normalize_deg(wind.direction_from() - heading_deg);
    if angle > 180.0 { 360.0 - angle } else { angle }
}
