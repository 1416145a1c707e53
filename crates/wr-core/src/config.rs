//! Routing-run configuration.
//!
//! Everything a routing run needs besides the wind snapshot and the polar
//! table is held in [`RoutingConfig`].  There are no process-wide defaults:
//! two runs with different domains or endpoints can execute side by side.

use std::fmt;

use crate::{CoreError, CoreResult, GeoPoint};

// ── Domain ────────────────────────────────────────────────────────────────────

/// Geographic bounding box of the routing lattice, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Domain {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self { lat_min, lat_max, lon_min, lon_max }
    }

    /// Check bounds and resolution.
    ///
    /// Fails when a bound or the resolution is non-finite, when
    /// `lat_min >= lat_max` or `lon_min >= lon_max`, when `resolution_deg <= 0`,
    /// or when a latitude bound lies outside [-90, 90].
    pub fn validate(&self, resolution_deg: f64) -> CoreResult<()> {
        let all = [self.lat_min, self.lat_max, self.lon_min, self.lon_max, resolution_deg];
        if all.iter().any(|x| !x.is_finite()) {
            return Err(CoreError::InvalidDomain(format!(
                "non-finite bound or resolution in {self} @ {resolution_deg}°"
            )));
        }
        if self.lat_min >= self.lat_max {
            return Err(CoreError::InvalidDomain(format!(
                "lat_min {} must be below lat_max {}",
                self.lat_min, self.lat_max
            )));
        }
        if self.lon_min >= self.lon_max {
            return Err(CoreError::InvalidDomain(format!(
                "lon_min {} must be below lon_max {}",
                self.lon_min, self.lon_max
            )));
        }
        if resolution_deg <= 0.0 {
            return Err(CoreError::InvalidDomain(format!(
                "resolution must be positive, got {resolution_deg}"
            )));
        }
        if self.lat_min < -90.0 || self.lat_max > 90.0 {
            return Err(CoreError::InvalidDomain(format!(
                "latitude bounds [{}, {}] exceed [-90, 90]",
                self.lat_min, self.lat_max
            )));
        }
        Ok(())
    }

    /// `true` if `p` lies inside the box (edges included).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&p.lat)
            && (self.lon_min..=self.lon_max).contains(&p.lon)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{}, {}] × lon [{}, {}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}

// ── RoutingConfig ─────────────────────────────────────────────────────────────

/// Top-level routing configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Bounding box of the routing lattice.
    pub domain: Domain,

    /// Lattice spacing in degrees, applied to both latitude and longitude.
    pub resolution_deg: f64,

    /// Departure point.  Snapped to the nearest grid cell.
    pub origin: GeoPoint,

    /// Arrival point.  Snapped to the nearest grid cell.
    pub destination: GeoPoint,
}

impl RoutingConfig {
    /// Validate the domain, resolution and both endpoints.
    pub fn validate(&self) -> CoreResult<()> {
        self.domain.validate(self.resolution_deg)?;
        for (what, p) in [("origin", self.origin), ("destination", self.destination)] {
            if !p.is_valid() {
                return Err(CoreError::Config(format!("{what} {p} is not a valid coordinate")));
            }
        }
        Ok(())
    }
}
