//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Routing domains span whole
//! ocean basins and edge weights are accumulated over hundreds of legs, so
//! the extra precision keeps totals reproducible bit-for-bit.

/// Mean Earth radius used by the haversine formula, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per international nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Haversine great-circle distance in nautical miles.
    #[inline]
    pub fn distance_nm(self, other: GeoPoint) -> f64 {
        self.distance_km(other) / KM_PER_NM
    }

    /// Planar heading towards `other`: `atan2(Δlon, Δlat)` in degrees,
    /// normalised into [0, 360).  0 = north, 90 = east.
    ///
    /// Not a great-circle bearing; adequate between adjacent grid cells.
    #[inline]
    pub fn planar_heading_deg(self, other: GeoPoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        normalize_deg(d_lon.atan2(d_lat).to_degrees())
    }

    /// Squared Euclidean distance in raw (lat, lon) degree space.
    #[inline]
    pub fn planar_distance_2(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        d_lat * d_lat + d_lon * d_lon
    }

    /// `true` if both coordinates are finite and the latitude is in [-90, 90].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && (-90.0..=90.0).contains(&self.lat)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Haversine distance between two points in nautical miles.
#[inline]
pub fn distance_nm(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_nm(b)
}

/// Wrap any finite angle into [0, 360).
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.0; those are
/// folded back to 0.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}
