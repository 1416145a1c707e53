//! The pluggable boat-performance trait.

/// Maps a relative wind angle and wind strength to boat speed.
///
/// The graph builder and the route-metrics reconstructor are generic over
/// this trait, so an application can plug in an interpolated polar diagram
/// in place of the binned [`PolarTable`](crate::PolarTable).
///
/// # Contract
///
/// - The result is in knots and never negative.
/// - Symmetric port/starboard: `boat_speed(θ, w) == boat_speed(360 − θ, w)`.
/// - Periodic: `boat_speed(θ, w) == boat_speed(θ + 360·k, w)`.
/// - `wind_speed_kn` is assumed ≥ 0; negative values are a caller error.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// workers during parallel graph construction.
pub trait PolarModel: Send + Sync {
    /// Boat speed in knots at `relative_angle_deg` (any real; 0 = head to
    /// wind) in `wind_speed_kn` knots of true wind.
    fn boat_speed(&self, relative_angle_deg: f64, wind_speed_kn: f64) -> f64;
}

impl<P: PolarModel + ?Sized> PolarModel for &P {
    #[inline]
    fn boat_speed(&self, relative_angle_deg: f64, wind_speed_kn: f64) -> f64 {
        (**self).boat_speed(relative_angle_deg, wind_speed_kn)
    }
}
