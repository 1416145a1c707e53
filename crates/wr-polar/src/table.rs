//! Binned polar tables.
//!
//! # Bins
//!
//! A table is an ordered list of `(upper_deg, value)` bins with inclusive
//! upper bounds that partition (0°, 180°].  A lookup canonicalises the angle
//! into [0, 180] and takes the first bin whose upper bound is ≥ the angle.
//! Angle 0 (head to wind) always yields 0 regardless of the table.
//!
//! The default bins:
//!
//! | Relative angle | Point of sail      | Absolute (kn) | Wind-scaled |
//! |----------------|--------------------|---------------|-------------|
//! | (0, 30]        | in irons           | 0             | 0           |
//! | (30, 60]       | close-hauled       | 6.0           | 1/3         |
//! | (60, 100]      | beam reach         | 8.0           | 1/2         |
//! | (100, 140]     | broad reach        | 9.0           | 2/3         |
//! | (140, 165]     | spinnaker run      | 10.0          | 4/5         |
//! | (165, 180]     | dead downwind      | 7.0           | 3/5         |
//!
//! Callers pick one [`PolarKind`] for a whole routing run; mixing kinds
//! inside one graph is not detected here.

use wr_core::normalize_deg;

use crate::{PolarError, PolarModel, PolarResult};

/// Upper bounds shared by both default tables.
const DEFAULT_UPPER_DEG: [f64; 6] = [30.0, 60.0, 100.0, 140.0, 165.0, 180.0];

const DEFAULT_ABSOLUTE_KN: [f64; 6] = [0.0, 6.0, 8.0, 9.0, 10.0, 7.0];

const DEFAULT_WIND_FRACTION: [f64; 6] = [0.0, 1.0 / 3.0, 0.5, 2.0 / 3.0, 0.8, 0.6];

// ── Angle folding ─────────────────────────────────────────────────────────────

/// Fold any angle onto [0, 180]: wrap into [0, 360), then reflect
/// `min(a, 360 − a)`.
#[inline]
pub fn canonical_angle(deg: f64) -> f64 {
    let a = normalize_deg(deg);
    a.min(360.0 - a).clamp(0.0, 180.0)
}

// ── PolarKind / PolarBin ──────────────────────────────────────────────────────

/// How a bin value turns into boat speed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolarKind {
    /// Bin value is boat speed in knots, independent of wind strength.
    Absolute,
    /// Bin value is a coefficient multiplied by wind speed in knots.
    WindScaled,
}

impl PolarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PolarKind::Absolute   => "absolute",
            PolarKind::WindScaled => "wind-scaled",
        }
    }
}

impl std::fmt::Display for PolarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One angle band of a polar table.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarBin {
    /// Inclusive upper bound of the band, degrees.
    pub upper_deg: f64,
    /// Knots (absolute) or wind-speed coefficient (wind-scaled).
    pub value: f64,
}

// ── PolarTable ────────────────────────────────────────────────────────────────

/// A validated, binned polar diagram.
///
/// Construct through [`PolarTable::new`], the default constructors, or the
/// CSV loader so the bin invariants always hold.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarTable {
    kind: PolarKind,
    bins: Vec<PolarBin>,
}

impl PolarTable {
    /// Build a table from bins sorted by ascending upper bound.
    ///
    /// Fails unless the bins are non-empty, strictly increasing, inside
    /// (0, 180], end exactly at 180, and carry finite non-negative values.
    pub fn new(kind: PolarKind, bins: Vec<PolarBin>) -> PolarResult<Self> {
        let Some(last) = bins.last() else {
            return Err(PolarError::InvalidTable("table has no bins".into()));
        };
        if last.upper_deg != 180.0 {
            return Err(PolarError::InvalidTable(format!(
                "last bin must end at 180°, ends at {}°",
                last.upper_deg
            )));
        }

        let mut prev = 0.0;
        for (i, bin) in bins.iter().enumerate() {
            if !bin.upper_deg.is_finite() || bin.upper_deg <= prev {
                return Err(PolarError::InvalidTable(format!(
                    "bin {i}: upper bound {}° must exceed {prev}°",
                    bin.upper_deg
                )));
            }
            if !bin.value.is_finite() || bin.value < 0.0 {
                return Err(PolarError::InvalidTable(format!(
                    "bin {i}: value {} must be finite and non-negative",
                    bin.value
                )));
            }
            prev = bin.upper_deg;
        }

        Ok(Self { kind, bins })
    }

    /// The default absolute-speed table (knots).
    pub fn absolute() -> Self {
        Self::from_defaults(PolarKind::Absolute, DEFAULT_ABSOLUTE_KN)
    }

    /// The default wind-scaled table (fraction of wind speed).
    pub fn wind_scaled() -> Self {
        Self::from_defaults(PolarKind::WindScaled, DEFAULT_WIND_FRACTION)
    }

    fn from_defaults(kind: PolarKind, values: [f64; 6]) -> Self {
        let bins = DEFAULT_UPPER_DEG
            .iter()
            .zip(values)
            .map(|(&upper_deg, value)| PolarBin { upper_deg, value })
            .collect();
        Self { kind, bins }
    }

    pub fn kind(&self) -> PolarKind {
        self.kind
    }

    pub fn bins(&self) -> &[PolarBin] {
        &self.bins
    }

    /// Raw bin value (knots or coefficient) for a relative angle.
    pub fn bin_value(&self, relative_angle_deg: f64) -> f64 {
        let angle = canonical_angle(relative_angle_deg);
        if angle == 0.0 {
            return 0.0;
        }
        self.bins
            .iter()
            .find(|b| angle <= b.upper_deg)
            .map_or(0.0, |b| b.value)
    }

    /// Smallest non-zero boat speed the table can produce at `wind_speed_kn`.
    ///
    /// `None` if every bin yields zero (e.g. a wind-scaled table in calm).
    pub fn slowest_nonzero(&self, wind_speed_kn: f64) -> Option<f64> {
        self.bins
            .iter()
            .map(|b| self.scale(b.value, wind_speed_kn))
            .filter(|&s| s > 0.0)
            .min_by(f64::total_cmp)
    }

    #[inline]
    fn scale(&self, value: f64, wind_speed_kn: f64) -> f64 {
        match self.kind {
            PolarKind::Absolute   => value,
            PolarKind::WindScaled => value * wind_speed_kn,
        }
    }
}

impl Default for PolarTable {
    fn default() -> Self {
        Self::absolute()
    }
}

impl PolarModel for PolarTable {
    #[inline]
    fn boat_speed(&self, relative_angle_deg: f64, wind_speed_kn: f64) -> f64 {
        self.scale(self.bin_value(relative_angle_deg), wind_speed_kn)
    }
}
