//! Per-cell wind snapshot attached to a [`Grid`].
//!
//! A `WindField` is the ingestion boundary: whatever decoded the forecast
//! (GRIB, NetCDF, a synthetic generator) hands over one `(u, v)` pair per
//! grid cell, in the grid's row-major order.  Nothing here interpolates in
//! time or space; a sample is either on the lattice or snapped to it.
//!
//! # CSV format
//!
//! ```csv
//! lat,lon,u,v
//! 35.0,-35.0,8.5,0.4
//! 35.0,-34.5,8.4,0.6
//! ```

use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use wr_core::{GeoPoint, NodeId, WindVector};

use crate::{Grid, SpatialError, SpatialResult};

/// One wind vector per grid cell, row-major.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindField {
    rows:    usize,
    cols:    usize,
    vectors: Vec<WindVector>,
}

impl WindField {
    /// Wrap `vectors` as a `rows × cols` field.
    ///
    /// Fails if the length does not match the shape or any component is
    /// non-finite (a missing forecast value).
    pub fn from_vectors(rows: usize, cols: usize, vectors: Vec<WindVector>) -> SpatialResult<Self> {
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if vectors.len() != expected {
            return Err(SpatialError::InconsistentWindField(format!(
                "{} vectors for a {rows} × {cols} field",
                vectors.len()
            )));
        }
        if let Some(i) = vectors.iter().position(|w| !w.is_finite()) {
            return Err(SpatialError::InconsistentWindField(format!(
                "missing value at cell {i} (row {}, col {})",
                i / cols.max(1),
                i % cols.max(1)
            )));
        }
        Ok(Self { rows, cols, vectors })
    }

    /// Build from separate `u` and `v` component arrays, both row-major.
    pub fn from_components(rows: usize, cols: usize, u: &[f64], v: &[f64]) -> SpatialResult<Self> {
        if u.len() != v.len() {
            return Err(SpatialError::InconsistentWindField(format!(
                "u has {} values, v has {}",
                u.len(),
                v.len()
            )));
        }
        let vectors = u.iter().zip(v).map(|(&u, &v)| WindVector::new(u, v)).collect();
        Self::from_vectors(rows, cols, vectors)
    }

    /// The same wind in every cell of `grid`.
    pub fn uniform(grid: &Grid, wind: WindVector) -> SpatialResult<Self> {
        Self::from_vectors(grid.rows(), grid.cols(), vec![wind; grid.len()])
    }

    /// Evaluate `f` at every cell position of `grid`.
    pub fn from_fn<F>(grid: &Grid, f: F) -> SpatialResult<Self>
    where
        F: Fn(GeoPoint) -> WindVector,
    {
        let vectors = grid.points().iter().map(|&p| f(p)).collect();
        Self::from_vectors(grid.rows(), grid.cols(), vectors)
    }

    /// Snap each `(position, wind)` sample onto its nearest cell.
    ///
    /// A later sample for an already-filled cell replaces the earlier one.
    /// Every cell must receive at least one sample.
    pub fn from_samples<I>(grid: &Grid, samples: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = (GeoPoint, WindVector)>,
    {
        let mut slots: Vec<Option<WindVector>> = vec![None; grid.len()];
        let mut count = 0usize;
        for (pos, wind) in samples {
            let node = grid.nearest_node(pos)?;
            if slots[node.index()].replace(wind).is_some() {
                debug!("wind sample at {pos} overrides earlier value for {node}");
            }
            count += 1;
        }

        let vectors = slots
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                w.ok_or_else(|| {
                    SpatialError::InconsistentWindField(format!(
                        "no wind sample for cell {} ({})",
                        i,
                        grid.points()[i]
                    ))
                })
            })
            .collect::<SpatialResult<Vec<_>>>()?;

        debug!("snapped {count} wind samples onto {} cells", grid.len());
        Self::from_vectors(grid.rows(), grid.cols(), vectors)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Wind at `node`.
    ///
    /// # Panics
    /// Panics if `node` is outside the field.
    #[inline]
    pub fn at(&self, node: NodeId) -> WindVector {
        self.vectors[node.index()]
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<WindVector> {
        self.vectors.get(node.index()).copied()
    }

    pub fn vectors(&self) -> &[WindVector] {
        &self.vectors
    }

    /// Fail unless this field has exactly the shape of `grid`.
    pub fn check_shape(&self, grid: &Grid) -> SpatialResult<()> {
        if self.rows != grid.rows() || self.cols != grid.cols() {
            return Err(SpatialError::InconsistentWindField(format!(
                "field is {} × {}, grid is {} × {}",
                self.rows,
                self.cols,
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(())
    }
}

// ── CSV adapter ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WindRecord {
    lat: f64,
    lon: f64,
    u:   f64,
    v:   f64,
}

/// Load a wind snapshot for `grid` from a `lat,lon,u,v` CSV file.
pub fn load_wind_csv(path: &Path, grid: &Grid) -> SpatialResult<WindField> {
    info!("loading wind field from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_wind_reader(file, grid)
}

/// Like [`load_wind_csv`] but accepts any `Read` source.
pub fn load_wind_reader<R: Read>(reader: R, grid: &Grid) -> SpatialResult<WindField> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let samples = csv_reader
        .deserialize::<WindRecord>()
        .map(|row| {
            row.map(|r| (GeoPoint::new(r.lat, r.lon), WindVector::new(r.u, r.v)))
                .map_err(|e| SpatialError::Parse(e.to_string()))
        })
        .collect::<SpatialResult<Vec<_>>>()?;

    WindField::from_samples(grid, samples)
}
