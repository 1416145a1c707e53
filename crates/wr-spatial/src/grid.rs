//! Uniform latitude/longitude routing lattice.
//!
//! # Layout
//!
//! Cells are stored row-major: row `i` runs over latitude ascending, column
//! `j` over longitude ascending, and the cell's `NodeId` is `i * cols + j`.
//! The same index addresses the wind field and the routing graph.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest cell.  Used to
//! snap route endpoints and wind samples onto the lattice.

use std::fmt;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use wr_core::{Domain, GeoPoint, NodeId};

use crate::{SpatialError, SpatialResult};

/// Slack subtracted before rounding the step count up, so that
/// `(max - min) / res` landing a hair above an integer through float drift
/// does not add a spurious extra row.
const AXIS_EPS: f64 = 1e-9;

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct CellEntry {
    point: [f64; 2], // [lat, lon]
    id:    NodeId,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    /// Squared Euclidean distance in lat/lon space.  Cell spacing is tiny
    /// compared with the Earth radius, so great-circle distance is not needed.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A rectangular lattice of geographic points.
///
/// The grid owns cell geometry only; wind values are attached per snapshot
/// through a [`WindField`](crate::WindField) with the same shape.
#[derive(Clone)]
pub struct Grid {
    lats:        Vec<f64>,
    lons:        Vec<f64>,
    points:      Vec<GeoPoint>,
    spatial_idx: RTree<CellEntry>,
}

impl Grid {
    /// Build the lattice covering `domain` at `resolution_deg` spacing.
    ///
    /// Each axis starts at its minimum and steps by `resolution_deg` until it
    /// reaches or passes the maximum, so the final partial step is included.
    /// Latitudes are capped at 90°.
    pub fn new(domain: Domain, resolution_deg: f64) -> SpatialResult<Self> {
        domain.validate(resolution_deg)?;

        let lats = axis(domain.lat_min, domain.lat_max, resolution_deg)?
            .into_iter()
            .map(|lat| lat.min(90.0))
            .collect();
        let lons = axis(domain.lon_min, domain.lon_max, resolution_deg)?;
        Self::assemble(lats, lons)
    }

    /// Build a grid from externally supplied coordinate arrays (e.g. the
    /// latitude/longitude axes of a forecast file).
    ///
    /// Both axes must be finite and strictly ascending; latitudes must lie in
    /// [-90, 90].  Empty axes give an empty grid.
    pub fn from_axes(lats: Vec<f64>, lons: Vec<f64>) -> SpatialResult<Self> {
        check_axis("latitude", &lats)?;
        check_axis("longitude", &lons)?;
        if lats.iter().any(|lat| !(-90.0..=90.0).contains(lat)) {
            return Err(SpatialError::InvalidDomain("latitude axis exceeds [-90, 90]".into()));
        }
        Self::assemble(lats, lons)
    }

    fn assemble(lats: Vec<f64>, lons: Vec<f64>) -> SpatialResult<Self> {
        let cells = lats.len().checked_mul(lons.len()).unwrap_or(usize::MAX);
        if cells >= u32::MAX as usize {
            return Err(SpatialError::InvalidDomain(format!(
                "{} × {} cells exceeds the node index range",
                lats.len(),
                lons.len()
            )));
        }

        let points: Vec<GeoPoint> = lats
            .iter()
            .flat_map(|&lat| lons.iter().map(move |&lon| GeoPoint::new(lat, lon)))
            .collect();

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<CellEntry> = points
            .iter()
            .enumerate()
            .map(|(i, p)| CellEntry { point: [p.lat, p.lon], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(Self { lats, lons, points, spatial_idx })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.lats.len()
    }

    pub fn cols(&self) -> usize {
        self.lons.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latitudes(&self) -> &[f64] {
        &self.lats
    }

    pub fn longitudes(&self) -> &[f64] {
        &self.lons
    }

    /// All cell positions in row-major order, indexed by `NodeId`.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    // ── Cell addressing ───────────────────────────────────────────────────

    /// Position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is outside the grid; use [`get`](Self::get) otherwise.
    #[inline]
    pub fn point(&self, node: NodeId) -> GeoPoint {
        self.points[node.index()]
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<GeoPoint> {
        self.points.get(node.index()).copied()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.points.len()
    }

    /// `(row, col)` of `node`.  Meaningless for nodes outside the grid.
    #[inline]
    pub fn cell(&self, node: NodeId) -> (usize, usize) {
        let cols = self.cols().max(1);
        (node.index() / cols, node.index() % cols)
    }

    /// `NodeId` of the cell at `(row, col)`, if inside the grid.
    #[inline]
    pub fn node_at(&self, row: usize, col: usize) -> Option<NodeId> {
        (row < self.rows() && col < self.cols()).then(|| NodeId((row * self.cols() + col) as u32))
    }

    /// The up-to-8 grid-adjacent cells of `node`, self excluded, in the order
    /// `(dr, dc)` over `{-1, 0, 1} × {-1, 0, 1}`.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let (row, col) = self.cell(node);
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.node_at(r, c)
            })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The cell nearest to `pos` by squared (lat, lon) distance.
    ///
    /// Ties go to the lowest `NodeId`, i.e. the first cell in row-major scan
    /// order.  Fails with [`SpatialError::EmptyGrid`] on an empty grid.
    pub fn nearest_node(&self, pos: GeoPoint) -> SpatialResult<NodeId> {
        let query = [pos.lat, pos.lon];
        let mut iter = self.spatial_idx.nearest_neighbor_iter(&query);
        let first = iter.next().ok_or(SpatialError::EmptyGrid)?;
        let best = first.distance_2(&query);

        // The iterator yields in ascending distance, so every equidistant
        // cell follows `first` directly.
        Ok(iter
            .take_while(|e| e.distance_2(&query) <= best)
            .map(|e| e.id)
            .fold(first.id, Ord::min))
    }

    /// Up to `k` nearest cells to `pos`, ascending by distance, ties by id.
    pub fn nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        let query = [pos.lat, pos.lon];
        let mut found: Vec<(f64, NodeId)> = Vec::with_capacity(k);
        for e in self.spatial_idx.nearest_neighbor_iter(&query) {
            let d = e.distance_2(&query);
            // Keep going past `k` only while still tied with the k-th entry.
            if found.len() >= k && found.last().is_none_or(|&(last, _)| d > last) {
                break;
            }
            found.push((d, e.id));
        }
        found.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        found.truncate(k);
        found.into_iter().map(|(_, id)| id).collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("lat", &(self.lats.first(), self.lats.last()))
            .field("lon", &(self.lons.first(), self.lons.last()))
            .finish()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `min, min + res, …` up to and including the first value ≥ `max`.
fn axis(min: f64, max: f64, res: f64) -> SpatialResult<Vec<f64>> {
    let steps = ((max - min) / res - AXIS_EPS).ceil().max(0.0);
    if steps >= u32::MAX as f64 {
        return Err(SpatialError::InvalidDomain(format!(
            "resolution {res}° over [{min}, {max}] gives too many cells"
        )));
    }
    Ok((0..=steps as usize).map(|k| min + k as f64 * res).collect())
}

fn check_axis(what: &str, values: &[f64]) -> SpatialResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SpatialError::InvalidDomain(format!("{what} axis has non-finite values")));
    }
    if values.windows(2).any(|w| w[1] <= w[0]) {
        return Err(SpatialError::InvalidDomain(format!("{what} axis is not strictly ascending")));
    }
    Ok(())
}
