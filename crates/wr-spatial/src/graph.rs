//! Wind-weighted routing graph and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`.  Edge
//! weights are directional: `a → b` and `b → a` are separate edges whose
//! costs generally differ because the boat meets the wind at a different
//! angle.
//!
//! # Blocked legs
//!
//! A leg whose boat speed is zero keeps its edge with `edge_hours = +∞`.
//! The router never relaxes such edges, so they behave as absent while the
//! topology stays the plain 8-connected lattice.

use log::{info, warn};

use wr_core::{EdgeId, GeoPoint, NodeId};
use wr_polar::PolarModel;

use crate::leg::{Leg, leg_cost};
use crate::{Grid, SpatialError, SpatialResult, WindField};

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Directed, wind-weighted graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RouteGraphBuilder`] or [`build_graph`].
#[derive(Clone, Debug)]
pub struct RouteGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Needed to walk predecessor edges back to
    /// the origin.
    pub edge_from: Vec<NodeId>,

    pub edge_to: Vec<NodeId>,

    /// Leg length in nautical miles.
    pub edge_length_nm: Vec<f64>,

    pub edge_heading_deg: Vec<f64>,

    pub edge_boat_speed_kn: Vec<f64>,

    /// Sailing time in hours.  Used as Dijkstra edge cost; `+∞` if blocked.
    pub edge_hours: Vec<f64>,
}

impl RouteGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Number of edges that can actually be sailed.
    pub fn finite_edge_count(&self) -> usize {
        self.edge_hours.iter().filter(|h| h.is_finite()).count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// Contiguous index range, no allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges, blocked included).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The edge `from → to`, if one exists.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        if from.index() >= self.node_count() {
            return None;
        }
        self.out_edges(from).find(|e| self.edge_to[e.index()] == to)
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order.  `build()` stable-sorts them by source
/// node, so each node's edges keep their insertion order.
///
/// # Example
///
/// ```
/// use wr_core::{GeoPoint, WindVector};
/// use wr_polar::PolarTable;
/// use wr_spatial::{RouteGraphBuilder, leg_cost};
///
/// let mut b = RouteGraphBuilder::new();
/// let a = b.add_node(GeoPoint::new(45.0, -5.0));
/// let c = b.add_node(GeoPoint::new(45.5, -5.0));
/// let wind = WindVector::new(8.0, 0.0); // from the east
/// let leg = leg_cost(GeoPoint::new(45.0, -5.0), GeoPoint::new(45.5, -5.0), wind, &PolarTable::absolute());
/// b.add_directed_edge(a, c, leg);
/// let g = b.build();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.out_degree(c), 0);
/// ```
pub struct RouteGraphBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to:   NodeId,
    leg:  Leg,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to` carrying `leg`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, leg: Leg) {
        self.raw_edges.push(RawEdge { from, to, leg });
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// # Panics
    /// Panics if an edge references a node that was never added.
    pub fn build(self) -> RouteGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable: preserves per-node insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:          Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:            Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_nm:     Vec<f64>    = raw.iter().map(|e| e.leg.distance_nm).collect();
        let edge_heading_deg:   Vec<f64>    = raw.iter().map(|e| e.leg.heading_deg).collect();
        let edge_boat_speed_kn: Vec<f64>    = raw.iter().map(|e| e.leg.boat_speed_kn).collect();
        let edge_hours:         Vec<f64>    = raw.iter().map(|e| e.leg.hours).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        RouteGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_nm,
            edge_heading_deg,
            edge_boat_speed_kn,
            edge_hours,
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Lattice graph ─────────────────────────────────────────────────────────────

/// Build the 8-connected routing graph for one wind snapshot.
///
/// Every cell gets one directed edge to each grid neighbour; the leg is
/// costed with the wind at the source cell.  With the `parallel` feature the
/// per-cell edge lists are computed on Rayon's pool and concatenated in node
/// order, giving the same graph as the sequential build.
pub fn build_graph<P: PolarModel + ?Sized>(
    grid: &Grid,
    wind: &WindField,
    polar: &P,
) -> SpatialResult<RouteGraph> {
    if grid.is_empty() {
        return Err(SpatialError::EmptyGrid);
    }
    wind.check_shape(grid)?;

    let cell_edges = |i: usize| -> Vec<(NodeId, NodeId, Leg)> {
        let from = NodeId(i as u32);
        let origin = grid.point(from);
        let w = wind.at(from);
        grid.neighbours(from)
            .map(|to| (from, to, leg_cost(origin, grid.point(to), w, polar)))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let per_cell: Vec<Vec<(NodeId, NodeId, Leg)>> = {
        use rayon::prelude::*;
        (0..grid.len()).into_par_iter().map(cell_edges).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let per_cell: Vec<Vec<(NodeId, NodeId, Leg)>> = (0..grid.len()).map(cell_edges).collect();

    let mut b = RouteGraphBuilder::with_capacity(grid.len(), grid.len() * 8);
    for &p in grid.points() {
        b.add_node(p);
    }
    for (from, to, leg) in per_cell.into_iter().flatten() {
        b.add_directed_edge(from, to, leg);
    }
    let graph = b.build();

    let finite = graph.finite_edge_count();
    info!(
        "route graph: {} nodes, {} edges ({} sailable)",
        graph.node_count(),
        graph.edge_count(),
        finite
    );
    if finite == 0 && graph.edge_count() > 0 {
        warn!("every leg is blocked: the boat makes no way anywhere in this wind");
    }
    Ok(graph)
}
