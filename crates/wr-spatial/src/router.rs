//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `wr-planner` calls routing via the [`Router`] trait, so applications can
//! swap in A* or an isochrone method without touching the graph or metrics
//! code.
//!
//! # Cost units
//!
//! Costs are hours as `f64`.  Blocked legs carry `+∞` and are never relaxed;
//! totals are exact sums of edge hours along the path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use wr_core::{CancelToken, EdgeId, NodeId};

use crate::graph::RouteGraph;
use crate::{SpatialError, SpatialResult};

/// Settled nodes between cancellation checks.
const CANCEL_POLL_INTERVAL: usize = 256;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: visited nodes in order, origin first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes: Vec<NodeId>,
    /// Total sailing time in hours.
    pub total_hours: f64,
}

impl Path {
    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn leg_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve several
/// planners on different threads.
pub trait Router: Send + Sync {
    /// Minimum-time path from `from` to `to`, abandoning the search once
    /// `cancel` fires.
    ///
    /// `from == to` yields a single-node path of zero hours.
    fn route_until(
        &self,
        graph: &RouteGraph,
        from: NodeId,
        to: NodeId,
        cancel: &CancelToken,
    ) -> SpatialResult<Path>;

    /// Minimum-time path with no cancellation.
    fn route(&self, graph: &RouteGraph, from: NodeId, to: NodeId) -> SpatialResult<Path> {
        self.route_until(graph, from, to, &CancelToken::new())
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR route graph, costed by
/// `edge_hours`.
///
/// Ties are deterministic: the heap pops equal costs in ascending `NodeId`
/// order and a node's predecessor only changes on a strictly better cost.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route_until(
        &self,
        graph: &RouteGraph,
        from: NodeId,
        to: NodeId,
        cancel: &CancelToken,
    ) -> SpatialResult<Path> {
        dijkstra(graph, from, to, cancel)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first,
/// then the smallest node.
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    cost: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.cost.total_cmp(&self.cost).then_with(|| other.node.cmp(&self.node))
    }
}

fn dijkstra(
    graph: &RouteGraph,
    from: NodeId,
    to: NodeId,
    cancel: &CancelToken,
) -> SpatialResult<Path> {
    let n = graph.node_count();
    for node in [from, to] {
        if node.index() >= n {
            return Err(SpatialError::NodeNotFound(node));
        }
    }
    if cancel.is_cancelled() {
        return Err(SpatialError::Cancelled { settled: 0 });
    }
    if from == to {
        return Ok(Path { nodes: vec![from], total_hours: 0.0 });
    }

    // dist[v] = best known hours to reach v.
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut settled   = vec![false; n];
    let mut settled_count = 0usize;

    dist[from.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: 0.0, node: from });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        settled_count += 1;

        if node == to {
            debug!("dijkstra {from} → {to}: {cost:.3} h, {settled_count} nodes settled");
            return Ok(reconstruct(graph, &prev_edge, to, cost));
        }
        if settled_count % CANCEL_POLL_INTERVAL == 0 && cancel.is_cancelled() {
            return Err(SpatialError::Cancelled { settled: settled_count });
        }

        for edge in graph.out_edges(node) {
            let hours = graph.edge_hours[edge.index()];
            if !hours.is_finite() {
                continue;
            }
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost + hours;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(HeapEntry { cost: new_cost, node: neighbor });
            }
        }
    }

    debug!("dijkstra {from} → {to}: unreachable after settling {settled_count} nodes");
    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(graph: &RouteGraph, prev_edge: &[EdgeId], to: NodeId, total_hours: f64) -> Path {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Path { nodes, total_hours }
}
