//! The `Planner` and the plans it produces.

use std::time::Duration;

use log::{info, warn};

use wr_core::{CancelToken, NodeId, RoutingConfig};
use wr_metrics::{RouteMetricsRecord, RouteSummary, reconstruct};
use wr_polar::PolarModel;
use wr_spatial::{Grid, Path, Router, SpatialError, WindField, build_graph};

use crate::PlannerResult;

/// Size of the graph a plan was computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes:          usize,
    pub edges:          usize,
    /// Edges with non-zero boat speed.
    pub sailable_edges: usize,
}

/// Everything one routing run produces.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub path:    Path,
    pub records: Vec<RouteMetricsRecord>,
    pub summary: RouteSummary,
    pub graph:   GraphStats,
}

/// A configured router for one domain, boat and endpoint pair.
///
/// The grid and snapped endpoints are fixed at build time; each call to
/// [`plan`](Self::plan) takes a fresh wind snapshot and builds a fresh graph,
/// so one planner can be reused across forecast updates.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<P: PolarModel, R: Router> {
    pub(crate) config:      RoutingConfig,
    pub(crate) grid:        Grid,
    pub(crate) origin:      NodeId,
    pub(crate) destination: NodeId,
    pub(crate) polar:       P,
    pub(crate) router:      R,
    pub(crate) timeout:     Option<Duration>,
}

impl<P: PolarModel, R: Router> Planner<P, R> {
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn polar(&self) -> &P {
        &self.polar
    }

    /// Grid cell the origin snapped to.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Grid cell the destination snapped to.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Route through `wind`, honouring the builder's timeout if one was set.
    pub fn plan(&self, wind: &WindField) -> PlannerResult<RoutePlan> {
        let cancel = match self.timeout {
            Some(d) => CancelToken::with_timeout(d),
            None    => CancelToken::new(),
        };
        self.plan_until(wind, &cancel)
    }

    /// Route through `wind`, abandoning the search once `cancel` fires.
    pub fn plan_until(&self, wind: &WindField, cancel: &CancelToken) -> PlannerResult<RoutePlan> {
        let graph = build_graph(&self.grid, wind, &self.polar)?;
        let stats = GraphStats {
            nodes:          graph.node_count(),
            edges:          graph.edge_count(),
            sailable_edges: graph.finite_edge_count(),
        };

        let path = match self.router.route_until(&graph, self.origin, self.destination, cancel) {
            Ok(path) => path,
            Err(e @ SpatialError::NoRoute { .. }) => {
                warn!("{e}: every connecting leg is blocked in this wind");
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        let records = reconstruct(&path, &self.grid, wind, &self.polar)?;
        let summary = RouteSummary::from_records(&records);
        info!(
            "route: {} legs, {:.1} nm in {:.2} h ({:.2} kn average)",
            summary.legs, summary.total_distance_nm, summary.total_hours, summary.average_speed_kn
        );

        Ok(RoutePlan { path, records, summary, graph: stats })
    }
}
