//! Fluent builder for constructing a [`Planner`].

use std::time::Duration;

use log::{info, warn};

use wr_core::RoutingConfig;
use wr_polar::PolarModel;
use wr_spatial::{Grid, Router, SpatialError};

use crate::{Planner, PlannerResult};

/// Fluent builder for [`Planner<P, R>`].
///
/// # Required inputs
///
/// - [`RoutingConfig`] — domain, resolution, origin, destination
/// - `P: PolarModel` — the boat (e.g. [`wr_polar::PolarTable::absolute`])
/// - `R: Router` — the routing algorithm (e.g. [`wr_spatial::DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default     |
/// |-----------------|-------------|
/// | `.timeout(d)`   | no deadline |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(config, PolarTable::absolute(), DijkstraRouter)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// let plan = planner.plan(&wind)?;
/// ```
pub struct PlannerBuilder<P: PolarModel, R: Router> {
    config:  RoutingConfig,
    polar:   P,
    router:  R,
    timeout: Option<Duration>,
}

impl<P: PolarModel, R: Router> PlannerBuilder<P, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: RoutingConfig, polar: P, router: R) -> Self {
        Self { config, polar, router, timeout: None }
    }

    /// Abandon any single [`Planner::plan`] call that runs longer than `d`.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    /// Validate the configuration, build the grid, snap both endpoints, and
    /// return a ready-to-use [`Planner`].
    pub fn build(self) -> PlannerResult<Planner<P, R>> {
        self.config.validate().map_err(SpatialError::from)?;

        let domain = self.config.domain;
        let grid = Grid::new(domain, self.config.resolution_deg)?;
        info!("grid {} × {} over {domain} at {}°", grid.rows(), grid.cols(), self.config.resolution_deg);

        for (what, p) in [("origin", self.config.origin), ("destination", self.config.destination)] {
            if !domain.contains(p) {
                warn!("{what} {p} lies outside {domain}; snapping to the nearest border cell");
            }
        }
        let origin = grid.nearest_node(self.config.origin)?;
        let destination = grid.nearest_node(self.config.destination)?;
        info!(
            "origin {} → {origin} at {}, destination {} → {destination} at {}",
            self.config.origin,
            grid.point(origin),
            self.config.destination,
            grid.point(destination)
        );

        Ok(Planner {
            config: self.config,
            grid,
            origin,
            destination,
            polar: self.polar,
            router: self.router,
            timeout: self.timeout,
        })
    }
}
