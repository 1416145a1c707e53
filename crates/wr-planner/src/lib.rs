//! `wr-planner` — one-call route planning for the windroute sailing router.
//!
//! # Pipeline
//!
//! ```text
//! PlannerBuilder::build():
//!   ① validate RoutingConfig
//!   ② Grid::new(domain, resolution)
//!   ③ snap origin / destination to their nearest cells
//!
//! Planner::plan(&wind):
//!   ④ build_graph(grid, wind, polar)      (parallel with the `parallel` feature)
//!   ⑤ Router::route_until(origin, destination, cancel)
//!   ⑥ reconstruct → RouteMetricsRecord per node, RouteSummary
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Builds the routing graph on Rayon's thread pool.       |
//! | `serde`    | Propagates serde derives to the underlying crates.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wr_planner::PlannerBuilder;
//! use wr_polar::PolarTable;
//! use wr_spatial::{DijkstraRouter, WindField};
//!
//! let planner = PlannerBuilder::new(config, PolarTable::absolute(), DijkstraRouter).build()?;
//! let wind = WindField::uniform(planner.grid(), WindVector::new(0.0, -10.0))?;
//! let plan = planner.plan(&wind)?;
//! ```

pub mod builder;
pub mod error;
pub mod planner;


pub use builder::PlannerBuilder;
pub use error::{PlannerError, PlannerResult};
pub use planner::{GraphStats, Planner, RoutePlan};
