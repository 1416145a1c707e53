//! `wr-metrics` — per-node route metrics for the windroute sailing router.
//!
//! Turns a [`Path`](wr_spatial::Path) back into the conditions the boat
//! meets at each node: wind, heading, point of sail, leg time.  The legs are
//! costed by the same `wr_spatial::leg_cost` the graph builder uses.
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`record`]  | `RouteMetricsRecord`, `reconstruct`        |
//! | [`summary`] | `RouteSummary`                             |
//!
//! Errors are `wr_spatial::SpatialError`: `NodeNotFound` for a path node
//! outside the grid, `InconsistentWindField` for a mis-shaped snapshot.

pub mod record;
pub mod summary;


pub use record::{RouteMetricsRecord, reconstruct};
pub use summary::RouteSummary;
