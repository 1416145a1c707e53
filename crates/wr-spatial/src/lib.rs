//! `wr-spatial` — routing lattice, wind field, wind-weighted graph, and
//! minimum-time routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid` (lat/lon lattice + R-tree snapping)                  |
//! | [`field`]   | `WindField`, `load_wind_csv`, `load_wind_reader`            |
//! | [`leg`]     | `Leg`, `leg_cost`, `point_of_sail`                          |
//! | [`graph`]   | `RouteGraph` (CSR), `RouteGraphBuilder`, `build_graph`      |
//! | [`router`]  | `Router` trait, `Path`, `DijkstraRouter`                    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Computes per-cell edge lists on Rayon's thread pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod field;
pub mod graph;
pub mod grid;
pub mod leg;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use field::{WindField, load_wind_csv, load_wind_reader};
pub use graph::{RouteGraph, RouteGraphBuilder, build_graph};
pub use grid::Grid;
pub use leg::{Leg, leg_cost, point_of_sail};
pub use router::{DijkstraRouter, Path, Router};
