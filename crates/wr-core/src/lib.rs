//! `wr-core` — foundational types for the `windroute` sailing router.
//!
//! This crate is a dependency of every other `wr-*` crate.  It intentionally
//! has no `wr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`                                       |
//! | [`geo`]      | `GeoPoint`, haversine distance, planar heading           |
//! | [`wind`]     | `WindVector`, `relative_wind_angle`                      |
//! | [`config`]   | `Domain`, `RoutingConfig`                                |
//! | [`cancel`]   | `CancelToken`                                            |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cancel;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod wind;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use config::{Domain, RoutingConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, distance_nm, normalize_deg};
pub use ids::{EdgeId, NodeId};
pub use wind::{WindVector, relative_wind_angle};
