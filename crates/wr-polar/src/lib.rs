//! `wr-polar` — boat performance model for the windroute sailing router.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`model`]   | `PolarModel` trait                                          |
//! | [`table`]   | `PolarTable`, `PolarKind`, `PolarBin`, `canonical_angle`    |
//! | [`loader`]  | `load_polar_csv`, `load_polar_reader`                       |
//! | [`error`]   | `PolarError`, `PolarResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `PolarKind`/`PolarBin`. |

pub mod error;
pub mod loader;
pub mod model;
pub mod table;


pub use error::{PolarError, PolarResult};
pub use loader::{load_polar_csv, load_polar_reader};
pub use model::PolarModel;
pub use table::{PolarBin, PolarKind, PolarTable, canonical_angle};
