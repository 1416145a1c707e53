//! `wr-output` — route output writers for the windroute sailing router.
//!
//! | Backend | Files created                                 |
//! |---------|-----------------------------------------------|
//! | CSV     | `route_metrics.csv`, `route_summary.csv`      |
//!
//! Backends implement [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wr_output::{CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_records(&plan.records)?;
//! writer.write_summary(&plan.summary)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::OutputWriter;
