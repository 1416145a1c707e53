//! CSV polar-table loader.
//!
//! # CSV format
//!
//! One row per angle band, ascending by upper bound; the last band must end
//! at 180°.  Whether values are knots or wind-speed coefficients is chosen
//! by the caller through [`PolarKind`].
//!
//! ```csv
//! upper_deg,value
//! 30,0
//! 60,6.0
//! 100,8.0
//! 140,9.0
//! 165,10.0
//! 180,7.0
//! ```

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::{PolarBin, PolarError, PolarKind, PolarResult, PolarTable};

#[derive(Deserialize)]
struct PolarRecord {
    upper_deg: f64,
    value:     f64,
}

/// Load a [`PolarTable`] from a CSV file.
pub fn load_polar_csv(path: &Path, kind: PolarKind) -> PolarResult<PolarTable> {
    info!("loading {kind} polar table from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_polar_reader(file, kind)
}

/// Like [`load_polar_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the application binary.
pub fn load_polar_reader<R: Read>(reader: R, kind: PolarKind) -> PolarResult<PolarTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let bins = csv_reader
        .deserialize::<PolarRecord>()
        .map(|row| {
            row.map(|r| PolarBin { upper_deg: r.upper_deg, value: r.value })
                .map_err(|e| PolarError::Parse(e.to_string()))
        })
        .collect::<PolarResult<Vec<_>>>()?;

    PolarTable::new(kind, bins)
}
