//! Storm-track normalization library.
//!
//! Turns raw delimited text with a header row into an ordered sequence of
//! typed [`TrackPoint`](track_common::TrackPoint) observations. Field-level
//! anomalies (missing columns, empty cells, unparseable numbers) are
//! absorbed by best-effort coercion; only a structural decode failure of
//! the table itself aborts the operation.

pub mod error;
mod normalize;
mod select;

pub use error::{IngestError, IngestResult};
pub use normalize::{normalize_csv, normalize_reader};
pub use select::{find_point, max_intensity_point};
