//! Common types shared across all storm-track crates.

pub mod point;
pub mod radii;
pub mod time;

pub use point::{TrackPoint, WindThreshold};
pub use radii::{Quadrant, WindRadii};
pub use time::{format_compact_utc, parse_compact_utc};
