//! Track observation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::radii::WindRadii;

/// Wind-speed thresholds for which per-quadrant radii are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindThreshold {
    /// Gale-force extent (34 kt sustained)
    Kt34,
    /// Storm-force extent (50 kt sustained)
    Kt50,
    /// Hurricane-force extent (64 kt sustained)
    Kt64,
}

impl WindThreshold {
    pub fn knots(&self) -> u32 {
        match self {
            WindThreshold::Kt34 => 34,
            WindThreshold::Kt50 => 50,
            WindThreshold::Kt64 => 64,
        }
    }

    /// Short tag used in column names and feature properties.
    pub fn label(&self) -> &'static str {
        match self {
            WindThreshold::Kt34 => "r34",
            WindThreshold::Kt50 => "r50",
            WindThreshold::Kt64 => "r64",
        }
    }

    /// All thresholds, lowest first.
    pub fn all() -> &'static [WindThreshold] {
        &[WindThreshold::Kt34, WindThreshold::Kt50, WindThreshold::Kt64]
    }
}

/// One storm-track observation.
///
/// Produced by the normalizer in input-row order; the sequence is replaced
/// wholesale on each successful parse, never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Position-derived identifier, unique within one parse.
    pub id: String,
    /// Original timestamp text, preserved verbatim for display/audit.
    pub source_timestamp: String,
    /// Observation time, UTC.
    pub timestamp: DateTime<Utc>,
    /// Degrees, signed. Out-of-range values pass through unclamped.
    pub longitude: f64,
    /// Degrees, signed. Out-of-range values pass through unclamped.
    pub latitude: f64,
    /// Maximum sustained wind, m/s.
    pub max_sustained_wind_ms: f64,
    /// Central pressure, hPa.
    pub central_pressure_hpa: f64,
    /// Free-text compass label, verbatim.
    pub movement_direction: String,
    /// Movement speed, km/h.
    pub movement_speed_kmh: f64,
    /// Free-text classification label, verbatim.
    pub intensity_grade: String,
    pub r34: WindRadii,
    pub r50: WindRadii,
    pub r64: WindRadii,
}

impl TrackPoint {
    /// Radii group for a given threshold.
    pub fn radii(&self, threshold: WindThreshold) -> WindRadii {
        match threshold {
            WindThreshold::Kt34 => self.r34,
            WindThreshold::Kt50 => self.r50,
            WindThreshold::Kt64 => self.r64,
        }
    }
}
