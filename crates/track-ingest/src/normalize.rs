//! CSV-to-domain normalization pipeline.

use std::collections::HashMap;
use std::io::Read;

use chrono::Utc;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use track_common::{parse_compact_utc, TrackPoint, WindRadii};

use crate::error::IngestResult;

/// Look up a cell by column name. `None` covers both an unrecognized
/// column and a row too short to reach it.
fn cell<'r>(
    columns: &HashMap<String, usize>,
    record: &'r StringRecord,
    name: &str,
) -> Option<&'r str> {
    columns.get(name).and_then(|&index| record.get(index))
}

/// Coerce a raw cell into a number. Missing, empty-after-trim,
/// unparseable, and literal-NaN values all resolve to `0.0`, never an
/// error.
fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // "NaN" parses as a valid f64; it must degrade to zero like any
    // other malformed cell or it poisons downstream geometry.
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Text cells pass through verbatim, including empty string.
fn coerce_text(raw: Option<&str>) -> String {
    raw.unwrap_or("").to_owned()
}

/// Normalize a delimited table read from `input`.
///
/// Produces one [`TrackPoint`] per non-empty data row, in input order,
/// with position-derived ids (`point-0`, `point-1`, ...). Fails only when
/// the CSV decode itself fails structurally; ragged rows are tolerated
/// and field anomalies are coerced per the crate-level policy.
pub fn normalize_reader<R: Read>(input: R) -> IngestResult<Vec<TrackPoint>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_owned(), index))
        .collect();

    let mut points = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;

        let number = |name: &str| coerce_number(cell(&columns, &record, name));
        let text = |name: &str| coerce_text(cell(&columns, &record, name));
        let radii = |prefix: &str| {
            WindRadii::new(
                number(&format!("{prefix}_ne_km")),
                number(&format!("{prefix}_se_km")),
                number(&format!("{prefix}_sw_km")),
                number(&format!("{prefix}_nw_km")),
            )
        };

        let source_timestamp = text("date_utc");
        // Absent or malformed timestamps fall back to the current
        // processing time rather than failing the row.
        let timestamp = parse_compact_utc(&source_timestamp).unwrap_or_else(Utc::now);

        points.push(TrackPoint {
            id: format!("point-{index}"),
            source_timestamp,
            timestamp,
            longitude: number("lon"),
            latitude: number("lat"),
            max_sustained_wind_ms: number("vmax_ms"),
            central_pressure_hpa: number("mslp_hpa"),
            movement_direction: text("move_dir"),
            movement_speed_kmh: number("move_speed_kmh"),
            intensity_grade: text("grade"),
            r34: radii("r34"),
            r50: radii("r50"),
            r64: radii("r64"),
        });
    }

    debug!(rows = points.len(), "Normalized track table");
    Ok(points)
}

/// Normalize a delimited table held in memory.
pub fn normalize_csv(text: &str) -> IngestResult<Vec<TrackPoint>> {
    normalize_reader(text.as_bytes())
}
