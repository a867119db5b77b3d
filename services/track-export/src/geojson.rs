//! GeoJSON assembly for normalized tracks.
//!
//! Mirrors the layer structure of the map view: wind-extent polygons for
//! the selected observation at the bottom, then the trajectory line, then
//! one point feature per observation. Coordinates stay unprojected
//! lon/lat degrees.

use serde_json::{json, Value};
use track_common::{TrackPoint, WindThreshold};
use wind_geometry::wind_ring;

/// Build a GeoJSON FeatureCollection for a normalized track.
///
/// When `selected` is given, up to three polygon features (34/50/64 kt)
/// are emitted for it; thresholds whose radii are all zero produce no
/// feature.
pub fn feature_collection(points: &[TrackPoint], selected: Option<&TrackPoint>) -> Value {
    let mut features = Vec::new();

    if let Some(point) = selected {
        for threshold in WindThreshold::all() {
            let radii = point.radii(*threshold);
            if let Some(ring) = wind_ring(point.longitude, point.latitude, &radii) {
                features.push(json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [ring],
                    },
                    "properties": {
                        "threshold": threshold.label(),
                        "point_id": point.id,
                    },
                }));
            }
        }
    }

    if points.len() >= 2 {
        let line: Vec<[f64; 2]> = points.iter().map(|p| [p.longitude, p.latitude]).collect();
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": line,
            },
            "properties": {
                "kind": "trajectory",
            },
        }));
    }

    for point in points {
        features.push(json!({
            "type": "Feature",
            "id": point.id,
            "geometry": {
                "type": "Point",
                "coordinates": [point.longitude, point.latitude],
            },
            "properties": {
                "date_utc": point.source_timestamp,
                "time": point.timestamp.to_rfc3339(),
                "vmax_ms": point.max_sustained_wind_ms,
                "mslp_hpa": point.central_pressure_hpa,
                "move_dir": point.movement_direction,
                "move_speed_kmh": point.movement_speed_kmh,
                "grade": point.intensity_grade,
                "selected": selected.is_some_and(|s| s.id == point.id),
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
