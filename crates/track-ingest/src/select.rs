//! Point lookup helpers over a normalized sequence.

use track_common::TrackPoint;

/// The observation with the greatest maximum sustained wind.
///
/// Ties resolve to the latest observation. Hosts use this to pick an
/// initial selection after loading a track.
pub fn max_intensity_point(points: &[TrackPoint]) -> Option<&TrackPoint> {
    points.iter().reduce(|best, candidate| {
        if best.max_sustained_wind_ms > candidate.max_sustained_wind_ms {
            best
        } else {
            candidate
        }
    })
}

/// Look up a point by its position-derived id.
///
/// Ids are only stable within one parse; lookups across parses are the
/// host's responsibility.
pub fn find_point<'a>(points: &'a [TrackPoint], id: &str) -> Option<&'a TrackPoint> {
    points.iter().find(|p| p.id == id)
}
