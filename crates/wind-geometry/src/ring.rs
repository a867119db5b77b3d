//! Wind-extent polygon ring generation.

use track_common::WindRadii;

use crate::sphere::destination_point;

/// Equal-angle interpolation steps per 90° quadrant. Both span endpoints
/// are emitted, so each quadrant contributes `SAMPLES_PER_QUADRANT + 1`
/// positions and adjacent quadrants repeat the shared boundary bearing.
pub const SAMPLES_PER_QUADRANT: usize = 15;

/// Build the closed wind-extent ring for one radii group around a center.
///
/// Returns `None` when all four radii are zero (no extent reported at
/// this threshold); callers must not render a shape in that case.
/// Otherwise returns exactly 65 `[lon, lat]` positions: four quadrant
/// arcs in NE→SE→SW→NW order plus an explicit closing copy of the first
/// position. A quadrant with radius zero collapses onto the center point
/// for all of its samples, denting the ring inward rather than
/// interpolating between its neighbors.
pub fn wind_ring(center_lon: f64, center_lat: f64, radii: &WindRadii) -> Option<Vec<[f64; 2]>> {
    if radii.is_empty() {
        return None;
    }

    let mut coordinates = Vec::with_capacity(4 * (SAMPLES_PER_QUADRANT + 1) + 1);

    for (quadrant, radius) in radii.by_quadrant() {
        let (start, end) = quadrant.bearing_span();
        for step in 0..=SAMPLES_PER_QUADRANT {
            if radius == 0.0 {
                coordinates.push([center_lon, center_lat]);
            } else {
                let fraction = step as f64 / SAMPLES_PER_QUADRANT as f64;
                let bearing = start + (end - start) * fraction;
                let (lon, lat) = destination_point(center_lon, center_lat, radius, bearing);
                coordinates.push([lon, lat]);
            }
        }
    }

    // Explicit ring closure
    let first = coordinates[0];
    coordinates.push(first);

    Some(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::great_circle_distance_km;

    const CENTER: (f64, f64) = (135.0, 20.0);

    #[test]
    fn test_all_zero_radii_yields_no_shape() {
        assert!(wind_ring(CENTER.0, CENTER.1, &WindRadii::default()).is_none());
    }

    #[test]
    fn test_ring_has_65_points_and_is_closed() {
        let radii = WindRadii::new(120.0, 100.0, 80.0, 90.0);
        let ring = wind_ring(CENTER.0, CENTER.1, &radii).unwrap();
        assert_eq!(ring.len(), 65);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_uniform_radii_approximate_circle() {
        let radii = WindRadii::new(100.0, 100.0, 100.0, 100.0);
        let ring = wind_ring(CENTER.0, CENTER.1, &radii).unwrap();

        for (i, point) in ring.iter().enumerate() {
            let d = great_circle_distance_km(CENTER.0, CENTER.1, point[0], point[1]);
            assert!(
                (d - 100.0).abs() < 1e-6,
                "sample {} should be 100 km out, got {}",
                i,
                d
            );
        }
    }

    #[test]
    fn test_zero_quadrants_collapse_to_center() {
        let radii = WindRadii::new(50.0, 0.0, 0.0, 0.0);
        let ring = wind_ring(CENTER.0, CENTER.1, &radii).unwrap();

        // NE span: samples 0..=15 sit ~50 km out
        for (i, point) in ring[..=SAMPLES_PER_QUADRANT].iter().enumerate() {
            let d = great_circle_distance_km(CENTER.0, CENTER.1, point[0], point[1]);
            assert!(
                (d - 50.0).abs() < 1e-6,
                "NE sample {} should be 50 km out, got {}",
                i,
                d
            );
        }

        // SE/SW/NW spans (and the closing point, which copies NE's first
        // sample) collapse to the center exactly
        for (i, point) in ring[SAMPLES_PER_QUADRANT + 1..64].iter().enumerate() {
            assert_eq!(
                *point,
                [CENTER.0, CENTER.1],
                "sample {} should equal the center",
                SAMPLES_PER_QUADRANT + 1 + i
            );
        }
        assert_eq!(ring[64], ring[0]);
    }

    #[test]
    fn test_quadrant_boundaries_continuous() {
        // With equal radii in adjacent quadrants the last NE sample (90°)
        // and the first SE sample (90°) are the same bearing and distance,
        // hence the same coordinate by construction.
        let radii = WindRadii::new(80.0, 80.0, 80.0, 80.0);
        let ring = wind_ring(CENTER.0, CENTER.1, &radii).unwrap();

        let per_quadrant = SAMPLES_PER_QUADRANT + 1;
        for q in 0..3 {
            let last_of_q = ring[q * per_quadrant + SAMPLES_PER_QUADRANT];
            let first_of_next = ring[(q + 1) * per_quadrant];
            assert_eq!(last_of_q, first_of_next, "boundary {} should be shared", q);
        }
    }

    #[test]
    fn test_asymmetric_radii_sampled_per_quadrant() {
        let radii = WindRadii::new(120.0, 60.0, 60.0, 120.0);
        let ring = wind_ring(CENTER.0, CENTER.1, &radii).unwrap();

        // Interior of the NE span is 120 km out, interior of SE is 60 km
        let ne_mid = ring[SAMPLES_PER_QUADRANT / 2];
        let se_mid = ring[SAMPLES_PER_QUADRANT + 1 + SAMPLES_PER_QUADRANT / 2];
        let d_ne = great_circle_distance_km(CENTER.0, CENTER.1, ne_mid[0], ne_mid[1]);
        let d_se = great_circle_distance_km(CENTER.0, CENTER.1, se_mid[0], se_mid[1]);
        assert!((d_ne - 120.0).abs() < 1e-6, "NE mid should be 120 km out, got {}", d_ne);
        assert!((d_se - 60.0).abs() < 1e-6, "SE mid should be 60 km out, got {}", d_se);
    }
}
