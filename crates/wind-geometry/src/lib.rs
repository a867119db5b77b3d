//! Spherical geometry for wind-extent rings.
//!
//! Converts per-quadrant wind radii around a storm center into closed
//! geographic polygon rings. All coordinates are plain lon/lat degrees;
//! projection to a display CRS is the rendering collaborator's concern.

pub mod ring;
pub mod sphere;

pub use ring::{wind_ring, SAMPLES_PER_QUADRANT};
pub use sphere::{destination_point, great_circle_distance_km, EARTH_RADIUS_KM};
