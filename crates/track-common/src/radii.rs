//! Per-quadrant wind extent values.

use serde::{Deserialize, Serialize};

/// One of the four 90°-wide compass sectors used to report
/// directionally-asymmetric wind extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Northeast, bearings [0°, 90°]
    Ne,
    /// Southeast, bearings [90°, 180°]
    Se,
    /// Southwest, bearings [180°, 270°]
    Sw,
    /// Northwest, bearings [270°, 360°]
    Nw,
}

impl Quadrant {
    /// Bearing interval covered by this quadrant, in degrees clockwise
    /// from north. Adjacent quadrants share their boundary bearing.
    pub fn bearing_span(&self) -> (f64, f64) {
        match self {
            Quadrant::Ne => (0.0, 90.0),
            Quadrant::Se => (90.0, 180.0),
            Quadrant::Sw => (180.0, 270.0),
            Quadrant::Nw => (270.0, 360.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Ne => "NE",
            Quadrant::Se => "SE",
            Quadrant::Sw => "SW",
            Quadrant::Nw => "NW",
        }
    }

    /// All quadrants in ring order (NE → SE → SW → NW).
    pub fn all() -> &'static [Quadrant] {
        &[Quadrant::Ne, Quadrant::Se, Quadrant::Sw, Quadrant::Nw]
    }
}

/// Wind radii for one wind-speed threshold: kilometers per compass quadrant.
///
/// Each value is non-negative. A value of exactly `0.0` is a sentinel
/// meaning "no extent reported in this quadrant", not a measured
/// zero-radius circle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindRadii {
    pub ne: f64,
    pub se: f64,
    pub sw: f64,
    pub nw: f64,
}

impl WindRadii {
    pub fn new(ne: f64, se: f64, sw: f64, nw: f64) -> Self {
        Self { ne, se, sw, nw }
    }

    /// True when no quadrant reports any extent.
    pub fn is_empty(&self) -> bool {
        self.ne == 0.0 && self.se == 0.0 && self.sw == 0.0 && self.nw == 0.0
    }

    /// Radius for a single quadrant.
    pub fn get(&self, quadrant: Quadrant) -> f64 {
        match quadrant {
            Quadrant::Ne => self.ne,
            Quadrant::Se => self.se,
            Quadrant::Sw => self.sw,
            Quadrant::Nw => self.nw,
        }
    }

    /// Radii paired with their quadrants, in ring order.
    pub fn by_quadrant(&self) -> [(Quadrant, f64); 4] {
        [
            (Quadrant::Ne, self.ne),
            (Quadrant::Se, self.se),
            (Quadrant::Sw, self.sw),
            (Quadrant::Nw, self.nw),
        ]
    }
}
