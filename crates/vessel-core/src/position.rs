//! Planar position and heading-based displacement.
//!
//! The simulation world is a flat Cartesian plane with the origin at the
//! vessel's construction point.  Headings are in degrees, 0° = +x axis
//! ("east"), counterclockwise positive — the standard trigonometric
//! convention, so displacement decomposes as `(d·cos θ, d·sin θ)`.

use std::fmt;

/// A Cartesian coordinate pair in double-precision.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Where every vessel starts.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The position reached by travelling `distance` along `heading_deg`.
    pub fn displaced(self, heading_deg: f64, distance: f64) -> Position {
        let rad = heading_deg.to_radians();
        Position {
            x: self.x + distance * rad.cos(),
            y: self.y + distance * rad.sin(),
        }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
