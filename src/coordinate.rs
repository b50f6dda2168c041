use std::fmt;

use geo::Point;
use serde::Serialize;

/// A position in the active reference frame, in the frame's linear units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinate {
    pub east: f64,
    pub north: f64,
}

impl Coordinate {
    pub fn new(east: f64, north: f64) -> Self {
        Self { east, north }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.east, self.north)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.east, c.north)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((east, north): (f64, f64)) -> Self {
        Self { east, north }
    }
}
