use serde::Serialize;

use crate::coordinate::Coordinate;

/// The outermost coordinates of a batch on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extrema {
    pub northernmost: Coordinate,
    pub easternmost: Coordinate,
    pub southernmost: Coordinate,
    pub westernmost: Coordinate,
}

impl Extrema {
    /// `None` for an empty batch. Ties keep the first coordinate seen.
    pub fn of<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut coordinates = coordinates.into_iter();
        let first = *coordinates.next()?;

        let mut extrema = Self {
            northernmost: first,
            easternmost: first,
            southernmost: first,
            westernmost: first,
        };
        for c in coordinates {
            if c.north > extrema.northernmost.north {
                extrema.northernmost = *c;
            }
            if c.east > extrema.easternmost.east {
                extrema.easternmost = *c;
            }
            if c.north < extrema.southernmost.north {
                extrema.southernmost = *c;
            }
            if c.east < extrema.westernmost.east {
                extrema.westernmost = *c;
            }
        }
        Some(extrema)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Coordinate)> {
        [
            ("northernmost", self.northernmost),
            ("easternmost", self.easternmost),
            ("southernmost", self.southernmost),
            ("westernmost", self.westernmost),
        ]
        .into_iter()
    }
}
