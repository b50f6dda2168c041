use crate::config::{DEFAULT_MAP_BASE_URL, DEFAULT_MAP_ZOOM};
use crate::coordinate::Coordinate;

/// Builds links that open a coordinate in the federal map viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    pub base_url: String,
    pub zoom: u8,
}

impl Default for MapLink {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAP_BASE_URL.to_string(),
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl MapLink {
    pub fn new(base_url: impl Into<String>, zoom: u8) -> Self {
        Self {
            base_url: base_url.into(),
            zoom,
        }
    }

    pub fn url(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}&zoom={}&E={}&N={}",
            self.base_url, self.zoom, coordinate.east, coordinate.north
        )
    }
}
