use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::error::{Error, Result};

/// Planar coordinate systems a sampler can run in.
///
/// Only LV95 is listed because the boundary data ships in LV95. Sampling in
/// another frame against LV95 geometry would never accept a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ReferenceFrame {
    #[default]
    #[serde(rename = "LV95")]
    Lv95,
}

/// Axis-aligned rectangle in a frame's native units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingEnvelope {
    pub min_east: f64,
    pub min_north: f64,
    pub max_east: f64,
    pub max_north: f64,
}

lazy_static! {
    // Switzerland and Liechtenstein
    static ref ENVELOPES: HashMap<ReferenceFrame, BoundingEnvelope> = {
        let mut m = HashMap::new();
        m.insert(
            ReferenceFrame::Lv95,
            BoundingEnvelope {
                min_east: 2_485_410.0,
                min_north: 1_075_269.0,
                max_east: 2_833_859.0,
                max_north: 1_295_934.0,
            },
        );
        m
    };
}

impl ReferenceFrame {
    pub const ALL: [ReferenceFrame; 1] = [ReferenceFrame::Lv95];

    pub fn name(self) -> &'static str {
        match self {
            ReferenceFrame::Lv95 => "LV95",
        }
    }

    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }

    /// Resolves an identifier case-insensitively. A missing or blank
    /// identifier selects the default frame.
    pub fn parse(name: Option<&str>) -> Result<Self> {
        let name = match name.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(name) => name,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedFrame {
                requested: name.to_string(),
                supported: Self::supported_names(),
            })
    }

    pub fn envelope(self) -> BoundingEnvelope {
        // every variant is inserted above
        ENVELOPES[&self]
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl BoundingEnvelope {
    pub fn contains(&self, east: f64, north: f64) -> bool {
        (self.min_east..=self.max_east).contains(&east)
            && (self.min_north..=self.max_north).contains(&north)
    }

    pub fn area(&self) -> f64 {
        (self.max_east - self.min_east) * (self.max_north - self.min_north)
    }
}
