use std::path::Path;

use geo::{Area, BoundingRect, Contains, MultiPolygon, Point, Polygon, Rect};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::load_boundary::load_boundary_polygons;

/// Anything that can decide whether a coordinate is accepted.
pub trait Containment {
    fn contains(&self, coordinate: &Coordinate) -> bool;
}

impl<F: Fn(&Coordinate) -> bool> Containment for F {
    fn contains(&self, coordinate: &Coordinate) -> bool {
        self(coordinate)
    }
}

/// Read-only polygon set answering point-in-boundary queries.
///
/// A point is contained when it lies in the interior of at least one polygon.
/// Points exactly on an exterior or hole edge are not contained, and neither
/// are points inside a hole.
#[derive(Debug, Clone)]
pub struct BoundaryIndex {
    polygons: MultiPolygon<f64>,
    // bounding rectangle of each polygon, same order as `polygons`
    bounds: Vec<Rect<f64>>,
    extent: Rect<f64>,
}

impl BoundaryIndex {
    /// Loads the boundary from a shapefile.
    pub fn load<P: AsRef<Path>>(shapefile_path: P) -> Result<Self> {
        let polygons = load_boundary_polygons(shapefile_path.as_ref())?;
        Self::from_polygons(polygons).map_err(|e| match e {
            Error::DataLoad { reason, .. } => Error::DataLoad {
                path: shapefile_path.as_ref().to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Result<Self> {
        let polygons: Vec<Polygon<f64>> = polygons
            .into_iter()
            .filter(|p| p.unsigned_area() > 0.0)
            .collect();

        // a polygon with a non-zero area always has a bounding rectangle
        let bounds: Vec<Rect<f64>> = polygons.iter().filter_map(|p| p.bounding_rect()).collect();
        let polygons = MultiPolygon::new(polygons);

        let Some(extent) = polygons.bounding_rect() else {
            return Err(Error::DataLoad {
                path: "<memory>".into(),
                reason: "no polygon with a non-zero area".to_string(),
            });
        };

        Ok(Self {
            polygons,
            bounds,
            extent,
        })
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let point: Point<f64> = (*coordinate).into();
        self.polygons
            .iter()
            .zip(&self.bounds)
            .filter(|(_, rect)| in_rect(rect, coordinate))
            .any(|(poly, _)| poly.contains(&point))
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.0.len()
    }

    /// Bounding rectangle of the whole set.
    pub fn bounding_rect(&self) -> Rect<f64> {
        self.extent
    }

    pub fn area(&self) -> f64 {
        self.polygons.unsigned_area()
    }
}

impl Containment for BoundaryIndex {
    fn contains(&self, coordinate: &Coordinate) -> bool {
        BoundaryIndex::contains(self, coordinate)
    }
}

fn in_rect(rect: &Rect<f64>, c: &Coordinate) -> bool {
    (rect.min().x..=rect.max().x).contains(&c.east)
        && (rect.min().y..=rect.max().y).contains(&c.north)
}
