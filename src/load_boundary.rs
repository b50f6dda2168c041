use std::path::Path;

use geo::{Area, LineString, Polygon};
use log::{debug, warn};
use shapefile::{PolygonRing, Reader, Shape};

use crate::error::{Error, Result};

/// Reads every polygon feature of a shapefile. Z and M values are dropped.
pub fn load_boundary_polygons<P: AsRef<Path>>(shapefile_path: P) -> Result<Vec<Polygon<f64>>> {
    let path = shapefile_path.as_ref();
    let data_load = |reason: String| Error::DataLoad {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = Reader::from_path(path).map_err(|e| data_load(e.to_string()))?;
    let mut polygons = Vec::new();
    let mut skipped = 0usize;

    for record in reader.iter_shapes_and_records() {
        let (shape, _) = record.map_err(|e| data_load(e.to_string()))?;

        let converted = match shape {
            Shape::Polygon(p) => polygons_from_rings(p.rings(), |pt| (pt.x, pt.y)),
            Shape::PolygonZ(p) => polygons_from_rings(p.rings(), |pt| (pt.x, pt.y)),
            Shape::PolygonM(p) => polygons_from_rings(p.rings(), |pt| (pt.x, pt.y)),
            other => {
                warn!("skipping non-polygon shape {:?}", other.shapetype());
                skipped += 1;
                continue;
            }
        };

        for poly in converted {
            if poly.unsigned_area() > 0.0 {
                polygons.push(poly);
            } else {
                skipped += 1;
            }
        }
    }

    debug!(
        "loaded {} polygons from {} ({} skipped)",
        polygons.len(),
        path.display(),
        skipped
    );

    if polygons.is_empty() {
        return Err(data_load("no polygon with a non-zero area".to_string()));
    }

    Ok(polygons)
}

/// Groups rings into polygons: each outer ring opens a new polygon and the
/// inner rings that follow it become its holes.
pub(crate) fn polygons_from_rings<P>(
    rings: &[PolygonRing<P>],
    xy: impl Fn(&P) -> (f64, f64),
) -> Vec<Polygon<f64>> {
    let to_line = |points: &[P]| LineString::from(points.iter().map(&xy).collect::<Vec<_>>());

    let mut parts: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();
    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => parts.push((to_line(points), Vec::new())),
            PolygonRing::Inner(points) => match parts.last_mut() {
                Some((_, holes)) => holes.push(to_line(points)),
                None => warn!("inner ring before any outer ring, ignoring it"),
            },
        }
    }

    parts
        .into_iter()
        .map(|(exterior, interiors)| Polygon::new(exterior, interiors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};
    use std::fs;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<shapefile::Point> {
        vec![
            shapefile::Point::new(x0, y0),
            shapefile::Point::new(x0, y0 + size),
            shapefile::Point::new(x0 + size, y0 + size),
            shapefile::Point::new(x0 + size, y0),
            shapefile::Point::new(x0, y0),
        ]
    }

    #[test]
    fn inner_rings_become_holes_of_preceding_outer() {
        let rings = vec![
            PolygonRing::Outer(square(0.0, 0.0, 10.0)),
            PolygonRing::Inner(square(4.0, 4.0, 2.0)),
            PolygonRing::Outer(square(20.0, 0.0, 5.0)),
        ];

        let polygons = polygons_from_rings(&rings, |pt| (pt.x, pt.y));

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].interiors().len(), 1);
        assert!(polygons[1].interiors().is_empty());
        assert!(polygons[0].contains(&Point::new(1.0, 1.0)));
        assert!(!polygons[0].contains(&Point::new(5.0, 5.0)));
        assert!(polygons[1].contains(&Point::new(22.0, 2.0)));
    }

    #[test]
    fn orphan_inner_ring_is_ignored() {
        let rings = vec![PolygonRing::Inner(square(0.0, 0.0, 1.0))];
        assert!(polygons_from_rings(&rings, |pt| (pt.x, pt.y)).is_empty());
    }

    #[test]
    fn missing_file_is_a_data_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.shp");

        match load_boundary_polygons(&path) {
            Err(Error::DataLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_is_a_data_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.shp");
        fs::write(&path, b"this is not a shapefile").unwrap();
        fs::write(dir.path().join("garbage.dbf"), b"nor is this a dbase table").unwrap();

        assert!(matches!(
            load_boundary_polygons(&path),
            Err(Error::DataLoad { .. })
        ));
    }
}
