use std::fmt;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::boundary_index::BoundaryIndex;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::generate_point::random_point_in_boundary;
use crate::reference_frame::{BoundingEnvelope, ReferenceFrame};

/// Generates coordinates uniformly distributed over a boundary by rejection
/// sampling its reference frame's bounding envelope.
///
/// The sampler only borrows the boundary, so one loaded [`BoundaryIndex`] can
/// back any number of samplers, including samplers on other threads.
#[derive(Debug)]
pub struct CoordinateSampler<'a, R = ThreadRng> {
    boundary: &'a BoundaryIndex,
    frame: ReferenceFrame,
    current: Coordinate,
    rng: R,
    max_attempts: Option<u64>,
}

impl<'a> CoordinateSampler<'a, ThreadRng> {
    pub fn new(boundary: &'a BoundaryIndex) -> Self {
        Self::with_rng(boundary, rand::rng())
    }
}

impl<'a, R: Rng> CoordinateSampler<'a, R> {
    pub fn with_rng(boundary: &'a BoundaryIndex, rng: R) -> Self {
        Self {
            boundary,
            frame: ReferenceFrame::default(),
            current: Coordinate::default(),
            rng,
            max_attempts: None,
        }
    }

    /// Gives up after `max_attempts` rejected candidates instead of looping
    /// until one is accepted.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Starts from `coordinate` instead of the origin.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.current = coordinate;
        self
    }

    /// Selects the frame by name. `None` or an empty name selects LV95. On
    /// error the previous frame stays active.
    pub fn set_reference_frame(&mut self, name: Option<&str>) -> Result<()> {
        self.frame = ReferenceFrame::parse(name)?;
        Ok(())
    }

    pub fn reference_frame(&self) -> ReferenceFrame {
        self.frame
    }

    pub fn bounding_envelope(&self) -> BoundingEnvelope {
        self.frame.envelope()
    }

    pub fn generate(&mut self) -> Result<Coordinate> {
        let envelope = self.frame.envelope();
        let (coordinate, attempts) =
            random_point_in_boundary(&mut self.rng, &envelope, self.boundary, self.max_attempts)?;
        debug!("accepted {coordinate} after {attempts} draws");

        self.current = coordinate;
        Ok(coordinate)
    }

    pub fn current_coordinate(&self) -> Coordinate {
        self.current
    }

    pub fn check_containment(&self, coordinate: &Coordinate) -> bool {
        self.boundary.contains(coordinate)
    }
}

impl<R> fmt::Display for CoordinateSampler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.frame, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use geo::{LineString, Polygon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // A block in the middle of the LV95 envelope with a lake cut out of it.
    fn boundary() -> BoundaryIndex {
        let exterior = LineString::from(vec![
            (2_600_000.0, 1_150_000.0),
            (2_700_000.0, 1_150_000.0),
            (2_700_000.0, 1_250_000.0),
            (2_600_000.0, 1_250_000.0),
            (2_600_000.0, 1_150_000.0),
        ]);
        let lake = LineString::from(vec![
            (2_640_000.0, 1_190_000.0),
            (2_660_000.0, 1_190_000.0),
            (2_660_000.0, 1_210_000.0),
            (2_640_000.0, 1_210_000.0),
            (2_640_000.0, 1_190_000.0),
        ]);
        BoundaryIndex::from_polygons(vec![Polygon::new(exterior, vec![lake])]).unwrap()
    }

    #[test]
    fn starts_at_origin_in_lv95() {
        let boundary = boundary();
        let sampler = CoordinateSampler::new(&boundary);
        assert_eq!(sampler.reference_frame(), ReferenceFrame::Lv95);
        assert_eq!(sampler.current_coordinate(), Coordinate::new(0.0, 0.0));
        assert_eq!(sampler.to_string(), "LV95: 0, 0");
    }

    #[test]
    fn generated_points_are_inside() {
        let boundary = boundary();
        let mut sampler = CoordinateSampler::with_rng(&boundary, StdRng::seed_from_u64(1));
        let envelope = sampler.bounding_envelope();

        for _ in 0..500 {
            let c = sampler.generate().unwrap();
            assert!(sampler.check_containment(&c));
            assert!(envelope.contains(c.east, c.north));
            assert_eq!(sampler.current_coordinate(), c);
            assert!(!(2_640_000.0..=2_660_000.0).contains(&c.east)
                || !(1_190_000.0..=1_210_000.0).contains(&c.north));
        }
    }

    #[test]
    fn frame_names_are_normalised() {
        let boundary = boundary();
        let mut sampler = CoordinateSampler::new(&boundary);
        let lv95 = sampler.bounding_envelope();

        for name in [None, Some(""), Some("lv95"), Some("LV95")] {
            sampler.set_reference_frame(name).unwrap();
            assert_eq!(sampler.reference_frame(), ReferenceFrame::Lv95);
            assert_eq!(sampler.bounding_envelope(), lv95);
        }
    }

    #[test]
    fn unsupported_frame_keeps_previous() {
        let boundary = boundary();
        let mut sampler = CoordinateSampler::new(&boundary);

        let err = sampler.set_reference_frame(Some("LV03")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFrame { .. }));
        assert!(err.to_string().contains("LV03"));
        assert!(err.to_string().contains("LV95"));
        assert_eq!(sampler.reference_frame(), ReferenceFrame::Lv95);
    }

    #[test]
    fn outside_envelope_is_outside() {
        let boundary = boundary();
        let sampler = CoordinateSampler::new(&boundary);
        let env = sampler.bounding_envelope();
        let c = Coordinate::new(env.min_east - 1000.0, env.min_north - 1000.0);
        assert!(!sampler.check_containment(&c));
    }

    #[test]
    fn exhausted_sampler_keeps_its_coordinate() {
        let tiny = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![],
        );
        let boundary = BoundaryIndex::from_polygons(vec![tiny]).unwrap();
        let start = Coordinate::new(2_600_000.0, 1_200_000.0);
        let mut sampler = CoordinateSampler::with_rng(&boundary, StdRng::seed_from_u64(3))
            .with_coordinate(start)
            .with_max_attempts(100);

        match sampler.generate() {
            Err(Error::SamplingExhausted { attempts }) => assert_eq!(attempts, 100),
            other => panic!("expected SamplingExhausted, got {other:?}"),
        }
        assert_eq!(sampler.current_coordinate(), start);
    }

    #[test]
    fn samplers_share_a_boundary_across_threads() {
        let boundary = boundary();
        std::thread::scope(|s| {
            for seed in 0..4 {
                let boundary = &boundary;
                s.spawn(move || {
                    let mut sampler =
                        CoordinateSampler::with_rng(boundary, StdRng::seed_from_u64(seed));
                    for _ in 0..50 {
                        let c = sampler.generate().unwrap();
                        assert!(boundary.contains(&c));
                    }
                });
            }
        });
    }
}
