use rand::Rng;

use crate::boundary_index::Containment;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::reference_frame::BoundingEnvelope;

/// Uniform draw over the envelope, bounds included. East is drawn first.
pub fn random_point<R: Rng>(rng: &mut R, envelope: &BoundingEnvelope) -> Coordinate {
    let east = rng.random_range(envelope.min_east..=envelope.max_east);
    let north = rng.random_range(envelope.min_north..=envelope.max_north);
    Coordinate::new(east, north)
}

/// Draws candidates until `boundary` accepts one.
///
/// With `max_attempts` set to `None` this loops until a candidate is accepted.
/// Returns the accepted coordinate and the number of draws it took.
pub fn reject_until_accepted<D, C>(
    mut draw: D,
    boundary: &C,
    max_attempts: Option<u64>,
) -> Result<(Coordinate, u64)>
where
    D: FnMut() -> Coordinate,
    C: Containment + ?Sized,
{
    let mut attempts = 0u64;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(Error::SamplingExhausted { attempts });
        }
        attempts += 1;

        let candidate = draw();
        if boundary.contains(&candidate) {
            return Ok((candidate, attempts));
        }
    }
}

pub fn random_point_in_boundary<R, C>(
    rng: &mut R,
    envelope: &BoundingEnvelope,
    boundary: &C,
    max_attempts: Option<u64>,
) -> Result<(Coordinate, u64)>
where
    R: Rng,
    C: Containment + ?Sized,
{
    reject_until_accepted(|| random_point(&mut *rng, envelope), boundary, max_attempts)
}
