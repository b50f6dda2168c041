//! Uniformly distributed random coordinates inside the Swiss national
//! boundary, and point-in-boundary checks for arbitrary coordinates.

mod boundary_index;
pub use boundary_index::{BoundaryIndex, Containment};

pub mod config;

mod coordinate;
pub use coordinate::Coordinate;

mod error;
pub use error::{Error, Result};

mod extrema;
pub use extrema::Extrema;

mod generate_point;
pub use generate_point::{random_point, random_point_in_boundary, reject_until_accepted};

mod load_boundary;
pub use load_boundary::load_boundary_polygons;

mod map_link;
pub use map_link::MapLink;

mod reference_frame;
pub use reference_frame::{BoundingEnvelope, ReferenceFrame};

mod sampler;
pub use sampler::CoordinateSampler;
