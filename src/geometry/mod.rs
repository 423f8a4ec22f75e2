pub mod borehole;
pub mod plane;
pub mod point;

pub use borehole::{stratum_samples, BoreMark, Borehole};
pub use plane::Plane;
pub use point::SpatialPoint;
