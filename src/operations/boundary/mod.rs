mod approximate_hull;
mod densify_polygon;

pub use approximate_hull::{ApproximateHull, HullParams, PolarSample};
pub use densify_polygon::DensifyPolygon;
