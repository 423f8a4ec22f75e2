pub mod centroid;
pub mod distance_2d;
pub mod polygon_2d;

pub use centroid::centroid;
pub use distance_2d::min_distance_2d;
pub use polygon_2d::{bounding_rect, point_in_polygon, Aabb2};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Polygon vertices closer than this to a query point carry no direction
/// information for the containment test and are skipped.
pub const COINCIDENT_DISTANCE: f64 = 0.01;
