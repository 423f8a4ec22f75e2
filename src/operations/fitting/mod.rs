mod normal_plane;
mod regression_plane;

pub use normal_plane::FitNormalPlane;
pub use regression_plane::{FitRegressionPlane, PlaneCoefficients};
