mod inverse_distance;

pub use inverse_distance::InverseDistanceWeighting;

use crate::operations::fitting::PlaneCoefficients;

/// Elevation model queried by the mesher, once per output vertex.
pub trait Interpolate {
    /// Elevation at the horizontal location `(x, y)`.
    fn z_at(&self, x: f64, y: f64) -> f64;
}

impl<F> Interpolate for F
where
    F: Fn(f64, f64) -> f64,
{
    fn z_at(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

impl Interpolate for PlaneCoefficients {
    fn z_at(&self, x: f64, y: f64) -> f64 {
        PlaneCoefficients::z_at(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample<I: Interpolate>(model: &I) -> f64 {
        model.z_at(2.0, 3.0)
    }

    #[test]
    fn closures_are_interpolators() {
        assert_eq!(sample(&|x: f64, y: f64| x * y), 6.0);
    }

    #[test]
    fn regression_plane_is_an_interpolator() {
        let plane = PlaneCoefficients { a: 1.0, b: -1.0, c: 10.0 };
        assert_eq!(sample(&plane), 9.0);
    }
}
