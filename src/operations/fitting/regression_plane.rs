use crate::error::{OperationError, Result};
use crate::geometry::{Plane, SpatialPoint};
use crate::math::{centroid, Matrix3, Point3, Vector3};

/// Below this ratio of `det(M)` to the product of its diagonal the normal
/// equations are treated as singular. The matrix is a Gram matrix, so the
/// ratio is scale-free and lies in `[0, 1]`.
const SINGULAR_RATIO: f64 = 1e-12;

/// Coefficients of the regression plane `z = a·x + b·y + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PlaneCoefficients {
    /// Elevation of the plane above `(x, y)`.
    #[must_use]
    pub fn z_at(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// The plane as a root point and unit normal.
    ///
    /// The root is the plane's point above the XY origin; the normal points
    /// upwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients are not finite.
    pub fn to_plane(&self) -> Result<Plane> {
        Plane::from_normal(
            Point3::new(0.0, 0.0, self.c),
            Vector3::new(-self.a, -self.b, 1.0),
        )
    }
}

/// Least-squares plane in centroid-reduced coordinates:
/// `z - cz = a·(x - cx) + b·(y - cy) + c0`.
struct ReducedFit {
    center: SpatialPoint,
    a: f64,
    b: f64,
    c0: f64,
}

impl ReducedFit {
    fn z_at(&self, x: f64, y: f64) -> f64 {
        self.center.z + self.c0 + self.a * (x - self.center.x) + self.b * (y - self.center.y)
    }

    fn coefficients(&self) -> PlaneCoefficients {
        PlaneCoefficients {
            a: self.a,
            b: self.b,
            c: self.center.z + self.c0 - self.a * self.center.x - self.b * self.center.y,
        }
    }
}

/// Fits a least-squares regression plane `z = a·x + b·y + c` through a point set.
///
/// Sets of 3 or fewer points are returned unchanged. The normal equations are
/// built on coordinates reduced by the centroid, which keeps the system well
/// conditioned for projected survey coordinates in the millions.
pub struct FitRegressionPlane<'a> {
    points: &'a [SpatialPoint],
}

impl<'a> FitRegressionPlane<'a> {
    /// Creates a new `FitRegressionPlane` operation.
    #[must_use]
    pub fn new(points: &'a [SpatialPoint]) -> Self {
        Self { points }
    }

    /// Solves for the plane coefficients.
    ///
    /// Returns `Ok(None)` for 3 or fewer points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::ComputationFailed` if the normal equations are
    /// singular (e.g. all points collinear in the XY projection).
    pub fn coefficients(&self) -> Result<Option<PlaneCoefficients>> {
        Ok(self.solve()?.map(|fit| fit.coefficients()))
    }

    /// Executes the fit, returning the points with z replaced by the
    /// plane's elevation. Position in XY and orientation are kept.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::ComputationFailed` if the normal equations are
    /// singular.
    pub fn execute(&self) -> Result<Vec<SpatialPoint>> {
        let Some(fit) = self.solve()? else {
            return Ok(self.points.to_vec());
        };
        Ok(self
            .points
            .iter()
            .map(|p| p.with_z(fit.z_at(p.x, p.y)))
            .collect())
    }

    #[allow(clippy::cast_precision_loss, clippy::many_single_char_names)]
    fn solve(&self) -> Result<Option<ReducedFit>> {
        if self.points.len() <= 3 {
            return Ok(None);
        }
        let Some(center) = centroid(self.points) else {
            return Ok(None);
        };

        let mut sum_xx = 0.0;
        let mut sum_yy = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xz = 0.0;
        let mut sum_yz = 0.0;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_z = 0.0;
        for p in self.points {
            let x = p.x - center.x;
            let y = p.y - center.y;
            let z = p.z - center.z;
            sum_xx += x * x;
            sum_yy += y * y;
            sum_xy += x * y;
            sum_xz += x * z;
            sum_yz += y * z;
            sum_x += x;
            sum_y += y;
            sum_z += z;
        }
        let n = self.points.len() as f64;

        let m = Matrix3::new(
            sum_xx, sum_xy, sum_x, //
            sum_xy, sum_yy, sum_y, //
            sum_x, sum_y, n,
        );
        let rhs = Vector3::new(sum_xz, sum_yz, sum_z);

        let det = m.determinant();
        let diagonal = m[(0, 0)] * m[(1, 1)] * m[(2, 2)];
        if !det.is_finite() || det.abs() <= SINGULAR_RATIO * diagonal {
            return Err(OperationError::ComputationFailed(format!(
                "singular regression system for {} points (det = {det:e})",
                self.points.len()
            ))
            .into());
        }

        let solution = m.lu().solve(&rhs).ok_or_else(|| {
            OperationError::ComputationFailed("regression system has no solution".into())
        })?;

        Ok(Some(ReducedFit {
            center,
            a: solution.x,
            b: solution.y,
            c0: solution.z,
        }))
    }
}
