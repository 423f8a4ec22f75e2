use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Plane, SpatialPoint};
use crate::math::{centroid, Vector3};

/// Triples whose edge vectors span a sine below this are treated as collinear.
const COLLINEAR_SINE: f64 = 1e-9;

/// Approximates the plane of an ordered point list by averaging triangle normals.
///
/// The root point is the centroid. Every unordered triple of points yields a
/// candidate normal `(p2 - p1) × (p3 - p1)`; candidates are flipped to agree
/// with the first non-degenerate one, averaged, and normalized. Unlike the
/// regression fit this handles vertical and non-function-shaped point sets,
/// at `O(n³)` cost.
///
/// A trailing point equal to the first (a closed ring) is dropped.
pub struct FitNormalPlane<'a> {
    points: &'a [SpatialPoint],
}

impl<'a> FitNormalPlane<'a> {
    /// Creates a new `FitNormalPlane` operation.
    #[must_use]
    pub fn new(points: &'a [SpatialPoint]) -> Self {
        Self { points }
    }

    /// Executes the fit, returning the plane.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for fewer than 3 distinct ring
    /// points, or `GeometryError::Degenerate` if every triple is collinear.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Plane> {
        let points = open_ring(self.points);
        let n = points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "plane needs at least 3 points, got {n}"
            ))
            .into());
        }
        let Some(root) = centroid(points) else {
            return Err(OperationError::InvalidInput("empty point set".into()).into());
        };

        let mut reference: Option<Vector3> = None;
        let mut sum = Vector3::zeros();
        let mut count = 0usize;
        for i in 0..n - 2 {
            let p1 = points[i].position();
            for j in i + 1..n - 1 {
                let p2 = points[j].position();
                let e1 = p2 - p1;
                for p3 in &points[j + 1..] {
                    let e2 = p3.position() - p1;
                    let mut normal = e1.cross(&e2);
                    if normal.norm() <= COLLINEAR_SINE * e1.norm() * e2.norm() {
                        continue;
                    }
                    match reference {
                        None => reference = Some(normal),
                        Some(first) => {
                            if normal.angle(&first) > FRAC_PI_2 {
                                normal = -normal;
                            }
                        }
                    }
                    sum += normal;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return Err(GeometryError::Degenerate("all point triples are collinear".into()).into());
        }
        let average = sum / count as f64;
        Plane::from_normal(root.position(), average)
    }
}

/// Drops a closing point that repeats the first one.
fn open_ring(points: &[SpatialPoint]) -> &[SpatialPoint] {
    match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    }
}
