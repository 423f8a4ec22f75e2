use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::MeshFailure;
use crate::math::Point2;

/// Triangles over an indexed planar vertex set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarTriangulation {
    /// Distinct vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangles as indices into `vertices`, in enumeration order.
    pub triangles: Vec<[usize; 3]>,
}

/// A 2D Delaunay triangulation backend.
///
/// Implementations must be deterministic: the same input slice must always
/// produce the same vertices and triangles in the same order, because the
/// mesher derives vertex IDs from that order.
pub trait Triangulator {
    /// Triangulates the given points.
    ///
    /// # Errors
    ///
    /// Returns the reason no triangulation exists for the input.
    fn triangulate(&self, points: &[Point2]) -> Result<PlanarTriangulation, MeshFailure>;
}

/// Incremental Delaunay triangulation backed by `spade`.
///
/// Points are inserted in input order; repeated positions collapse into one
/// vertex. Triangles are enumerated in spade's inner-face index order, each
/// with its vertices counter-clockwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeTriangulator;

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, points: &[Point2]) -> Result<PlanarTriangulation, MeshFailure> {
        let mut dt = DelaunayTriangulation::<SpadePoint2<f64>>::new();
        for p in points {
            dt.insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e| invalid_coordinate(p, &e))?;
        }

        if dt.num_vertices() < 3 {
            return Err(MeshFailure::TooFewPoints {
                found: dt.num_vertices(),
            });
        }
        if dt.num_inner_faces() == 0 {
            return Err(MeshFailure::Collinear);
        }

        let vertices = dt
            .vertices()
            .map(|v| {
                let pos = v.position();
                Point2::new(pos.x, pos.y)
            })
            .collect();
        let triangles = dt
            .inner_faces()
            .map(|face| face.vertices().map(|vh| vh.fix().index()))
            .collect();

        Ok(PlanarTriangulation {
            vertices,
            triangles,
        })
    }
}

fn invalid_coordinate(p: &Point2, err: &InsertionError) -> MeshFailure {
    MeshFailure::InvalidCoordinate(format!("({}, {}): {err:?}", p.x, p.y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_splits_into_two_triangles() {
        let tri = SpadeTriangulator
            .triangulate(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
            .unwrap();
        assert_eq!(tri.vertices.len(), 4);
        assert_eq!(tri.triangles.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let tri = SpadeTriangulator
            .triangulate(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)])
            .unwrap();
        assert_eq!(tri.vertices.len(), 3);
        assert_eq!(tri.triangles.len(), 1);
    }

    #[test]
    fn two_points_are_too_few() {
        let err = SpadeTriangulator
            .triangulate(&[p(0.0, 0.0), p(1.0, 0.0)])
            .unwrap_err();
        assert_eq!(err, MeshFailure::TooFewPoints { found: 2 });
    }

    #[test]
    fn collinear_points_have_no_faces() {
        let err = SpadeTriangulator
            .triangulate(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)])
            .unwrap_err();
        assert_eq!(err, MeshFailure::Collinear);
    }

    #[test]
    fn nan_is_an_invalid_coordinate() {
        let err = SpadeTriangulator
            .triangulate(&[p(0.0, 0.0), p(f64::NAN, 1.0), p(2.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, MeshFailure::InvalidCoordinate(_)));
    }

    #[test]
    fn empty_circumcircles() {
        let pts: Vec<Point2> = (0..6)
            .flat_map(|i| (0..5).map(move |j| (f64::from(i), f64::from(j))))
            .map(|(i, j)| p(i * 1.3 + 0.17 * j * j, j * 0.9 + 0.11 * i * i))
            .collect();
        let tri = SpadeTriangulator.triangulate(&pts).unwrap();
        for [a, b, c] in &tri.triangles {
            let (a, b, c) = (tri.vertices[*a], tri.vertices[*b], tri.vertices[*c]);
            for q in &tri.vertices {
                assert!(!strictly_in_circumcircle(&a, &b, &c, q));
            }
        }
    }

    /// Classic incircle determinant for a counter-clockwise triangle.
    fn strictly_in_circumcircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
        let (adx, ady) = (a.x - d.x, a.y - d.y);
        let (bdx, bdy) = (b.x - d.x, b.y - d.y);
        let (cdx, cdy) = (c.x - d.x, c.y - d.y);
        let det = (adx * adx + ady * ady) * (bdx * cdy - cdx * bdy)
            - (bdx * bdx + bdy * bdy) * (adx * cdy - cdx * ady)
            + (cdx * cdx + cdy * cdy) * (adx * bdy - bdx * ady);
        det > 1e-9
    }
}
