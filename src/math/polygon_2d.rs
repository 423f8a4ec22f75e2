use std::f64::consts::FRAC_PI_2;

use super::{Point3, Vector3, COINCIDENT_DISTANCE, TOLERANCE};
use crate::geometry::SpatialPoint;

/// An axis-aligned rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb2 {
    /// Width along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Computes the XY bounding rectangle of a point set, or `None` if it is empty.
#[must_use]
pub fn bounding_rect(points: &[SpatialPoint]) -> Option<Aabb2> {
    let first = points.first()?;
    let mut rect = Aabb2 {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for p in &points[1..] {
        rect.min_x = rect.min_x.min(p.x);
        rect.min_y = rect.min_y.min(p.y);
        rect.max_x = rect.max_x.max(p.x);
        rect.max_y = rect.max_y.max(p.y);
    }
    Some(rect)
}

/// Rotational-consistency containment test in the XY plane.
///
/// Both the query and the polygon are flattened onto `z = 0`. Unit vectors
/// from the query to each vertex are formed (vertices within
/// [`COINCIDENT_DISTANCE`] of the query are skipped), and the cross products
/// of consecutive vectors, including the closing pair, must all lie within
/// 90° of the first one. Parallel consecutive vectors carry no turn and are
/// ignored.
///
/// Reliable for convex polygons and polygons that are star-shaped from the
/// query. Strong concavities can be misclassified. Polygons with fewer than
/// 3 vertices contain nothing.
#[must_use]
pub fn point_in_polygon(polygon: &[SpatialPoint], query: &SpatialPoint) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let origin = Point3::new(query.x, query.y, 0.0);
    let directions: Vec<Vector3> = polygon
        .iter()
        .filter_map(|v| {
            let d = Point3::new(v.x, v.y, 0.0) - origin;
            let len = d.norm();
            (len >= COINCIDENT_DISTANCE).then_some(d / len)
        })
        .collect();
    if directions.len() < 2 {
        return false;
    }

    let n = directions.len();
    let mut reference: Option<Vector3> = None;
    for i in 0..n {
        let turn = directions[i].cross(&directions[(i + 1) % n]);
        if turn.norm() < TOLERANCE {
            continue;
        }
        match reference {
            None => reference = Some(turn),
            Some(first) => {
                if first.angle(&turn) >= FRAC_PI_2 {
                    return false;
                }
            }
        }
    }
    reference.is_some()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> SpatialPoint {
        SpatialPoint::new(x, y, 0.0)
    }

    fn unit_square() -> Vec<SpatialPoint> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    // ── bounding_rect ──

    #[test]
    fn bounding_rect_of_empty_set() {
        assert!(bounding_rect(&[]).is_none());
    }

    #[test]
    fn bounding_rect_of_triangle() {
        let rect = bounding_rect(&[p(2.0, -1.0), p(5.0, 3.0), p(-1.0, 0.5)]).unwrap();
        assert_eq!(rect.min_x, -1.0);
        assert_eq!(rect.max_x, 5.0);
        assert_eq!(rect.min_y, -1.0);
        assert_eq!(rect.max_y, 3.0);
        assert!((rect.width() - 6.0).abs() < TOLERANCE);
        assert!((rect.height() - 4.0).abs() < TOLERANCE);
    }

    // ── point_in_polygon ──

    #[test]
    fn centre_of_square_is_inside() {
        assert!(point_in_polygon(&unit_square(), &p(0.5, 0.5)));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!point_in_polygon(&unit_square(), &p(2.0, 2.0)));
    }

    #[test]
    fn clockwise_square_gives_same_answer() {
        let mut sq = unit_square();
        sq.reverse();
        assert!(point_in_polygon(&sq, &p(0.25, 0.75)));
        assert!(!point_in_polygon(&sq, &p(-0.5, 0.5)));
    }

    #[test]
    fn query_elevation_is_ignored() {
        let q = SpatialPoint::new(0.5, 0.5, 1000.0);
        let raised: Vec<_> = unit_square()
            .into_iter()
            .map(|v| SpatialPoint::new(v.x, v.y, -50.0))
            .collect();
        assert!(point_in_polygon(&raised, &q));
    }

    #[test]
    fn query_next_to_vertex_does_not_panic() {
        let _ = point_in_polygon(&unit_square(), &p(0.005, 0.005));
        let _ = point_in_polygon(&unit_square(), &p(0.0, 0.0));
    }

    #[test]
    fn outside_across_closing_edge() {
        let tri = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(point_in_polygon(&tri, &p(0.2, 0.2)));
        assert!(!point_in_polygon(&tri, &p(-0.5, 0.3)));
        assert!(!point_in_polygon(&tri, &p(0.6, 0.6)));
    }

    #[test]
    fn repeated_closing_vertex_is_harmless() {
        let mut sq = unit_square();
        sq.push(p(0.0, 0.0));
        assert!(point_in_polygon(&sq, &p(0.5, 0.5)));
        assert!(!point_in_polygon(&sq, &p(1.5, 0.5)));
    }

    #[test]
    fn fewer_than_three_vertices_contain_nothing() {
        assert!(!point_in_polygon(&[p(0.0, 0.0), p(1.0, 1.0)], &p(0.5, 0.5)));
        assert!(!point_in_polygon(&[], &p(0.0, 0.0)));
    }
}
