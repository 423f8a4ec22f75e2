use crate::geometry::SpatialPoint;

/// Returns the component-wise mean position of a point set.
///
/// The centroid carries no orientation (`dip` and `angle` are zero).
/// Returns `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[SpatialPoint]) -> Option<SpatialPoint> {
    if points.is_empty() {
        return None;
    }
    let (mut sx, mut sy, mut sz) = (0.0, 0.0, 0.0);
    for p in points {
        sx += p.x;
        sy += p.y;
        sz += p.z;
    }
    let n = points.len() as f64;
    Some(SpatialPoint::new(sx / n, sy / n, sz / n))
}
