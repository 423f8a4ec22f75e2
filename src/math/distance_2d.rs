use crate::geometry::SpatialPoint;

/// Returns the minimum horizontal distance from `(x, y)` to any point of the set.
///
/// Elevation is ignored. Returns `f64::INFINITY` for an empty set.
#[must_use]
pub fn min_distance_2d(x: f64, y: f64, points: &[SpatialPoint]) -> f64 {
    points
        .iter()
        .map(|p| ((x - p.x).powi(2) + (y - p.y).powi(2)).sqrt())
        .fold(f64::INFINITY, f64::min)
}

/// Returns the index of the point nearest to `(x, y)` in the XY plane.
#[must_use]
pub fn nearest_index_2d(x: f64, y: f64, points: &[SpatialPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = (x - p.x).powi(2) + (y - p.y).powi(2);
        let closer = match best {
            Some((_, bd)) => d < bd,
            None => true,
        };
        if closer {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
