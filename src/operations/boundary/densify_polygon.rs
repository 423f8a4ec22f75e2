use crate::error::{OperationError, Result};
use crate::geometry::SpatialPoint;
use crate::math::{bounding_rect, point_in_polygon};

/// Fills the interior of a polygon with a regular grid of points.
///
/// Candidates are laid out on the polygon's bounding rectangle at
/// `(min_x + i·interval, min_y + j·interval)` for `i, j ≥ 1`, strictly below
/// the maximum on each axis, and kept when [`point_in_polygon`] accepts
/// them. Grid points have zero elevation; the mesher assigns elevation later.
pub struct DensifyPolygon<'a> {
    polygon: &'a [SpatialPoint],
    interval: f64,
}

impl<'a> DensifyPolygon<'a> {
    /// Creates a new `DensifyPolygon` operation.
    #[must_use]
    pub fn new(polygon: &'a [SpatialPoint], interval: f64) -> Self {
        Self { polygon, interval }
    }

    /// Executes the densification, returning the accepted grid points
    /// column by column (x outer, y inner).
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than 3
    /// vertices or the interval is not a positive finite number.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<SpatialPoint>> {
        if self.polygon.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "insufficient boundary points: need at least 3, got {}",
                self.polygon.len()
            ))
            .into());
        }
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "grid interval must be positive, got {}",
                self.interval
            ))
            .into());
        }
        let Some(rect) = bounding_rect(self.polygon) else {
            return Ok(Vec::new());
        };

        let mut result = Vec::new();
        let mut i = 1u32;
        loop {
            let x = rect.min_x + f64::from(i) * self.interval;
            if x >= rect.max_x {
                break;
            }
            let mut j = 1u32;
            loop {
                let y = rect.min_y + f64::from(j) * self.interval;
                if y >= rect.max_y {
                    break;
                }
                let candidate = SpatialPoint::new(x, y, 0.0);
                if point_in_polygon(self.polygon, &candidate) {
                    result.push(candidate);
                }
                j += 1;
            }
            i += 1;
        }

        tracing::debug!(
            vertices = self.polygon.len(),
            interval = self.interval,
            inserted = result.len(),
            "densified polygon"
        );
        Ok(result)
    }
}
