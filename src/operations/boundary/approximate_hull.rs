use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::geometry::SpatialPoint;
use crate::math::{centroid, TOLERANCE};

/// Parameters of the angular-sector hull heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullParams {
    bin_width: f64,
    distance_tolerance: f64,
}

impl HullParams {
    /// Creates hull parameters.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `bin_width` is not in
    /// `(0, 2π]` or `distance_tolerance` is negative or not finite.
    pub fn new(bin_width: f64, distance_tolerance: f64) -> Result<Self> {
        if !(bin_width > 0.0 && bin_width <= TAU) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "bin_width",
                value: bin_width,
                min: 0.0,
                max: TAU,
            }
            .into());
        }
        if !distance_tolerance.is_finite() || distance_tolerance < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "distance_tolerance",
                value: distance_tolerance,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self {
            bin_width,
            distance_tolerance,
        })
    }

    /// Angular width of one yaw sector, in radians.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Distances this close to a sector's maximum count as a tie.
    #[must_use]
    pub fn distance_tolerance(&self) -> f64 {
        self.distance_tolerance
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn bin_count(&self) -> usize {
        ((TAU / self.bin_width) - TOLERANCE).ceil().max(1.0) as usize
    }
}

impl Default for HullParams {
    /// 5° sectors, ties within 0.5 length units.
    fn default() -> Self {
        Self {
            bin_width: PI / 36.0,
            distance_tolerance: 0.5,
        }
    }
}

/// Polar coordinates of one input point as seen from the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarSample {
    /// Position of the point in the input slice.
    pub index: usize,
    pub distance: f64,
    pub yaw: f64,
    pub pitch: f64,
}

/// Extracts an ordered approximate boundary from an unordered point cloud.
///
/// The yaw range around the centroid is split into fixed sectors; in each
/// non-empty sector the farthest point is kept (the first one within
/// `distance_tolerance` of the maximum). Sectors are visited from yaw `-π`
/// counter-clockwise, so the result is an ordered ring.
///
/// This is a heuristic, not a convex hull: for non-star-shaped clouds a
/// sector's farthest point may lie inside the true hull. Sets of 3 or
/// fewer points are returned unchanged.
pub struct ApproximateHull<'a> {
    points: &'a [SpatialPoint],
    params: HullParams,
}

impl<'a> ApproximateHull<'a> {
    /// Creates a new `ApproximateHull` operation with default parameters.
    #[must_use]
    pub fn new(points: &'a [SpatialPoint]) -> Self {
        Self {
            points,
            params: HullParams::default(),
        }
    }

    /// Sets custom sector parameters.
    #[must_use]
    pub fn with_params(mut self, params: HullParams) -> Self {
        self.params = params;
        self
    }

    /// Distance, yaw and pitch of every input point relative to the centroid.
    #[must_use]
    pub fn polar_samples(&self) -> Vec<PolarSample> {
        let Some(center) = centroid(self.points) else {
            return Vec::new();
        };
        self.points
            .iter()
            .enumerate()
            .map(|(index, p)| PolarSample {
                index,
                distance: center.distance_to(p),
                yaw: center.yaw_to(p),
                pitch: center.pitch_to(p),
            })
            .collect()
    }

    /// Executes the approximation, returning the boundary points in sector order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn execute(&self) -> Vec<SpatialPoint> {
        if self.points.len() <= 3 {
            return self.points.to_vec();
        }

        let bin_count = self.params.bin_count();
        let mut bins: Vec<Vec<PolarSample>> = vec![Vec::new(); bin_count];
        for sample in self.polar_samples() {
            // No direction from the centroid to itself.
            if sample.distance < TOLERANCE {
                continue;
            }
            let bin = ((sample.yaw + PI) / self.params.bin_width).floor() as usize % bin_count;
            bins[bin].push(sample);
        }

        let boundary: Vec<SpatialPoint> = bins
            .iter()
            .filter_map(|bin| self.select_farthest(bin))
            .map(|sample| self.points[sample.index])
            .collect();

        tracing::debug!(
            input = self.points.len(),
            boundary = boundary.len(),
            "approximated hull"
        );
        boundary
    }

    fn select_farthest<'s>(&self, bin: &'s [PolarSample]) -> Option<&'s PolarSample> {
        let max = bin.iter().map(|s| s.distance).reduce(f64::max)?;
        bin.iter()
            .find(|s| (s.distance - max).abs() < self.params.distance_tolerance)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> SpatialPoint {
        SpatialPoint::new(x, y, z)
    }

    fn circle(count: u32, radius: f64) -> Vec<SpatialPoint> {
        (0..count)
            .map(|i| {
                let t = TAU * f64::from(i) / f64::from(count);
                p(radius * t.cos(), radius * t.sin(), 0.0)
            })
            .collect()
    }

    #[test]
    fn small_sets_are_returned_unchanged() {
        let pts = vec![p(3.0, 1.0, 0.0), p(-1.0, 0.0, 2.0), p(0.0, 0.0, 0.0)];
        assert_eq!(ApproximateHull::new(&pts).execute(), pts);
        assert!(ApproximateHull::new(&[]).execute().is_empty());
    }

    #[test]
    fn circle_keeps_one_point_per_sector() {
        let pts = circle(360, 10.0);
        let hull = ApproximateHull::new(&pts).execute();
        assert!(hull.len() <= 72);
        assert!(hull.len() >= 70);
        let center = centroid(&pts).unwrap();
        for q in &hull {
            assert_relative_eq!(center.distance_to(q), 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn boundary_is_ordered_by_increasing_yaw() {
        let pts = circle(360, 10.0);
        let center = centroid(&pts).unwrap();
        let yaws: Vec<f64> = ApproximateHull::new(&pts)
            .execute()
            .iter()
            .map(|q| center.yaw_to(q))
            .collect();
        // The sector holding yaw = π wraps into the first sector.
        let tail = &yaws[1..];
        assert!(tail.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn interior_points_are_dropped() {
        let mut pts = circle(360, 20.0);
        pts.extend([p(1.0, 1.0, 0.0), p(-3.0, 2.0, 0.0), p(5.0, -4.0, 0.0)]);
        let hull = ApproximateHull::new(&pts).execute();
        assert!(hull.iter().all(|q| q.x.hypot(q.y) > 19.0));
    }

    #[test]
    fn ties_pick_first_encountered() {
        // Same sector, distances within the 0.5 tolerance.
        let pts = vec![
            p(9.8, 0.1, 0.0),
            p(10.0, 0.2, 0.0),
            p(-10.0, -0.2, 0.0),
            p(0.0, 10.0, 0.0),
            p(0.0, -10.0, 0.0),
        ];
        let hull = ApproximateHull::new(&pts).execute();
        assert!(hull.contains(&pts[0]));
        assert!(!hull.contains(&pts[1]));
    }

    #[test]
    fn point_at_centroid_is_ignored() {
        let pts = vec![
            p(-1.0, -1.0, 0.0),
            p(1.0, -1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(-1.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
        ];
        let hull = ApproximateHull::new(&pts).execute();
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&p(0.0, 0.0, 0.0)));
        // sectors from -π: lower-left, lower-right, upper-right, upper-left
        assert_eq!(hull[0], pts[0]);
        assert_eq!(hull[3], pts[3]);
    }

    #[test]
    fn polar_samples_cover_every_point() {
        let pts = vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 2.0), p(0.0, 2.0, 0.0), p(2.0, 2.0, -2.0)];
        let samples = ApproximateHull::new(&pts).polar_samples();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[3].index, 3);
        assert_relative_eq!(samples[1].pitch, 2.0f64.atan2(2.0f64.sqrt()));
    }

    #[test]
    fn wider_sectors_give_coarser_boundary() {
        let pts = circle(360, 10.0);
        let params = HullParams::new(PI / 4.0, 0.5).unwrap();
        let hull = ApproximateHull::new(&pts).with_params(params).execute();
        assert_eq!(hull.len(), 8);
        assert_relative_eq!(params.bin_width(), PI / 4.0);
        assert_relative_eq!(params.distance_tolerance(), 0.5);
    }

    #[test]
    fn invalid_params_are_rejected() {
        assert!(HullParams::new(0.0, 0.5).is_err());
        assert!(HullParams::new(f64::NAN, 0.5).is_err());
        assert!(HullParams::new(0.1, -1.0).is_err());
    }
}
