use crate::math::Point3;

/// A survey point: a 3D position plus the orientation measured at it.
///
/// `dip` and `angle` describe the attitude of the sampled surface (marker
/// dip and dip direction) and default to zero. Equality is exact on all
/// five fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpatialPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub dip: f64,
    pub angle: f64,
}

impl SpatialPoint {
    /// Creates a point with zero orientation.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            dip: 0.0,
            angle: 0.0,
        }
    }

    /// Returns a copy of this point carrying the given orientation.
    #[must_use]
    pub fn with_orientation(mut self, dip: f64, angle: f64) -> Self {
        self.dip = dip;
        self.angle = angle;
        self
    }

    /// Returns a copy of this point with its elevation replaced.
    #[must_use]
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// The position as an nalgebra point.
    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance in 3D.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance in the XY plane.
    #[must_use]
    pub fn horizontal_distance_to(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Horizontal azimuth towards `other`, counter-clockwise from +X, in `(-π, π]`.
    ///
    /// Meaningless when the two points share the same XY position.
    #[must_use]
    pub fn yaw_to(&self, other: &Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Elevation angle towards `other`, zero at horizontal, in `[-π/2, π/2]`.
    ///
    /// Meaningless when the two points coincide.
    #[must_use]
    pub fn pitch_to(&self, other: &Self) -> f64 {
        let horizontal = self.horizontal_distance_to(other);
        (other.z - self.z).atan2(horizontal)
    }
}

impl From<Point3> for SpatialPoint {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
