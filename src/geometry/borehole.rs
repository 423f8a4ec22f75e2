use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::SpatialPoint;

/// A stratum boundary logged at some depth along a borehole.
#[derive(Debug, Clone, PartialEq)]
pub struct BoreMark {
    /// Stratum (or fault) code the mark belongs to.
    pub stratum: String,
    /// Depth below the collar.
    pub depth: f64,
    pub dip: f64,
    pub angle: f64,
}

impl BoreMark {
    /// Creates a mark with zero orientation.
    #[must_use]
    pub fn new(stratum: impl Into<String>, depth: f64) -> Self {
        Self {
            stratum: stratum.into(),
            depth,
            dip: 0.0,
            angle: 0.0,
        }
    }

    /// Sets the measured attitude of the surface at this mark.
    #[must_use]
    pub fn with_orientation(mut self, dip: f64, angle: f64) -> Self {
        self.dip = dip;
        self.angle = angle;
        self
    }
}

/// A vertical logging borehole.
///
/// Marks are positioned straight below the collar; a mark at depth `d` sits
/// at elevation `collar.z - d`.
#[derive(Debug, Clone)]
pub struct Borehole {
    id: String,
    name: String,
    collar: Point3,
    depth: f64,
    marks: Vec<BoreMark>,
}

impl Borehole {
    /// Creates a borehole from its collar position, total depth and marks.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the depth is negative
    /// or not finite, or if any mark lies outside `[0, depth]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        collar: Point3,
        depth: f64,
        marks: Vec<BoreMark>,
    ) -> Result<Self> {
        if !depth.is_finite() || depth < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "depth",
                value: depth,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        for mark in &marks {
            if !(0.0..=depth).contains(&mark.depth) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter: "mark depth",
                    value: mark.depth,
                    min: 0.0,
                    max: depth,
                }
                .into());
            }
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            collar,
            depth,
            marks,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total logged depth.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[must_use]
    pub fn marks(&self) -> &[BoreMark] {
        &self.marks
    }

    /// The collar (top of hole).
    #[must_use]
    pub fn collar_point(&self) -> SpatialPoint {
        SpatialPoint::from(self.collar)
    }

    /// The bottom of the hole.
    #[must_use]
    pub fn bottom_point(&self) -> SpatialPoint {
        SpatialPoint::new(self.collar.x, self.collar.y, self.collar.z - self.depth)
    }

    /// Position and attitude of a mark along this hole.
    #[must_use]
    pub fn mark_point(&self, mark: &BoreMark) -> SpatialPoint {
        SpatialPoint::new(self.collar.x, self.collar.y, self.collar.z - mark.depth)
            .with_orientation(mark.dip, mark.angle)
    }
}

/// Collects one sample per mark of `stratum` across all boreholes.
///
/// Samples come out in borehole order, then mark order within each hole.
#[must_use]
pub fn stratum_samples(bores: &[Borehole], stratum: &str) -> Vec<SpatialPoint> {
    bores
        .iter()
        .flat_map(|bore| {
            bore.marks
                .iter()
                .filter(|m| m.stratum == stratum)
                .map(move |m| bore.mark_point(m))
        })
        .collect()
}
