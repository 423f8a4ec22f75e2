use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::SpatialPoint;
use crate::math::distance_2d::nearest_index_2d;
use crate::math::TOLERANCE;

use super::Interpolate;

/// Inverse-distance-weighted elevation from scattered samples.
///
/// `z(x, y) = Σ wᵢ·zᵢ / Σ wᵢ` with `wᵢ = 1 / dᵢ^power` over horizontal
/// distances. A query within [`TOLERANCE`] of a sample returns that
/// sample's elevation.
#[derive(Debug, Clone)]
pub struct InverseDistanceWeighting {
    samples: Vec<SpatialPoint>,
    power: f64,
}

impl InverseDistanceWeighting {
    /// Creates an interpolator with the customary power of 2.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are no samples.
    pub fn new(samples: Vec<SpatialPoint>) -> Result<Self> {
        if samples.is_empty() {
            return Err(OperationError::InvalidInput(
                "inverse distance weighting needs at least one sample".into(),
            )
            .into());
        }
        Ok(Self {
            samples,
            power: 2.0,
        })
    }

    /// Sets the distance exponent.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `power` is not positive
    /// and finite.
    pub fn with_power(mut self, power: f64) -> Result<Self> {
        if !(power.is_finite() && power > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "power",
                value: power,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        self.power = power;
        Ok(self)
    }

    #[must_use]
    pub fn samples(&self) -> &[SpatialPoint] {
        &self.samples
    }
}

impl Interpolate for InverseDistanceWeighting {
    fn z_at(&self, x: f64, y: f64) -> f64 {
        if let Some(nearest) = nearest_index_2d(x, y, &self.samples).map(|i| &self.samples[i]) {
            if (x - nearest.x).hypot(y - nearest.y) < TOLERANCE {
                return nearest.z;
            }
        }
        let mut weighted = 0.0;
        let mut total = 0.0;
        for s in &self.samples {
            let d = (x - s.x).hypot(y - s.y);
            let w = d.powf(self.power).recip();
            weighted += w * s.z;
            total += w;
        }
        weighted / total
    }
}
