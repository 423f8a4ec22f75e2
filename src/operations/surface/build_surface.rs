use crate::error::{Result, TessellationError};
use crate::geometry::SpatialPoint;
use crate::interpolation::Interpolate;
use crate::operations::boundary::{ApproximateHull, DensifyPolygon, HullParams};
use crate::tessellation::{DelaunayMesh, MeshResult};

/// Parameters of the point-cloud-to-surface pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceParams {
    /// Spacing of the interior grid inserted before meshing.
    pub grid_interval: f64,
    /// Derive the boundary with [`ApproximateHull`]; otherwise the input is
    /// taken to be an ordered boundary already.
    pub approximate_hull: bool,
    /// Sector parameters for the hull approximation.
    pub hull: HullParams,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            grid_interval: 10.0,
            approximate_hull: true,
            hull: HullParams::default(),
        }
    }
}

/// Everything the pipeline derives from one point cloud.
#[derive(Debug, Clone)]
pub struct SurfaceArtifacts {
    /// Ordered boundary ring.
    pub boundary: Vec<SpatialPoint>,
    /// Grid points inserted inside the boundary.
    pub interior: Vec<SpatialPoint>,
    /// Mesh over the input points followed by the interior points.
    pub mesh: MeshResult,
}

/// Turns a scattered point cloud into a triangulated surface.
///
/// boundary (hull approximation) → interior grid (densification) →
/// Delaunay mesh over the samples plus grid, with elevations from the
/// supplied interpolator.
pub struct BuildSurface<'a> {
    points: &'a [SpatialPoint],
    params: SurfaceParams,
}

impl<'a> BuildSurface<'a> {
    /// Creates a new `BuildSurface` operation with default parameters.
    #[must_use]
    pub fn new(points: &'a [SpatialPoint]) -> Self {
        Self {
            points,
            params: SurfaceParams::default(),
        }
    }

    /// Sets custom pipeline parameters.
    #[must_use]
    pub fn with_params(mut self, params: SurfaceParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` for a non-positive grid
    /// interval. `SurfaceParams` is checked before any boundary work, so a bad
    /// interval is reported as a configuration error rather than as the
    /// densifier's `InvalidInput`. Returns `OperationError::InvalidInput` if
    /// the boundary has fewer than 3 points, and
    /// `TessellationError::MeshUnavailable` if the combined point set cannot
    /// be triangulated.
    pub fn execute<I: Interpolate + ?Sized>(&self, interpolator: &I) -> Result<SurfaceArtifacts> {
        let interval = self.params.grid_interval;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "grid interval must be positive, got {interval}"
            ))
            .into());
        }

        let boundary = if self.params.approximate_hull {
            ApproximateHull::new(self.points)
                .with_params(self.params.hull)
                .execute()
        } else {
            self.points.to_vec()
        };
        let interior = DensifyPolygon::new(&boundary, interval).execute()?;

        let mut combined = Vec::with_capacity(self.points.len() + interior.len());
        combined.extend_from_slice(self.points);
        combined.extend_from_slice(&interior);
        let mesh = DelaunayMesh::new(&combined).execute(interpolator)?;

        tracing::debug!(
            samples = self.points.len(),
            boundary = boundary.len(),
            interior = interior.len(),
            triangles = mesh.triangle_count(),
            "built surface"
        );

        Ok(SurfaceArtifacts {
            boundary,
            interior,
            mesh,
        })
    }
}
