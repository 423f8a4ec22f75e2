use std::collections::HashMap;

use crate::error::{MeshFailure, Result};
use crate::geometry::SpatialPoint;
use crate::interpolation::Interpolate;
use crate::math::{Point2, Point3};

use super::{MeshResult, PlanarTriangulation, SpadeTriangulator, Triangulator};

/// Triangulates a point set in plan view and lifts it with an elevation model.
///
/// Input elevations are ignored; each output vertex gets `z` from the
/// interpolator. Vertex IDs are assigned in first-encounter order while
/// walking the triangles in the triangulator's enumeration order, visiting
/// each triangle's corners in order, so a fixed input always yields the same
/// IDs and triangle records.
pub struct DelaunayMesh<'a, T = SpadeTriangulator> {
    points: &'a [SpatialPoint],
    triangulator: T,
}

impl<'a> DelaunayMesh<'a> {
    /// Creates a new `DelaunayMesh` operation using the spade backend.
    #[must_use]
    pub fn new(points: &'a [SpatialPoint]) -> Self {
        Self {
            points,
            triangulator: SpadeTriangulator,
        }
    }
}

impl<'a, T: Triangulator> DelaunayMesh<'a, T> {
    /// Replaces the triangulation backend.
    #[must_use]
    pub fn with_triangulator<U: Triangulator>(self, triangulator: U) -> DelaunayMesh<'a, U> {
        DelaunayMesh {
            points: self.points,
            triangulator,
        }
    }

    /// Executes the meshing.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::MeshUnavailable` with the reason when no
    /// triangulation exists (fewer than 3 distinct points, all points
    /// collinear, non-finite coordinates) or the backend output is
    /// inconsistent. No partial mesh is returned.
    pub fn execute<I: Interpolate + ?Sized>(&self, interpolator: &I) -> Result<MeshResult> {
        let planar: Vec<Point2> = self.points.iter().map(|p| Point2::new(p.x, p.y)).collect();

        let mesh = self
            .triangulator
            .triangulate(&planar)
            .and_then(|triangulation| assign_ids(&triangulation, interpolator));

        match mesh {
            Ok(mesh) => {
                tracing::debug!(
                    points = self.points.len(),
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    "built delaunay mesh"
                );
                Ok(mesh)
            }
            Err(reason) => {
                tracing::warn!(points = self.points.len(), %reason, "mesh unavailable");
                Err(reason.into())
            }
        }
    }
}

/// Numbers vertices 1, 2, ... on first encounter and rewrites triangles as ID triples.
#[allow(clippy::cast_possible_truncation)]
fn assign_ids<I: Interpolate + ?Sized>(
    triangulation: &PlanarTriangulation,
    interpolator: &I,
) -> std::result::Result<MeshResult, MeshFailure> {
    let vertex_count = triangulation.vertices.len();
    if u32::try_from(vertex_count).is_err() {
        return Err(MeshFailure::InvalidTriangulation(format!(
            "{vertex_count} vertices exceed the ID range"
        )));
    }

    let mut ids: HashMap<usize, u32> = HashMap::new();
    let mut order: Vec<usize> = Vec::new();
    let mut triangles = Vec::with_capacity(triangulation.triangles.len());

    for (t, face) in triangulation.triangles.iter().enumerate() {
        let [a, b, c] = *face;
        if a == b || b == c || a == c {
            return Err(MeshFailure::InvalidTriangulation(format!(
                "triangle {t} repeats a vertex: {face:?}"
            )));
        }
        let mut record = [0u32; 3];
        for (slot, &v) in record.iter_mut().zip(face) {
            if v >= vertex_count {
                return Err(MeshFailure::InvalidTriangulation(format!(
                    "triangle {t} references missing vertex {v}"
                )));
            }
            *slot = *ids.entry(v).or_insert_with(|| {
                order.push(v);
                order.len() as u32
            });
        }
        triangles.push(record);
    }

    let vertices = order
        .iter()
        .map(|&v| {
            let p = triangulation.vertices[v];
            Point3::new(p.x, p.y, interpolator.z_at(p.x, p.y))
        })
        .collect();

    Ok(MeshResult {
        vertices,
        triangles,
    })
}
