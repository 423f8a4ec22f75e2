mod delaunay_mesh;
mod triangulator;

pub use delaunay_mesh::DelaunayMesh;
pub use triangulator::{PlanarTriangulation, SpadeTriangulator, Triangulator};

use crate::error::MeshFailure;
use crate::math::Point3;

/// A triangulated surface addressed by dense 1-based vertex IDs.
///
/// `vertices[i]` holds the vertex with ID `i + 1`; each triangle is a triple
/// of such IDs. This is the addressing used by `VRTX`/`TRGL` records of
/// triangulated-surface files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshResult {
    /// Vertex positions, ordered by ascending ID.
    pub vertices: Vec<Point3>,
    /// Triangles as triples of vertex IDs.
    pub triangles: Vec<[u32; 3]>,
}

impl MeshResult {
    /// Returns the vertex with the given 1-based ID.
    #[must_use]
    pub fn vertex(&self, id: u32) -> Option<&Point3> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.vertices.get(index)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterates over `(id, position)` pairs in ID order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = (u32, &Point3)> {
        (1u32..).zip(self.vertices.iter())
    }

    /// Checks the addressing invariant: every triangle references three
    /// distinct existing IDs, and every vertex is used by some triangle.
    ///
    /// # Errors
    ///
    /// Returns `MeshFailure::InvalidTriangulation` describing the first
    /// violation found.
    pub fn validate(&self) -> Result<(), MeshFailure> {
        let mut used = vec![false; self.vertices.len()];
        for (t, tri) in self.triangles.iter().enumerate() {
            let [a, b, c] = *tri;
            if a == b || b == c || a == c {
                return Err(MeshFailure::InvalidTriangulation(format!(
                    "triangle {t} repeats a vertex: {tri:?}"
                )));
            }
            for &id in tri {
                let index = id
                    .checked_sub(1)
                    .and_then(|i| usize::try_from(i).ok())
                    .filter(|&i| i < used.len());
                let Some(index) = index else {
                    return Err(MeshFailure::InvalidTriangulation(format!(
                        "triangle {t} references missing vertex {id}"
                    )));
                };
                used[index] = true;
            }
        }
        if let Some(unused) = used.iter().position(|u| !u) {
            return Err(MeshFailure::InvalidTriangulation(format!(
                "vertex {} is not referenced by any triangle",
                unused + 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quad() -> MeshResult {
        MeshResult {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            triangles: vec![[1, 2, 3], [1, 3, 4]],
        }
    }

    #[test]
    fn ids_are_one_based() {
        let mesh = quad();
        assert!(mesh.vertex(0).is_none());
        assert_eq!(mesh.vertex(1), Some(&Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(mesh.vertex(4), Some(&Point3::new(0.0, 1.0, 0.0)));
        assert!(mesh.vertex(5).is_none());
        let ids: Vec<u32> = mesh.iter_vertices().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn valid_mesh_passes() {
        let mesh = quad();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
        assert!(MeshResult::default().is_empty());
    }

    #[test]
    fn dangling_id_fails_validation() {
        let mut mesh = quad();
        mesh.triangles.push([2, 3, 9]);
        assert!(mesh.validate().is_err());
        mesh.triangles.pop();
        mesh.triangles.push([0, 1, 2]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn unused_vertex_fails_validation() {
        let mut mesh = quad();
        mesh.vertices.push(Point3::new(5.0, 5.0, 0.0));
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn repeated_id_fails_validation() {
        let mut mesh = quad();
        mesh.triangles[0] = [1, 1, 3];
        assert!(mesh.validate().is_err());
    }
}
