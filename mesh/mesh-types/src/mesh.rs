//! Indexed triangle mesh.

use crate::{Aabb, Triangle, TriangleSoup};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh with shared, indexed vertices.
///
/// This is the internal representation after seam welding: vertices are
/// stored once and faces reference them by index, which makes edge
/// adjacency and watertightness queries possible.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Point3};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Materialize a face as a [`Triangle`].
    ///
    /// Returns `None` if the face index is out of range.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Iterate over all faces as concrete [`Triangle`]s.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Expand the mesh back into an unindexed [`TriangleSoup`].
    ///
    /// Used at the export boundary: the external contract stays
    /// triangle-soup even though sealing works on the indexed form.
    #[must_use]
    pub fn to_soup(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(self.faces.len());
        soup.extend(self.triangles());
        soup
    }

    /// Compute the bounding box over all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the sum of signed tetrahedra volumes
    /// formed by each face and the origin. For a closed mesh with outward
    /// normals the result is positive; near-zero indicates an open mesh or
    /// inconsistent winding.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = &self.vertices[i0 as usize];
            let v1 = &self.vertices[i1 as usize];
            let v2 = &self.vertices[i2 as usize];

            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }

    /// Check whether the mesh appears inside-out (negative signed volume).
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }

    /// Flip all face normals by reversing winding order.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A closed tetrahedron with CCW winding viewed from outside.
    fn tetrahedron() -> IndexedMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.866, 0.0),
            Point3::new(0.5, 0.289, 0.816),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        IndexedMesh::from_parts(vertices, faces)
    }

    #[test]
    fn empty_mesh() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn triangle_materialization() {
        let mesh = tetrahedron();
        let tri = mesh.triangle(0).unwrap();
        assert!(tri.area() > 0.0);
        assert!(mesh.triangle(99).is_none());
    }

    #[test]
    fn tetrahedron_volume_positive() {
        let mesh = tetrahedron();
        assert!(mesh.signed_volume() > 0.0);
        assert!(!mesh.is_inside_out());
    }

    #[test]
    fn flipped_tetrahedron_is_inside_out() {
        let mut mesh = tetrahedron();
        mesh.flip_winding();
        assert!(mesh.is_inside_out());
    }

    #[test]
    fn to_soup_preserves_triangles() {
        let mesh = tetrahedron();
        let soup = mesh.to_soup();
        assert_eq!(soup.len(), mesh.face_count());
        assert_relative_eq!(
            soup.surface_area(),
            mesh.triangles().map(|t| t.area()).sum::<f64>(),
            epsilon = 1e-12
        );
    }
}
