//! Soup sealing: the repair entry point of the pipeline.

use mesh_types::{IndexedMesh, TriangleSoup};
use tracing::{debug, info};

use crate::adjacency::MeshAdjacency;
use crate::error::{RepairError, Result};
use crate::holes::stitch_holes;
use crate::weld::weld_soup;

/// Parameters for sealing a triangle soup.
///
/// Defaults suit the extruder's grid-unit output; weld more aggressively
/// for noisier sources.
#[derive(Debug, Clone)]
pub struct SealParams {
    /// Distance threshold for vertex welding.
    pub weld_epsilon: f64,

    /// Largest boundary loop (in edges) the stitcher will close.
    pub max_stitch_edges: usize,

    /// Area threshold below which welded faces are discarded.
    pub degenerate_area_threshold: f64,
}

impl Default for SealParams {
    fn default() -> Self {
        Self {
            weld_epsilon: 1e-6,
            max_stitch_edges: 64,
            degenerate_area_threshold: 1e-12,
        }
    }
}

impl SealParams {
    /// Set the vertex welding distance threshold.
    #[must_use]
    pub const fn with_weld_epsilon(mut self, epsilon: f64) -> Self {
        self.weld_epsilon = epsilon;
        self
    }

    /// Set the largest stitchable boundary loop.
    #[must_use]
    pub const fn with_max_stitch_edges(mut self, edges: usize) -> Self {
        self.max_stitch_edges = edges;
        self
    }
}

/// Remove faces with area below `threshold`.
///
/// Returns the number of faces removed.
pub fn remove_degenerate_faces(mesh: &mut IndexedMesh, threshold: f64) -> usize {
    let before = mesh.faces.len();
    let vertices = std::mem::take(&mut mesh.vertices);

    mesh.faces.retain(|&[i0, i1, i2]| {
        let v0 = vertices[i0 as usize];
        let v1 = vertices[i1 as usize];
        let v2 = vertices[i2 as usize];
        (v1 - v0).cross(&(v2 - v0)).norm() * 0.5 >= threshold
    });

    mesh.vertices = vertices;
    before - mesh.faces.len()
}

/// Seal a triangle soup into a watertight indexed mesh.
///
/// Welds coincident vertices, drops faces that collapsed to zero area,
/// stitches small boundary loops, then checks closure.
///
/// # Errors
///
/// - [`RepairError::EmptyMesh`] for an empty soup
/// - [`RepairError::NotWatertight`] when open edges remain after
///   stitching; no partial mesh is returned
///
/// # Example
///
/// ```
/// use mesh_repair::{seal_soup, SealParams};
/// use mesh_types::{Point3, Triangle, TriangleSoup};
///
/// // A tetrahedron as four independent triangles.
/// let p0 = Point3::new(0.0, 0.0, 0.0);
/// let p1 = Point3::new(1.0, 0.0, 0.0);
/// let p2 = Point3::new(0.5, 0.866, 0.0);
/// let p3 = Point3::new(0.5, 0.289, 0.816);
///
/// let soup = TriangleSoup::from_triangles(vec![
///     Triangle::new(p0, p2, p1),
///     Triangle::new(p0, p1, p3),
///     Triangle::new(p1, p2, p3),
///     Triangle::new(p2, p0, p3),
/// ]);
///
/// let mesh = seal_soup(&soup, &SealParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// ```
pub fn seal_soup(soup: &TriangleSoup, params: &SealParams) -> Result<IndexedMesh> {
    if soup.is_empty() {
        return Err(RepairError::EmptyMesh);
    }

    let mut mesh = weld_soup(soup, params.weld_epsilon);

    let removed = remove_degenerate_faces(&mut mesh, params.degenerate_area_threshold);
    if removed > 0 {
        debug!(removed, "removed degenerate faces after welding");
    }

    let stitched = stitch_holes(&mut mesh, params.max_stitch_edges);

    let adjacency = MeshAdjacency::build(&mesh.faces);
    let boundary_edges = adjacency.boundary_edge_count();
    if boundary_edges > 0 {
        return Err(RepairError::NotWatertight { boundary_edges });
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        stitched,
        "sealed triangle soup"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Point3, Triangle};

    fn tetra_soup() -> TriangleSoup {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 0.0, 0.0);
        let p2 = Point3::new(0.5, 0.866, 0.0);
        let p3 = Point3::new(0.5, 0.289, 0.816);

        TriangleSoup::from_triangles(vec![
            Triangle::new(p0, p2, p1),
            Triangle::new(p0, p1, p3),
            Triangle::new(p1, p2, p3),
            Triangle::new(p2, p0, p3),
        ])
    }

    #[test]
    fn seals_closed_soup() {
        let mesh = seal_soup(&tetra_soup(), &SealParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn stitches_missing_face() {
        let mut soup = tetra_soup();
        soup.triangles.pop();

        let mesh = seal_soup(&soup, &SealParams::default()).unwrap();
        assert_eq!(mesh.face_count(), 4); // 3 kept + 1 stitched
    }

    #[test]
    fn empty_soup_fails() {
        assert_eq!(
            seal_soup(&TriangleSoup::new(), &SealParams::default()),
            Err(RepairError::EmptyMesh)
        );
    }

    #[test]
    fn unstitchable_gap_fails() {
        let mut soup = tetra_soup();
        soup.triangles.pop();

        let params = SealParams::default().with_max_stitch_edges(2);
        assert!(matches!(
            seal_soup(&soup, &params),
            Err(RepairError::NotWatertight { boundary_edges: 3 })
        ));
    }

    #[test]
    fn degenerate_faces_are_removed() {
        let mut mesh = IndexedMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 1, 3]],
        );

        let removed = remove_degenerate_faces(&mut mesh, 1e-9);
        assert_eq!(removed, 1);
        assert_eq!(mesh.face_count(), 1);
    }
}
