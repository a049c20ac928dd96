//! Mesh validation and health reporting.

use mesh_types::IndexedMesh;

use crate::adjacency::MeshAdjacency;

/// Report of a mesh's closure and quality state.
///
/// # Example
///
/// ```
/// use mesh_repair::validate;
/// use mesh_types::{IndexedMesh, Point3};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let report = validate(&mesh);
/// assert_eq!(report.boundary_edge_count, 3);
/// assert!(!report.is_watertight);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolidReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Total number of distinct edges.
    pub edge_count: usize,
    /// Edges with exactly one incident face.
    pub boundary_edge_count: usize,
    /// Edges with more than two incident faces.
    pub non_manifold_edge_count: usize,
    /// Faces with near-zero area.
    pub degenerate_face_count: usize,
    /// No boundary edges remain.
    pub is_watertight: bool,
    /// No edge has more than two incident faces.
    pub is_manifold: bool,
}

impl SolidReport {
    /// Check whether the mesh is ready for printing: closed, manifold and
    /// free of degenerate faces.
    #[must_use]
    pub fn is_printable(&self) -> bool {
        self.is_watertight && self.is_manifold && self.degenerate_face_count == 0
    }
}

impl std::fmt::Display for SolidReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vertices, {} faces, {} edges",
            self.vertex_count, self.face_count, self.edge_count
        )?;
        writeln!(
            f,
            "watertight: {}, manifold: {}",
            if self.is_watertight { "yes" } else { "no" },
            if self.is_manifold { "yes" } else { "no" },
        )?;
        if self.boundary_edge_count > 0 {
            writeln!(f, "boundary edges: {}", self.boundary_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            writeln!(f, "non-manifold edges: {}", self.non_manifold_edge_count)?;
        }
        if self.degenerate_face_count > 0 {
            writeln!(f, "degenerate faces: {}", self.degenerate_face_count)?;
        }
        Ok(())
    }
}

/// Area threshold below which a face counts as degenerate.
const DEGENERATE_AREA: f64 = 1e-12;

/// Validate a mesh and report closure, manifoldness and degeneracy.
#[must_use]
pub fn validate(mesh: &IndexedMesh) -> SolidReport {
    let adjacency = MeshAdjacency::build(&mesh.faces);

    let degenerate_face_count = mesh
        .triangles()
        .filter(|t| t.is_degenerate(DEGENERATE_AREA))
        .count();

    SolidReport {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        edge_count: adjacency.edge_count(),
        boundary_edge_count: adjacency.boundary_edge_count(),
        non_manifold_edge_count: adjacency.non_manifold_edge_count(),
        degenerate_face_count,
        is_watertight: adjacency.is_watertight(),
        is_manifold: adjacency.is_manifold(),
    }
}
