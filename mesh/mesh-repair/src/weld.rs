//! Seam welding: triangle soup to indexed mesh.
//!
//! The extruder cross-references coincident coordinates only by value, so
//! its soup repeats every shared vertex. Welding collapses vertices within
//! a distance epsilon into one canonical vertex using a quantized-coordinate
//! spatial hash, producing the indexed mesh the adjacency queries need.

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, Point3, TriangleSoup};
use tracing::debug;

/// Weld a triangle soup into an indexed mesh.
///
/// Vertices closer than `epsilon` merge into the first-seen representative.
/// Faces that collapse onto fewer than three distinct vertices are dropped.
///
/// # Example
///
/// ```
/// use mesh_repair::weld_soup;
/// use mesh_types::{Point3, Triangle, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// soup.push(Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
/// soup.push(Triangle::new(
///     Point3::new(1.0, 0.0, 0.0), // shared seam, repeated by value
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
///
/// let mesh = weld_soup(&soup, 1e-6);
/// assert_eq!(mesh.vertex_count(), 4); // 6 soup vertices, 2 welded away
/// assert_eq!(mesh.face_count(), 2);
/// ```
#[must_use]
pub fn weld_soup(soup: &TriangleSoup, epsilon: f64) -> IndexedMesh {
    let cell_size = if epsilon > 0.0 { epsilon * 2.0 } else { 1e-12 };

    let mut mesh = IndexedMesh::with_capacity(soup.len() * 3, soup.len());
    // Spatial hash: quantized cell -> indices of canonical vertices in it.
    let mut cells: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();

    let mut canonical = |p: &Point3<f64>, mesh: &mut IndexedMesh| -> u32 {
        let cell = quantize(p, cell_size);

        // Probe the 3x3x3 neighborhood for an existing vertex in range.
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                    if let Some(candidates) = cells.get(&key) {
                        for &idx in candidates {
                            if (mesh.vertices[idx as usize] - *p).norm() <= epsilon {
                                return idx;
                            }
                        }
                    }
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: u32 indices support ~4 billion vertices by design.
        let idx = mesh.vertices.len() as u32;
        mesh.vertices.push(*p);
        cells.entry(cell).or_default().push(idx);
        idx
    };

    let mut dropped = 0usize;
    for tri in soup.iter() {
        let i0 = canonical(&tri.v0, &mut mesh);
        let i1 = canonical(&tri.v1, &mut mesh);
        let i2 = canonical(&tri.v2, &mut mesh);

        if i0 == i1 || i1 == i2 || i0 == i2 {
            dropped += 1;
            continue;
        }
        mesh.faces.push([i0, i1, i2]);
    }

    debug!(
        soup_vertices = soup.len() * 3,
        welded_vertices = mesh.vertex_count(),
        dropped_faces = dropped,
        "welded triangle soup"
    );

    mesh
}

/// Quantize a position into a spatial-hash cell.
#[allow(clippy::cast_possible_truncation)]
// Truncation: coordinates within +-2^63 cells, guaranteed by mesh scale.
fn quantize(p: &Point3<f64>, cell_size: f64) -> (i64, i64, i64) {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
        (p.z / cell_size).floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Triangle;

    fn quad_soup() -> TriangleSoup {
        let mut soup = TriangleSoup::new();
        soup.push(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ));
        soup.push(Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ));
        soup
    }

    #[test]
    fn welds_exact_seams() {
        let mesh = weld_soup(&quad_soup(), 1e-6);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
    }

    #[test]
    fn welds_near_coincident_vertices() {
        let mut soup = quad_soup();
        // Nudge a seam vertex by less than epsilon.
        soup.triangles[1].v0 = Point3::new(1.0 + 1e-9, 0.0, 0.0);

        let mesh = weld_soup(&soup, 1e-6);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn distinct_vertices_stay_distinct() {
        let mut soup = quad_soup();
        soup.triangles[1].v0 = Point3::new(1.5, 0.0, 0.0);

        let mesh = weld_soup(&soup, 1e-6);
        assert_eq!(mesh.vertex_count(), 5);
    }

    #[test]
    fn collapsed_faces_are_dropped() {
        let mut soup = TriangleSoup::new();
        soup.push(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e-9, 0.0, 0.0), // welds onto v0
            Point3::new(0.0, 1.0, 0.0),
        ));

        let mesh = weld_soup(&soup, 1e-6);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn empty_soup_welds_to_empty_mesh() {
        let mesh = weld_soup(&TriangleSoup::new(), 1e-6);
        assert!(mesh.is_empty());
    }
}
