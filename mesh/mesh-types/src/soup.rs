//! Unindexed triangle soup.

use crate::{Aabb, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unindexed list of triangles.
///
/// This is the external contract of the extrusion pipeline: each triangle
/// carries its own vertex positions, coincident vertices at seams are
/// repeated by value, and no shared-vertex indexing exists. STL stores
/// exactly this representation.
///
/// Seam welding (`mesh-repair`) turns a soup into an
/// [`IndexedMesh`](crate::IndexedMesh) when adjacency queries are needed.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, TriangleSoup, Point3};
///
/// let mut soup = TriangleSoup::new();
/// soup.push(Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
///
/// assert_eq!(soup.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// The triangles, in emission order.
    pub triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create a soup with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a soup from an existing triangle list.
    #[inline]
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Append a triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check whether the soup contains no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate over the triangles.
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Compute the bounding box over all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for tri in &self.triangles {
            aabb.extend(&tri.v0);
            aabb.extend(&tri.v1);
            aabb.extend(&tri.v2);
        }
        aabb
    }

    /// Total surface area of all triangles.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

impl Extend<Triangle> for TriangleSoup {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TriangleSoup {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
