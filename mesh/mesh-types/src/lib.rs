//! Core mesh types for Ridgeline.
//!
//! This crate provides the foundational types shared by the extrusion,
//! repair and I/O stages:
//!
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`TriangleSoup`] - An unindexed triangle list (the external contract)
//! - [`IndexedMesh`] - A triangle mesh with shared, indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Soup vs. indexed
//!
//! The pipeline emits an unindexed [`TriangleSoup`]: coincident vertices are
//! repeated by value, which is what STL stores and what the extruder
//! naturally produces. Seam welding in `mesh-repair` converts a soup into an
//! [`IndexedMesh`], the representation used for adjacency and watertightness
//! queries.
//!
//! # Units and coordinates
//!
//! All coordinates are `f64` and unit-agnostic. The coordinate system is
//! right-handed with Z up. Face winding is **counter-clockwise when viewed
//! from outside**; normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, Point3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod mesh;
mod soup;
mod triangle;

pub use bounds::Aabb;
pub use mesh::IndexedMesh;
pub use soup::TriangleSoup;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
