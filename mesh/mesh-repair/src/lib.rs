//! Mesh sealing and validation for Ridgeline.
//!
//! The extruder hands this crate an unindexed triangle soup that may
//! contain duplicate vertices at shared seams, zero-area flaps where the
//! silhouette collapsed, and small boundary gaps from floating-point
//! rounding at grid-cell corners. Sealing turns it into an indexed mesh
//! that is queryable for watertightness:
//!
//! - [`weld_soup`] - quantized-coordinate vertex welding (spatial hash)
//! - [`MeshAdjacency`] - edge-to-face incidence and closure queries
//! - [`stitch_holes`] - fan-fills small boundary loops (exact seams only;
//!   large gaps are reported, not invented over)
//! - [`validate`] / [`SolidReport`] - closure and quality reporting
//! - [`seal_soup`] - the orchestration used by the pipeline
//!
//! # Example
//!
//! ```
//! use mesh_repair::{seal_soup, validate, SealParams};
//! use mesh_types::{Point3, Triangle, TriangleSoup};
//!
//! let p0 = Point3::new(0.0, 0.0, 0.0);
//! let p1 = Point3::new(1.0, 0.0, 0.0);
//! let p2 = Point3::new(0.5, 0.866, 0.0);
//! let p3 = Point3::new(0.5, 0.289, 0.816);
//!
//! let soup = TriangleSoup::from_triangles(vec![
//!     Triangle::new(p0, p2, p1),
//!     Triangle::new(p0, p1, p3),
//!     Triangle::new(p1, p2, p3),
//!     Triangle::new(p2, p0, p3),
//! ]);
//!
//! let mesh = seal_soup(&soup, &SealParams::default()).unwrap();
//! assert!(validate(&mesh).is_watertight);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod error;
mod holes;
mod seal;
mod validate;
mod weld;

pub use adjacency::MeshAdjacency;
pub use error::{RepairError, Result};
pub use holes::{stitch_holes, trace_boundary_loops, BoundaryLoop};
pub use seal::{remove_degenerate_faces, seal_soup, SealParams};
pub use validate::{validate, SolidReport};
pub use weld::weld_soup;
