//! Mesh file I/O for Ridgeline.
//!
//! The pipeline's persistence boundary is the triangle soup, and STL is its
//! interchange format: one record per triangle, 12 floats each (a
//! placeholder normal plus three vertices). Both binary and ASCII variants
//! are written; loading detects the variant automatically.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_stl, save_stl};
//! use mesh_types::TriangleSoup;
//!
//! let soup = TriangleSoup::new();
//! save_stl(&soup, "model.stl", true).unwrap();
//!
//! let back = load_stl("model.stl").unwrap();
//! assert_eq!(back.len(), soup.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, save_stl, write_stl_ascii, write_stl_binary};
