//! Overlap of two triangles in the plane.
//!
//! [`overlap`] clips one triangle against the other with a
//! Weiler-Atherton boundary walk and returns the counter-clockwise
//! overlap polygon, or `None` for disjoint or degenerate input.
//!
//! ```
//! use triclip::{overlap, Triangle};
//!
//! let a = Triangle::from_coords([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
//! let b = Triangle::from_coords([[1.0, 0.0], [2.0, 0.0], [2.0, 1.0]]);
//! assert_eq!(overlap(&a, &b).map(|p| p.len()), Some(3));
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TriclipError};
pub use geometry::Triangle;
pub use operations::overlap::overlap;
