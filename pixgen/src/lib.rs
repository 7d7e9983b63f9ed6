//! pixgen - Discrete rasterization for Rust
//!
//! Converts continuous geometric primitives into integer pixel lists.
//!
//! # Overview
//!
//! - Lines with Naive, DDA or Bresenham stepping
//! - Polygons closed by proximity of the last vertex to the first
//! - Midpoint circles and axis-aligned midpoint ellipses
//! - Bezier and uniform cubic B-spline curves
//! - Translation, rotation and scaling of parameter lists
//! - Segment clipping with Cohen-Sutherland or Liang-Barsky
//!
//! # Example
//!
//! ```
//! use pixgen::{LineAlgorithm, Pta};
//!
//! let params = Pta::from_pairs(&[(0, 0), (5, 2)]);
//! let pixels = pixgen::draw::draw_line(&params, LineAlgorithm::Bresenham).unwrap();
//! assert_eq!(pixels.len(), 6);
//!
//! let moved = pixgen::transform::translate(&pixels, 10, 10);
//! assert_eq!(moved.first(), Some(pixgen::Point::new(10, 10)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixgen_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use pixgen_draw as draw;
pub use pixgen_transform as transform;
