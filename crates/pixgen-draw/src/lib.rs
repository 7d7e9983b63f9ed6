//! pixgen-draw - Rasterizers for pixgen
//!
//! This crate converts geometric primitives into pixel lists:
//!
//! - Lines (Naive, DDA, Bresenham)
//! - Polygons, closed when the last vertex lands near the first
//! - Circles (midpoint, one octant plus reflections)
//! - Ellipses (two-region midpoint, one quadrant plus reflections)
//! - Curves (Bezier, uniform cubic B-spline)
//!
//! Each rasterizer has a `*_pta` function over typed arguments and a
//! `draw_*` function over a raw parameter list, which validates its shape
//! first. [`rasterize`] dispatches a validated [`pixgen_core::Primitive`].

pub mod circle;
pub mod curve;
pub mod ellipse;
mod error;
pub mod line;
pub mod polygon;
pub mod primitive;

pub use circle::{circle_pta, draw_circle};
pub use curve::{curve_pta, draw_curve, draw_curve_with_options};
pub use ellipse::{draw_ellipse, ellipse_pta};
pub use error::{DrawError, DrawResult};
pub use line::{draw_line, line_pta};
pub use polygon::{draw_polygon, draw_polygon_with_options, polygon_pta};
pub use primitive::{rasterize, rasterize_all};
