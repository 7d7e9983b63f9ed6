//! pixgen-transform - Geometric transforms and clipping for pixgen
//!
//! This crate operates on parameter lists before rasterization:
//!
//! - Translation, rotation about a point, scaling about a point
//! - Per-kind transforms of whole [`pixgen_core::Primitive`]s
//! - Segment clipping (Cohen-Sutherland, Liang-Barsky)

pub mod affine;
pub mod clip;
mod error;
pub mod primitive;

pub use affine::{Transform, rotate, scale, translate};
pub use clip::{ClipResult, clip, clip_line};
pub use error::{TransformError, TransformResult};
pub use primitive::transform_primitive;
