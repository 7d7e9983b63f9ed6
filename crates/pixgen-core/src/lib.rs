//! pixgen Core - Basic data structures for rasterization
//!
//! This crate provides the data model shared by the pixgen crates:
//!
//! - [`Point`] - Integer pixel coordinates
//! - [`Pta`] / [`Ptaa`] - Point arrays (parameter lists and pixel lists)
//! - [`ClipWindow`] - Axis-aligned clipping rectangle
//! - [`LineAlgorithm`] / [`CurveAlgorithm`] / [`ClipAlgorithm`] - Algorithm selectors
//! - [`Primitive`] / [`PrimitiveKind`] - Validated primitive descriptions
//! - [`RasterOptions`] - Rasterization tunables
//!
//! Everything here is plain data: no operation mutates shared state, and
//! every type is `Send + Sync`.

pub mod algorithm;
pub mod error;
pub mod options;
pub mod point;
pub mod primitive;
pub mod pta;
pub mod window;

pub use algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
pub use error::{Error, Result};
pub use options::{CurveSampling, DEFAULT_CLOSE_THRESHOLD_SQ, RasterOptions};
pub use point::Point;
pub use primitive::{Primitive, PrimitiveKind, expect_at_least, expect_pair};
pub use pta::{Pta, PtaIter, Ptaa};
pub use window::ClipWindow;
