//! ClipWindow - axis-aligned clipping rectangle
//!
//! Unlike a width/height rectangle, a clip window stores its inclusive
//! edge coordinates directly, which is the form both line clippers test
//! against.

use crate::error::{Error, Result};
use crate::point::Point;

/// An axis-aligned rectangle with inclusive bounds.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    /// Left edge
    pub x_min: i32,
    /// Top edge
    pub y_min: i32,
    /// Right edge
    pub x_max: i32,
    /// Bottom edge
    pub y_max: i32,
}

impl ClipWindow {
    /// Create a new clip window
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if `x_min > x_max` or `y_min > y_max`.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        if x_min > x_max || y_min > y_max {
            return Err(Error::InvalidParameters(format!(
                "clip window edges out of order: x {}..{}, y {}..{}",
                x_min, x_max, y_min, y_max
            )));
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Create a clip window from two arbitrary corner points
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x_min: a.x.min(b.x),
            y_min: a.y.min(b.y),
            x_max: a.x.max(b.x),
            y_max: a.y.max(b.y),
        }
    }

    /// Check if a point lies inside the window or on its edge
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}
