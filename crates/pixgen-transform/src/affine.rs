//! Affine transformations of point lists
//!
//! Transforms act on parameter lists (endpoints, vertices, control points),
//! never on rasterized output. Coordinates use the screen convention with
//! y growing downward, so a positive angle turns clockwise on screen.
//!
//! Rotation and scaling are computed in `f64` and rounded to the nearest
//! integer, halves away from zero.

use pixgen_core::{Point, Pta};

/// Offset of `v` from `c`, exact in `f64`.
#[inline]
fn relative(v: i32, c: i32) -> f64 {
    (v as i64 - c as i64) as f64
}

/// Round to the nearest pixel, halves away from zero.
#[inline]
fn to_pixel(v: f64) -> i32 {
    v.round() as i32
}

/// Rotate one point about `(cx, cy)` given the angle's sine and cosine.
///
/// The point is moved into the center's frame, rotated, moved back, and
/// only then rounded.
fn rotate_point(p: Point, cx: i32, cy: i32, sin: f64, cos: f64) -> Point {
    let dx = relative(p.x, cx);
    let dy = relative(p.y, cy);
    Point::new(
        to_pixel(dx * cos - dy * sin + cx as f64),
        to_pixel(dx * sin + dy * cos + cy as f64),
    )
}

/// Scale one point about `(cx, cy)` as `(p - c) * factor + c`.
fn scale_point(p: Point, cx: i32, cy: i32, factor: f64) -> Point {
    Point::new(
        to_pixel(relative(p.x, cx) * factor + cx as f64),
        to_pixel(relative(p.y, cy) * factor + cy as f64),
    )
}

/// Translate every point by `(dx, dy)`.
///
/// Exact in integer arithmetic; coordinates saturate at the `i32` range.
pub fn translate(pta: &Pta, dx: i32, dy: i32) -> Pta {
    tracing::trace!(dx, dy, points = pta.len(), "translate");
    pta.map(|p| p.offset(dx, dy))
}

/// Rotate every point about `(cx, cy)`.
///
/// # Arguments
///
/// * `pta` - Points to rotate
/// * `cx`, `cy` - Center of rotation
/// * `degrees` - Angle, clockwise on screen
///
/// Each point relative to the center, `(x, y)`, maps to
/// `(x cos t - y sin t, x sin t + y cos t)`. Ellipse parameter lists must
/// not be rotated: the rasterizer only draws axis-aligned ellipses.
pub fn rotate(pta: &Pta, cx: i32, cy: i32, degrees: f64) -> Pta {
    tracing::trace!(cx, cy, degrees, points = pta.len(), "rotate");
    let (sin, cos) = degrees.to_radians().sin_cos();
    pta.map(|p| rotate_point(p, cx, cy, sin, cos))
}

/// Scale every point about `(cx, cy)` by `factor`.
///
/// Computes `(p - c) * factor + c`. A non-positive factor collapses or
/// mirrors the points; it is not rejected.
pub fn scale(pta: &Pta, cx: i32, cy: i32, factor: f64) -> Pta {
    tracing::trace!(cx, cy, factor, points = pta.len(), "scale");
    pta.map(|p| scale_point(p, cx, cy, factor))
}

/// A single affine transformation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift by `(dx, dy)`
    Translate { dx: i32, dy: i32 },
    /// Rotate about `(cx, cy)`, clockwise on screen
    Rotate { cx: i32, cy: i32, degrees: f64 },
    /// Scale about `(cx, cy)`
    Scale { cx: i32, cy: i32, factor: f64 },
}

impl Transform {
    /// Apply the transformation to every point of a list
    pub fn apply(&self, pta: &Pta) -> Pta {
        match *self {
            Self::Translate { dx, dy } => translate(pta, dx, dy),
            Self::Rotate { cx, cy, degrees } => rotate(pta, cx, cy, degrees),
            Self::Scale { cx, cy, factor } => scale(pta, cx, cy, factor),
        }
    }

    /// Apply the transformation to a single point
    pub fn apply_point(&self, p: Point) -> Point {
        match *self {
            Self::Translate { dx, dy } => p.offset(dx, dy),
            Self::Rotate { cx, cy, degrees } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                rotate_point(p, cx, cy, sin, cos)
            }
            Self::Scale { cx, cy, factor } => scale_point(p, cx, cy, factor),
        }
    }
}
