//! Midpoint ellipse rasterization
//!
//! Axis-aligned ellipses lack the diagonal symmetry of circles, so a whole
//! quadrant is stepped, in two regions split where the outline's slope
//! passes -1:
//!
//! - Region 1, near the top (x = 0, y = ry): unit steps in x, y decremented
//!   when the decision variable says so.
//! - Region 2, down to the major-axis vertex: unit steps in y, x
//!   incremented when the decision variable says so.
//!
//! The vertex `(rx, 0)` is appended unconditionally, then the quadrant is
//! mirrored across the x-axis and the resulting half across the y-axis.

use pixgen_core::{Point, PrimitiveKind, Pta, expect_pair};

use crate::circle::reflect_into;
use crate::{DrawError, DrawResult};

/// Pixels of the first quadrant in the ellipse's local frame.
fn first_quadrant(rx: i32, ry: i32) -> Vec<Point> {
    let rx2 = rx as f64 * rx as f64;
    let ry2 = ry as f64 * ry as f64;

    let mut quad = Vec::with_capacity(rx as usize + ry as usize + 1);
    let mut x = 0i32;
    let mut y = ry;

    // Region 1: stop at the first x whose slope test fails
    let mut p1 = ry2 - rx2 * ry as f64 + rx2 / 4.0;
    while ry2 * (x as f64) < rx2 * (y as f64) {
        quad.push(Point::new(x, y));
        if p1 < 0.0 {
            p1 += 2.0 * ry2 * (x as f64 + 1.0) + ry2;
        } else {
            p1 += 2.0 * ry2 * (x as f64 + 1.0) + ry2 - 2.0 * rx2 * (y as f64 - 1.0);
            y -= 1;
        }
        x += 1;
    }

    // Region 2: from the crossing x down to the major axis
    let mut xk = x;
    let mut p2 = ry2 * (xk as f64 + 0.5).powi(2) + rx2 * (y as f64 - 1.0).powi(2) - rx2 * ry2;
    while y > 0 {
        quad.push(Point::new(xk, y));
        if p2 > 0.0 {
            p2 += -2.0 * rx2 * (y as f64 - 1.0) + rx2;
        } else {
            p2 += -2.0 * rx2 * (y as f64 - 1.0) + rx2 + 2.0 * ry2 * (xk as f64 + 1.0);
            xk += 1;
        }
        y -= 1;
    }

    quad.push(Point::new(rx, 0));
    quad
}

/// Rasterize the outline of an axis-aligned ellipse.
///
/// # Arguments
///
/// * `center` - Ellipse center
/// * `rx` - Semi-axis along x
/// * `ry` - Semi-axis along y
///
/// Non-positive semi-axes are rejected by [`draw_ellipse`]; called directly
/// with one, this returns an empty list.
pub fn ellipse_pta(center: Point, rx: i32, ry: i32) -> Pta {
    if rx <= 0 || ry <= 0 {
        return Pta::new();
    }

    let mut pts = first_quadrant(rx, ry);
    reflect_into(&mut pts, |p| Point::new(p.x, -p.y));
    reflect_into(&mut pts, |p| Point::new(-p.x, p.y));

    pts.into_iter()
        .map(|p| p.offset(center.x, center.y))
        .collect()
}

/// Rasterize an ellipse given as `[center, (rx, ry)]`.
///
/// # Errors
///
/// Returns an invalid-parameters error if `params` does not hold exactly
/// 2 points or if either semi-axis is not positive.
pub fn draw_ellipse(params: &Pta) -> DrawResult<Pta> {
    let (center, axes) = expect_pair(PrimitiveKind::Ellipse, params)?;
    let (rx, ry) = (axes.x, axes.y);
    if rx <= 0 || ry <= 0 {
        return Err(DrawError::InvalidParameters(format!(
            "ellipse semi-axes must be positive: rx={}, ry={}",
            rx, ry
        )));
    }
    let pta = ellipse_pta(center, rx, ry);
    tracing::trace!(%center, rx, ry, pixels = pta.len(), "rasterized ellipse");
    Ok(pta)
}
