//! Midpoint circle rasterization
//!
//! Only the octant from the top of the circle (x = 0, y = r) to the 45°
//! diagonal is stepped. The rest of the outline is produced by three
//! successive reflections of the accumulated set:
//!
//! ```text
//!   octant --(x,y)->(y,x)--> quarter --(x,-y)--> half --(-x,y)--> full
//! ```
//!
//! Pixels lying on a mirror axis are emitted more than once; compare the
//! output as a set when that matters.

use pixgen_core::{Point, PrimitiveKind, Pta, expect_pair};

use crate::{DrawError, DrawResult};

/// Pixels of the first octant in the circle's local frame.
///
/// Walks x upward from 0 while `x <= y`; the decision variable starts at
/// `5/4 - r` and picks between the east and south-east candidates.
fn first_octant(radius: i32) -> Vec<Point> {
    let mut octant = Vec::with_capacity(radius as usize * 3 / 4 + 2);
    let mut p = 5.0 / 4.0 - radius as f64;
    let mut x = 0i32;
    let mut y = radius;

    while x <= y {
        octant.push(Point::new(x, y));
        if p < 0.0 {
            p += 2.0 * (x as f64 + 1.0) + 1.0;
        } else {
            p += 2.0 * (x as f64 + 1.0) + 1.0 - 2.0 * (y as f64 - 1.0);
            y -= 1;
        }
        x += 1;
    }

    octant
}

/// Append the image of every point already in `pts` under `f`.
pub(crate) fn reflect_into(pts: &mut Vec<Point>, f: impl Fn(Point) -> Point) {
    let n = pts.len();
    pts.reserve(n);
    for i in 0..n {
        let q = f(pts[i]);
        pts.push(q);
    }
}

/// Rasterize the outline of a circle.
///
/// # Arguments
///
/// * `center` - Circle center
/// * `radius` - Radius in pixels; 0 yields the center pixel only
///
/// Negative radii are rejected by [`draw_circle`]; called directly with one,
/// this returns an empty list.
pub fn circle_pta(center: Point, radius: i32) -> Pta {
    if radius < 0 {
        return Pta::new();
    }

    let mut pts = first_octant(radius);
    reflect_into(&mut pts, Point::transpose);
    reflect_into(&mut pts, |p| Point::new(p.x, -p.y));
    reflect_into(&mut pts, |p| Point::new(-p.x, p.y));

    pts.into_iter()
        .map(|p| p.offset(center.x, center.y))
        .collect()
}

/// Rasterize a circle given as `[center, (0, radius)]`.
///
/// The radius is the y component of the second point; its x component is
/// ignored.
///
/// # Errors
///
/// Returns an invalid-parameters error if `params` does not hold exactly
/// 2 points or if the radius is negative.
pub fn draw_circle(params: &Pta) -> DrawResult<Pta> {
    let (center, r) = expect_pair(PrimitiveKind::Circle, params)?;
    let radius = r.y;
    if radius < 0 {
        return Err(DrawError::InvalidParameters(format!(
            "circle radius must be non-negative: {}",
            radius
        )));
    }
    let pta = circle_pta(center, radius);
    tracing::trace!(%center, radius, pixels = pta.len(), "rasterized circle");
    Ok(pta)
}
