//! Line rasterization
//!
//! Converts a segment between two integer endpoints into a pixel sequence
//! with one of three interchangeable stepping algorithms:
//!
//! - **Naive**: samples `y = y0 + k(x - x0)` at every integer x. Steep lines
//!   come out as sparse stair steps.
//! - **DDA**: steps along the dominant axis and derives the other
//!   coordinate from the real slope.
//! - **Bresenham**: steps along the dominant axis with an integer decision
//!   variable; no floating point in the stepping loop.
//!
//! All three emit exactly the single endpoint for a degenerate segment.
//! Whenever endpoints are reordered, both coordinates move together.

use pixgen_core::{LineAlgorithm, Point, PrimitiveKind, Pta, expect_pair};

use crate::DrawResult;

/// Rasterize the segment `p0`-`p1`.
///
/// # Arguments
///
/// * `p0`, `p1` - Endpoints
/// * `algorithm` - Stepping algorithm
///
/// # Example
///
/// ```
/// use pixgen_core::{LineAlgorithm, Point};
/// use pixgen_draw::line_pta;
///
/// let pta = line_pta(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Bresenham);
/// let ys: Vec<i32> = pta.iter().map(|p| p.y).collect();
/// assert_eq!(ys, [0, 0, 1, 1, 2, 2]);
/// ```
pub fn line_pta(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Pta {
    match algorithm {
        LineAlgorithm::Naive => naive_line(p0, p1),
        LineAlgorithm::Dda => dda_line(p0, p1),
        LineAlgorithm::Bresenham => bresenham_line(p0, p1),
    }
}

/// Rasterize a line given as a `[start, end]` parameter list.
///
/// # Errors
///
/// Returns an invalid-parameters error unless `params` holds exactly 2 points.
pub fn draw_line(params: &Pta, algorithm: LineAlgorithm) -> DrawResult<Pta> {
    let (p0, p1) = expect_pair(PrimitiveKind::Line, params)?;
    let pta = line_pta(p0, p1, algorithm);
    tracing::trace!(%algorithm, from = %p0, to = %p1, pixels = pta.len(), "rasterized line");
    Ok(pta)
}

/// Vertical run at `x` from `y0` to `y1` inclusive, in the given direction.
fn vertical_run(x: i32, y0: i32, y1: i32) -> Pta {
    let n = (y1 as i64 - y0 as i64).unsigned_abs() as usize + 1;
    let mut pta = Pta::with_capacity(n);
    if y0 <= y1 {
        for y in y0..=y1 {
            pta.push(x, y);
        }
    } else {
        for y in (y1..=y0).rev() {
            pta.push(x, y);
        }
    }
    pta
}

/// Vertical run with the endpoints ordered by ascending y.
fn vertical_run_ascending(x: i32, y0: i32, y1: i32) -> Pta {
    vertical_run(x, y0.min(y1), y0.max(y1))
}

/// Real slope `dy / dx` of a non-vertical segment.
#[inline]
fn slope(p0: Point, p1: Point) -> f64 {
    (p1.y as f64 - p0.y as f64) / (p1.x as f64 - p0.x as f64)
}

fn naive_line(p0: Point, p1: Point) -> Pta {
    if p0.x == p1.x {
        return vertical_run(p0.x, p0.y, p1.y);
    }

    let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
    let k = slope(p0, p1);

    let mut pta = Pta::with_capacity((p1.x as i64 - p0.x as i64) as usize + 1);
    for x in p0.x..=p1.x {
        let y = p0.y as f64 + k * (x as f64 - p0.x as f64);
        pta.push(x, y as i32);
    }
    pta
}

fn dda_line(p0: Point, p1: Point) -> Pta {
    if p0.x == p1.x {
        return vertical_run_ascending(p0.x, p0.y, p1.y);
    }

    let m = slope(p0, p1);
    if m.abs() <= 1.0 {
        // Step along x, left to right
        let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        let mut pta = Pta::with_capacity((p1.x as i64 - p0.x as i64) as usize + 1);
        for x in p0.x..=p1.x {
            let y = p0.y as f64 + m * (x as f64 - p0.x as f64);
            pta.push(x, y as i32);
        }
        pta
    } else {
        // Step along y, top to bottom
        let (p0, p1) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        let inv = 1.0 / m;
        let mut pta = Pta::with_capacity((p1.y as i64 - p0.y as i64) as usize + 1);
        for y in p0.y..=p1.y {
            let x = p0.x as f64 + inv * (y as f64 - p0.y as f64);
            pta.push(x as i32, y);
        }
        pta
    }
}

fn bresenham_line(p0: Point, p1: Point) -> Pta {
    if p0.x == p1.x {
        return vertical_run_ascending(p0.x, p0.y, p1.y);
    }

    let dx = (p1.x as i64 - p0.x as i64).abs();
    let dy = (p1.y as i64 - p0.y as i64).abs();
    let mut pta = Pta::with_capacity(dx.max(dy) as usize + 1);

    if dy <= dx {
        // Slope magnitude <= 1: unit steps in x
        let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        let t = if p0.y < p1.y { 1 } else { -1 };
        let mut p = 2 * dy - dx;
        let mut yk = p0.y;
        for x in p0.x..=p1.x {
            pta.push(x, yk);
            if p >= 0 {
                yk += t;
                p += 2 * dy - 2 * dx;
            } else {
                p += 2 * dy;
            }
        }
    } else {
        // Slope magnitude > 1: unit steps in y
        let (p0, p1) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        let t = if p0.x < p1.x { 1 } else { -1 };
        let mut p = 2 * dx - dy;
        let mut xk = p0.x;
        for y in p0.y..=p1.y {
            pta.push(xk, y);
            if p >= 0 {
                xk += t;
                p += 2 * dx - 2 * dy;
            } else {
                p += 2 * dx;
            }
        }
    }

    pta
}
