//! Line clipping against a rectangular window
//!
//! Two algorithms are offered, both working in `f64` and rounding the
//! accepted endpoints to the nearest integer:
//!
//! - **Cohen-Sutherland** classifies endpoints with 4-bit outcodes and
//!   repeatedly moves an outside endpoint onto a window edge.
//! - **Liang-Barsky** clips the parametric form `p0 + t (p1 - p0)` against
//!   the four edges in a single pass.
//!
//! A segment fully inside the window comes back unchanged; one fully
//! outside is [`ClipResult::Rejected`]. The two algorithms agree to within
//! one pixel per coordinate.

use pixgen_core::{ClipAlgorithm, ClipWindow, Point, PrimitiveKind, Pta, expect_pair};

use crate::TransformResult;

/// Result of clipping a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipResult {
    /// The visible part of the segment
    Visible(Point, Point),
    /// No part of the segment lies in the window
    Rejected,
}

impl ClipResult {
    /// Return `true` if some part of the segment is visible
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(..))
    }

    /// Visible part as a 2-point parameter list, empty when rejected
    pub fn to_pta(&self) -> Pta {
        match *self {
            Self::Visible(a, b) => Pta::from_points(&[a, b]),
            Self::Rejected => Pta::new(),
        }
    }
}

/// Outcode bits
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BELOW: u8 = 4;
const ABOVE: u8 = 8;

/// Tolerance for classifying a computed intersection as on the window.
const EDGE_EPSILON: f64 = 1e-9;

/// Window bounds in `f64`.
#[derive(Clone, Copy)]
struct Bounds {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl From<&ClipWindow> for Bounds {
    fn from(w: &ClipWindow) -> Self {
        Self {
            x_min: w.x_min as f64,
            y_min: w.y_min as f64,
            x_max: w.x_max as f64,
            y_max: w.y_max as f64,
        }
    }
}

fn outcode(x: f64, y: f64, b: &Bounds) -> u8 {
    let mut code = INSIDE;
    if x < b.x_min - EDGE_EPSILON {
        code |= LEFT;
    } else if x > b.x_max + EDGE_EPSILON {
        code |= RIGHT;
    }
    if y < b.y_min - EDGE_EPSILON {
        code |= BELOW;
    } else if y > b.y_max + EDGE_EPSILON {
        code |= ABOVE;
    }
    code
}

fn round_point(x: f64, y: f64) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

fn cohen_sutherland(p0: Point, p1: Point, b: &Bounds) -> ClipResult {
    let (mut x0, mut y0) = (p0.x as f64, p0.y as f64);
    let (mut x1, mut y1) = (p1.x as f64, p1.y as f64);
    let mut code0 = outcode(x0, y0, b);
    let mut code1 = outcode(x1, y1, b);

    loop {
        if code0 | code1 == INSIDE {
            return ClipResult::Visible(round_point(x0, y0), round_point(x1, y1));
        }
        if code0 & code1 != INSIDE {
            return ClipResult::Rejected;
        }

        // At least one endpoint is outside; move it onto the first edge
        // it violates
        let out = if code0 != INSIDE { code0 } else { code1 };
        let (x, y) = if out & LEFT != 0 {
            (b.x_min, y0 + (y1 - y0) * (b.x_min - x0) / (x1 - x0))
        } else if out & RIGHT != 0 {
            (b.x_max, y0 + (y1 - y0) * (b.x_max - x0) / (x1 - x0))
        } else if out & BELOW != 0 {
            (x0 + (x1 - x0) * (b.y_min - y0) / (y1 - y0), b.y_min)
        } else {
            (x0 + (x1 - x0) * (b.y_max - y0) / (y1 - y0), b.y_max)
        };

        if out == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(x0, y0, b);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(x1, y1, b);
        }
    }
}

fn liang_barsky(p0: Point, p1: Point, b: &Bounds) -> ClipResult {
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let dx = p1.x as f64 - x0;
    let dy = p1.y as f64 - y0;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let edges = [
        (-dx, x0 - b.x_min),
        (dx, b.x_max - x0),
        (-dy, y0 - b.y_min),
        (dy, b.y_max - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: outside it means outside everywhere
            if q < 0.0 {
                return ClipResult::Rejected;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return ClipResult::Rejected;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return ClipResult::Rejected;
                }
                t1 = t1.min(r);
            }
        }
    }

    ClipResult::Visible(
        round_point(x0 + t0 * dx, y0 + t0 * dy),
        round_point(x0 + t1 * dx, y0 + t1 * dy),
    )
}

/// Clip the segment `p0`-`p1` against a window.
///
/// Endpoints keep their roles: the first point of a visible result lies
/// on the `p0` side.
pub fn clip_line(p0: Point, p1: Point, window: &ClipWindow, algorithm: ClipAlgorithm) -> ClipResult {
    let bounds = Bounds::from(window);
    let result = match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p0, p1, &bounds),
        ClipAlgorithm::LiangBarsky => liang_barsky(p0, p1, &bounds),
    };
    if result == ClipResult::Rejected {
        tracing::debug!(%algorithm, from = %p0, to = %p1, "segment rejected by clip window");
    }
    result
}

/// Clip a 2-point parameter list against `[x_min, x_max] x [y_min, y_max]`.
///
/// # Errors
///
/// Returns an invalid-parameters error if `params` does not hold exactly
/// 2 points or if the window is inverted.
pub fn clip(
    params: &Pta,
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
    algorithm: ClipAlgorithm,
) -> TransformResult<ClipResult> {
    let (p0, p1) = expect_pair(PrimitiveKind::Line, params)?;
    let window = ClipWindow::new(x_min, y_min, x_max, y_max)?;
    tracing::trace!(%algorithm, from = %p0, to = %p1, ?window, "clip");
    Ok(clip_line(p0, p1, &window, algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;

    fn window() -> ClipWindow {
        ClipWindow::new(0, 0, 10, 10).unwrap()
    }

    fn both(p0: (i32, i32), p1: (i32, i32)) -> [ClipResult; 2] {
        ClipAlgorithm::ALL.map(|alg| clip_line(p0.into(), p1.into(), &window(), alg))
    }

    #[test]
    fn test_outcodes() {
        let b = Bounds::from(&window());
        assert_eq!(outcode(5.0, 5.0, &b), INSIDE);
        assert_eq!(outcode(-1.0, 5.0, &b), LEFT);
        assert_eq!(outcode(11.0, -1.0, &b), RIGHT | BELOW);
        assert_eq!(outcode(5.0, 11.0, &b), ABOVE);
        assert_eq!(outcode(10.0, 0.0, &b), INSIDE);
    }

    #[test]
    fn test_inside_unchanged() {
        for r in both((1, 2), (9, 7)) {
            assert_eq!(r, ClipResult::Visible(Point::new(1, 2), Point::new(9, 7)));
        }
    }

    #[test]
    fn test_outside_rejected() {
        for r in both((-5, -5), (-1, 20)) {
            assert_eq!(r, ClipResult::Rejected);
        }
        // Crosses the corner region without entering
        for r in both((-5, 8), (2, 15)) {
            assert_eq!(r, ClipResult::Rejected);
        }
    }

    #[test]
    fn test_horizontal_straddle() {
        for r in both((-5, 5), (15, 5)) {
            assert_eq!(r, ClipResult::Visible(Point::new(0, 5), Point::new(10, 5)));
        }
    }

    #[test]
    fn test_diagonal_straddle() {
        for r in both((-5, -5), (15, 15)) {
            assert_eq!(r, ClipResult::Visible(Point::new(0, 0), Point::new(10, 10)));
        }
    }

    #[test]
    fn test_endpoint_roles_kept() {
        for r in both((15, 5), (5, 5)) {
            assert_eq!(r, ClipResult::Visible(Point::new(10, 5), Point::new(5, 5)));
        }
    }

    #[test]
    fn test_degenerate_segment() {
        assert!(both((3, 3), (3, 3)).iter().all(ClipResult::is_visible));
        assert!(both((-3, 3), (-3, 3)).iter().all(|r| !r.is_visible()));
    }

    #[test]
    fn test_clip_validation() {
        let params = Pta::from_pairs(&[(0, 0), (5, 5)]);
        let err = clip(&params, 10, 0, 0, 10, ClipAlgorithm::LiangBarsky).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Core(pixgen_core::Error::InvalidParameters(_))
        ));
        let short = Pta::from_pairs(&[(0, 0)]);
        assert!(clip(&short, 0, 0, 10, 10, ClipAlgorithm::CohenSutherland).is_err());
    }

    #[test]
    fn test_to_pta() {
        let r = ClipResult::Visible(Point::new(1, 1), Point::new(2, 2));
        assert_eq!(r.to_pta(), Pta::from_pairs(&[(1, 1), (2, 2)]));
        assert!(ClipResult::Rejected.to_pta().is_empty());
    }
}
