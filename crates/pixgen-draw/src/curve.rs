//! Parametric curve rasterization
//!
//! Two curve families are supported:
//!
//! - **Bezier** of any degree, evaluated with de Casteljau's algorithm over
//!   t in [0, 1]. The curve passes through the first and last control point.
//! - **Uniform cubic B-spline**, one segment per window of 4 consecutive
//!   control points. The curve approximates the control polygon and does
//!   not, in general, touch its ends.
//!
//! Samples are truncated toward zero; values within floating-point noise of
//! an integer are taken as that integer first. The step count comes from
//! [`CurveSampling`]: adaptive sampling bounds the derivative so neighboring
//! samples differ by at most one pixel on each axis. Oversampling produces
//! runs of equal pixels, which are collapsed.

use pixgen_core::{
    CurveAlgorithm, CurveSampling, Point, PrimitiveKind, Pta, RasterOptions, expect_at_least,
};

use crate::DrawResult;

/// Largest per-axis step between consecutive control points.
fn max_chord(control: &[Point]) -> i64 {
    control
        .windows(2)
        .map(|w| {
            let dx = (w[1].x as i64 - w[0].x as i64).abs();
            let dy = (w[1].y as i64 - w[0].y as i64).abs();
            dx.max(dy)
        })
        .max()
        .unwrap_or(0)
}

/// Parameter steps for one curve or segment.
///
/// `degree` scales the chord bound: a degree-n Bezier's derivative is at
/// most n times its largest control-polygon leg.
fn step_count(control: &[Point], degree: usize, sampling: &CurveSampling) -> usize {
    match *sampling {
        CurveSampling::Fixed(n) => n.max(1),
        CurveSampling::Adaptive => {
            let bound = max_chord(control).saturating_mul(degree as i64);
            (bound.max(1)) as usize
        }
    }
}

/// Distance under which a sample is taken to sit on an integer coordinate.
const SNAP_EPSILON: f64 = 1e-9;

/// Truncate toward zero, after snapping evaluation noise near integers.
#[inline]
fn to_pixel(v: f64) -> i32 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPSILON {
        r as i32
    } else {
        v as i32
    }
}

/// Append a sample unless it repeats the previous pixel.
fn push_sample(pta: &mut Pta, x: f64, y: f64) {
    let p = Point::new(to_pixel(x), to_pixel(y));
    if pta.last() != Some(p) {
        pta.push_point(p);
    }
}

/// Evaluate a Bezier curve at `t` with de Casteljau's algorithm.
///
/// `scratch` must hold a copy of the control points; it is overwritten.
fn de_casteljau(control: &[(f64, f64)], scratch: &mut [(f64, f64)], t: f64) -> (f64, f64) {
    let n = control.len();
    scratch.copy_from_slice(control);
    for level in 1..n {
        for i in 0..n - level {
            let (ax, ay) = scratch[i];
            let (bx, by) = scratch[i + 1];
            scratch[i] = (ax + t * (bx - ax), ay + t * (by - ay));
        }
    }
    scratch[0]
}

fn bezier(control: &[Point], sampling: &CurveSampling) -> Pta {
    if control.is_empty() {
        return Pta::new();
    }

    let degree = control.len() - 1;
    let steps = step_count(control, degree, sampling);
    let ctrl: Vec<(f64, f64)> = control.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    let mut scratch = ctrl.clone();

    let mut pta = Pta::with_capacity(steps + 1);
    for k in 0..=steps {
        let t = k as f64 / steps as f64;
        let (x, y) = de_casteljau(&ctrl, &mut scratch, t);
        push_sample(&mut pta, x, y);
    }
    pta
}

/// Uniform cubic B-spline basis functions at `t`.
#[inline]
fn bspline_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let u = 1.0 - t;
    [
        u * u * u / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

fn bspline(control: &[Point], sampling: &CurveSampling) -> Pta {
    if control.len() < 4 {
        tracing::debug!(
            control_points = control.len(),
            "B-spline needs at least 4 control points"
        );
        return Pta::new();
    }

    let segments = control.len() - 3;
    let mut pta = Pta::new();

    for (seg, window) in control.windows(4).enumerate() {
        let steps = step_count(window, 1, sampling);
        // Only the final segment reaches t = 1; elsewhere it is the next
        // segment's t = 0
        let last = if seg + 1 == segments { steps } else { steps - 1 };

        for k in 0..=last {
            let t = k as f64 / steps as f64;
            let b = bspline_basis(t);
            let (x, y) = window
                .iter()
                .zip(b)
                .fold((0.0, 0.0), |(x, y), (p, w)| {
                    (x + w * p.x as f64, y + w * p.y as f64)
                });
            push_sample(&mut pta, x, y);
        }
    }
    pta
}

/// Rasterize a parametric curve from its control points.
///
/// # Arguments
///
/// * `control` - Control points
/// * `algorithm` - Curve family
/// * `sampling` - Parameter sampling strategy
///
/// A B-spline with fewer than 4 control points yields an empty list.
pub fn curve_pta(control: &Pta, algorithm: CurveAlgorithm, sampling: &CurveSampling) -> Pta {
    let pts = control.to_points();
    match algorithm {
        CurveAlgorithm::Bezier => bezier(&pts, sampling),
        CurveAlgorithm::BSpline => bspline(&pts, sampling),
    }
}

/// Rasterize a curve with adaptive sampling.
///
/// # Errors
///
/// Returns an invalid-parameters error if fewer than 2 control points are
/// given.
pub fn draw_curve(params: &Pta, algorithm: CurveAlgorithm) -> DrawResult<Pta> {
    draw_curve_with_options(params, algorithm, &RasterOptions::default())
}

/// Rasterize a curve with explicit options.
///
/// # Errors
///
/// Returns an invalid-parameters error if fewer than 2 control points are
/// given.
pub fn draw_curve_with_options(
    params: &Pta,
    algorithm: CurveAlgorithm,
    options: &RasterOptions,
) -> DrawResult<Pta> {
    expect_at_least(PrimitiveKind::Curve, params, 2)?;
    let pta = curve_pta(params, algorithm, &options.curve_sampling);
    tracing::trace!(
        %algorithm,
        control_points = params.len(),
        pixels = pta.len(),
        "rasterized curve"
    );
    Ok(pta)
}
