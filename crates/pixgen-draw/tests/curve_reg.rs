//! Curve rasterizer regression test
//!
//! Bezier curves interpolate their end control points; uniform cubic
//! B-splines start at (P0 + 4 P1 + P2) / 6 and need 4 control points.

use pixgen_core::{CurveAlgorithm, CurveSampling, Point, Pta, RasterOptions};
use pixgen_draw::{curve_pta, draw_curve, draw_curve_with_options};
use pixgen_test::RegParams;

fn is_connected(pta: &Pta) -> bool {
    pta.to_points()
        .windows(2)
        .all(|w| (w[1].x - w[0].x).abs() <= 1 && (w[1].y - w[0].y).abs() <= 1)
}

#[test]
fn curve_reg() {
    let mut rp = RegParams::new("curve");

    let ctrl = Pta::from_pairs(&[(0, 0), (20, 40), (60, 40), (80, 0)]);

    // --- Test 1: cubic Bezier ends on its end control points ---
    let pta = draw_curve(&ctrl, CurveAlgorithm::Bezier).unwrap();
    rp.compare_bool(true, pta.first() == Some(Point::new(0, 0)));
    rp.compare_bool(true, pta.last() == Some(Point::new(80, 0)));
    rp.compare_bool(true, is_connected(&pta));

    // --- Test 2: symmetric control polygon peaks at B(0.5) = (40, 30) ---
    let pta = curve_pta(&ctrl, CurveAlgorithm::Bezier, &CurveSampling::Fixed(2));
    rp.compare_pta(&[(0, 0), (40, 30), (80, 0)], &pta);

    // --- Test 3: B-spline starts and ends inside the control polygon ---
    let pta = draw_curve(&ctrl, CurveAlgorithm::BSpline).unwrap();
    // (P0 + 4 P1 + P2) / 6 = (140, 200) / 6, truncated
    rp.compare_bool(true, pta.first() == Some(Point::new(23, 33)));
    // (P1 + 4 P2 + P3) / 6 = (340, 200) / 6, truncated
    rp.compare_bool(true, pta.last() == Some(Point::new(56, 33)));
    rp.compare_bool(true, is_connected(&pta));

    // --- Test 4: B-spline with 3 control points is empty, not an error ---
    let three = Pta::from_pairs(&[(0, 0), (5, 5), (10, 0)]);
    let pta = draw_curve(&three, CurveAlgorithm::BSpline).unwrap();
    rp.compare_values(0.0, pta.len() as f64, 0.0);

    // --- Test 5: fixed sampling honors the step count ---
    let opts = RasterOptions::default().curve_sampling(CurveSampling::Fixed(4));
    let pta = draw_curve_with_options(&ctrl, CurveAlgorithm::Bezier, &opts).unwrap();
    rp.compare_values(5.0, pta.len() as f64, 0.0);

    // --- Test 6: fewer than 2 control points is rejected ---
    let err = draw_curve(&Pta::from_pairs(&[(1, 1)]), CurveAlgorithm::Bezier);
    rp.compare_bool(true, err.is_err_and(|e| e.is_invalid_parameters()));

    // --- Test 7: curve tags parse, including the alternate spellings ---
    for tag in ["B-spline", "B_spline", "UniformBSpline"] {
        rp.compare_bool(true, tag.parse::<CurveAlgorithm>() == Ok(CurveAlgorithm::BSpline));
    }

    assert!(rp.cleanup());
}
