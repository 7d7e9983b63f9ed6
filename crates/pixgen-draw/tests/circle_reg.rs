//! Circle rasterizer regression test
//!
//! Midpoint circle: exact first octant, eight-way symmetry, and the
//! `[center, (0, radius)]` parameter encoding.

use pixgen_core::{Point, Pta};
use pixgen_draw::{circle_pta, draw_circle};
use pixgen_test::RegParams;

#[test]
fn circle_reg() {
    let mut rp = RegParams::new("circle");

    // --- Test 1: first octant of r = 5 leads the output ---
    let pta = draw_circle(&Pta::from_pairs(&[(0, 0), (0, 5)])).unwrap();
    let head: Pta = pta.iter().take(4).collect();
    rp.compare_pta(&[(0, 5), (1, 5), (2, 5), (3, 4)], &head);

    // --- Test 2: the pixel set is symmetric under all eight reflections ---
    let pta = circle_pta(Point::ORIGIN, 17);
    let mirrors: [fn(Point) -> Point; 3] = [
        |p| Point::new(-p.x, p.y),
        |p| Point::new(p.x, -p.y),
        Point::transpose,
    ];
    for f in mirrors {
        rp.compare_point_sets(&pta, &pta.map(f));
    }

    // --- Test 3: every pixel lies within half a pixel of the true circle ---
    let r = 40;
    let pta = circle_pta(Point::ORIGIN, r);
    let max_dev = pta
        .iter()
        .map(|p| ((p.x as f64).hypot(p.y as f64) - r as f64).abs())
        .fold(0.0, f64::max);
    rp.compare_values(0.0, max_dev, 0.5);

    // --- Test 4: the four axis pixels are present after translation ---
    let pta = circle_pta(Point::new(50, 60), 10);
    for (x, y) in [(60, 60), (40, 60), (50, 70), (50, 50)] {
        rp.compare_bool(true, pta.contains(Point::new(x, y)));
    }

    // --- Test 5: radius 0 collapses to the center ---
    let pta = draw_circle(&Pta::from_pairs(&[(7, 8), (0, 0)])).unwrap();
    rp.compare_bool(true, pta.unique() == vec![Point::new(7, 8)]);

    // --- Test 6: a center at the edge of the coordinate range clamps ---
    let pta = draw_circle(&Pta::from_pairs(&[(i32::MAX - 2, 0), (0, 5)])).unwrap();
    rp.compare_values(32.0, pta.len() as f64, 0.0);
    rp.compare_bool(true, pta.contains(Point::new(i32::MAX, 0)));
    rp.compare_bool(true, pta.contains(Point::new(i32::MAX - 7, 0)));
    rp.compare_bool(true, pta.contains(Point::new(i32::MAX - 2, -5)));

    // --- Test 7: invalid parameters ---
    let err = draw_circle(&Pta::from_pairs(&[(0, 0), (0, -1)]));
    rp.compare_bool(true, err.is_err_and(|e| e.is_invalid_parameters()));
    let err = draw_circle(&Pta::from_pairs(&[(0, 0), (0, 3), (0, 4)]));
    rp.compare_bool(true, err.is_err_and(|e| e.is_invalid_parameters()));

    assert!(rp.cleanup());
}
