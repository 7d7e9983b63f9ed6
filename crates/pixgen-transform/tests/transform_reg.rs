//! Affine transform regression test
//!
//! Translate, rotate and scale over parameter lists, and per-kind
//! transforms of primitives followed by rasterization.

use pixgen_core::{LineAlgorithm, Point, Primitive, PrimitiveKind, Pta, RasterOptions};
use pixgen_draw::rasterize;
use pixgen_test::RegParams;
use pixgen_transform::{Transform, rotate, scale, transform_primitive, translate};

#[test]
fn transform_reg() {
    let mut rp = RegParams::new("transform");

    let square = Pta::from_pairs(&[(10, 10), (20, 10), (20, 20), (10, 20)]);

    // --- Test 1: translate is exact ---
    let moved = translate(&square, -10, 5);
    rp.compare_pta(&[(0, 15), (10, 15), (10, 25), (0, 25)], &moved);

    // --- Test 2: a quarter turn about the square's center permutes its corners ---
    let turned = rotate(&square, 15, 15, 90.0);
    rp.compare_pta(&[(20, 10), (20, 20), (10, 20), (10, 10)], &turned);
    rp.compare_point_sets(&square, &turned);

    // --- Test 3: four quarter turns come back home ---
    let mut pta = square.clone();
    for _ in 0..4 {
        pta = rotate(&pta, 3, -7, 90.0);
    }
    rp.compare_bool(true, pta == square);

    // --- Test 4: scaling about a corner keeps that corner ---
    let grown = scale(&square, 10, 10, 3.0);
    rp.compare_pta(&[(10, 10), (40, 10), (40, 40), (10, 40)], &grown);

    // --- Test 5: rotation rounds to the nearest pixel ---
    let spoke = rotate(&Pta::from_pairs(&[(100, 0)]), 0, 0, 30.0);
    // (86.60.., 50.0)
    rp.compare_pta(&[(87, 50)], &spoke);

    // --- Test 6: Transform values apply like the free functions ---
    let t = Transform::Scale {
        cx: 15,
        cy: 15,
        factor: 0.5,
    };
    rp.compare_bool(true, t.apply(&square) == scale(&square, 15, 15, 0.5));

    // --- Test 7: a translated circle rasterizes to the translated pixels ---
    let circle = Primitive::from_params(PrimitiveKind::Circle, &Pta::from_pairs(&[(0, 0), (0, 9)]), None)
        .unwrap();
    let opts = RasterOptions::default();
    let shifted = transform_primitive(&circle, &Transform::Translate { dx: 30, dy: -4 }).unwrap();
    rp.compare_point_sets(
        &translate(&rasterize(&circle, &opts), 30, -4),
        &rasterize(&shifted, &opts),
    );

    // --- Test 8: polygon vertices move, algorithm is kept ---
    let poly = Primitive::Polygon {
        vertices: square.clone(),
        algorithm: LineAlgorithm::Naive,
    };
    let out = transform_primitive(&poly, &Transform::Translate { dx: 1, dy: 1 }).unwrap();
    rp.compare_bool(true, out.algorithm_tag() == Some("Naive"));
    rp.compare_bool(true, out.params().first() == Some(Point::new(11, 11)));

    // --- Test 9: rotating an ellipse is refused ---
    let ellipse = Primitive::ellipse(Point::new(0, 0), 8, 3).unwrap();
    let rot = Transform::Rotate {
        cx: 0,
        cy: 0,
        degrees: 90.0,
    };
    rp.compare_bool(true, transform_primitive(&ellipse, &rot).is_err());

    assert!(rp.cleanup());
}
