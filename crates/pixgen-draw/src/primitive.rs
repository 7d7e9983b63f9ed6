//! Primitive dispatch
//!
//! Routes a validated [`Primitive`] to its rasterizer. Primitives are
//! validated on construction, so dispatch itself cannot fail.

use pixgen_core::{Primitive, Pta, Ptaa, RasterOptions};

use crate::circle::circle_pta;
use crate::curve::curve_pta;
use crate::ellipse::ellipse_pta;
use crate::line::line_pta;
use crate::polygon::polygon_pta;

/// Rasterize a single primitive.
pub fn rasterize(primitive: &Primitive, options: &RasterOptions) -> Pta {
    let pta = match primitive {
        Primitive::Line {
            start,
            end,
            algorithm,
        } => line_pta(*start, *end, *algorithm),
        Primitive::Polygon {
            vertices,
            algorithm,
        } => polygon_pta(vertices, *algorithm, options.close_threshold_sq),
        Primitive::Circle { center, radius } => circle_pta(*center, *radius),
        Primitive::Ellipse { center, rx, ry } => ellipse_pta(*center, *rx, *ry),
        Primitive::Curve { control, algorithm } => {
            curve_pta(control, *algorithm, &options.curve_sampling)
        }
    };
    tracing::trace!(kind = %primitive.kind(), pixels = pta.len(), "rasterized primitive");
    pta
}

/// Rasterize a scene, one pixel list per primitive in input order.
pub fn rasterize_all(primitives: &[Primitive], options: &RasterOptions) -> Ptaa {
    let ptaa: Ptaa = primitives.iter().map(|p| rasterize(p, options)).collect();
    tracing::debug!(
        primitives = primitives.len(),
        pixels = ptaa.total_points(),
        "rasterized scene"
    );
    ptaa
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgen_core::{CurveAlgorithm, LineAlgorithm, Point, PrimitiveKind};

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let opts = RasterOptions::default();
        let line = Primitive::Line {
            start: Point::new(0, 0),
            end: Point::new(7, 3),
            algorithm: LineAlgorithm::Dda,
        };
        assert_eq!(
            rasterize(&line, &opts),
            line_pta(Point::new(0, 0), Point::new(7, 3), LineAlgorithm::Dda)
        );

        let circle = Primitive::circle(Point::new(5, 5), 4).unwrap();
        assert_eq!(rasterize(&circle, &opts), circle_pta(Point::new(5, 5), 4));
    }

    #[test]
    fn test_rasterize_all_preserves_order() {
        let params = Pta::from_pairs(&[(0, 0), (10, 10), (20, 0)]);
        let scene = vec![
            Primitive::ellipse(Point::new(0, 0), 6, 3).unwrap(),
            Primitive::from_params(PrimitiveKind::Curve, &params, Some("Bezier")).unwrap(),
            Primitive::from_params(PrimitiveKind::Polygon, &params, Some("Naive")).unwrap(),
        ];
        let ptaa = rasterize_all(&scene, &RasterOptions::default());
        assert_eq!(ptaa.len(), 3);
        assert_eq!(
            ptaa.get(1),
            Some(&curve_pta(
                &params,
                CurveAlgorithm::Bezier,
                &RasterOptions::default().curve_sampling
            ))
        );
    }

    #[test]
    fn test_options_reach_polygon() {
        let prim = Primitive::Polygon {
            vertices: Pta::from_pairs(&[(0, 0), (30, 0), (30, 30)]),
            algorithm: LineAlgorithm::Bresenham,
        };
        let open = rasterize(&prim, &RasterOptions::default());
        let closed = rasterize(&prim, &RasterOptions::default().always_close());
        assert!(closed.len() > open.len());
    }
}
