//! Polygon rasterization
//!
//! A polygon is rasterized as the concatenation of its edges, each drawn
//! with the line rasterizer. The closing edge (last vertex back to the
//! first) is only drawn when the two vertices are already close: within
//! the squared-distance threshold of [`RasterOptions`] (64 by default).
//! Callers wanting a guaranteed closed outline supply a last vertex near
//! the first, or raise the threshold.
//!
//! Pixels shared by adjacent edges are emitted once per edge.

use pixgen_core::{LineAlgorithm, PrimitiveKind, Pta, RasterOptions, expect_at_least};

use crate::DrawResult;
use crate::line::line_pta;

/// Rasterize the edges of a vertex chain.
///
/// # Arguments
///
/// * `vertices` - Vertex list in drawing order
/// * `algorithm` - Line stepping algorithm for every edge
/// * `close_threshold_sq` - Closing edge is drawn iff squared distance
///   between last and first vertex is at most this value
pub fn polygon_pta(vertices: &Pta, algorithm: LineAlgorithm, close_threshold_sq: i64) -> Pta {
    let mut result = Pta::new();
    let pts = vertices.to_points();

    for edge in pts.windows(2) {
        result.join(&line_pta(edge[0], edge[1], algorithm));
    }

    if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
        let gap = last.distance_sq(first);
        if gap <= close_threshold_sq {
            result.join(&line_pta(last, first, algorithm));
        } else {
            tracing::debug!(gap, threshold = close_threshold_sq, "polygon left open");
        }
    }

    result
}

/// Rasterize a polygon given as a vertex parameter list, using the default
/// closing threshold.
///
/// # Errors
///
/// Returns an invalid-parameters error if fewer than 2 vertices are given.
pub fn draw_polygon(params: &Pta, algorithm: LineAlgorithm) -> DrawResult<Pta> {
    draw_polygon_with_options(params, algorithm, &RasterOptions::default())
}

/// Rasterize a polygon with explicit options.
///
/// # Errors
///
/// Returns an invalid-parameters error if fewer than 2 vertices are given.
pub fn draw_polygon_with_options(
    params: &Pta,
    algorithm: LineAlgorithm,
    options: &RasterOptions,
) -> DrawResult<Pta> {
    expect_at_least(PrimitiveKind::Polygon, params, 2)?;
    let pta = polygon_pta(params, algorithm, options.close_threshold_sq);
    tracing::trace!(
        %algorithm,
        vertices = params.len(),
        pixels = pta.len(),
        "rasterized polygon"
    );
    Ok(pta)
}
