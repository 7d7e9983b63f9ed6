//! Transforms over whole primitives
//!
//! Point-list transforms are blind to what the points encode. Here each
//! primitive kind gets the semantics of its parameters: circle radii and
//! ellipse semi-axes are lengths, not positions.

use pixgen_core::{Primitive, PrimitiveKind};

use crate::affine::Transform;
use crate::{TransformError, TransformResult};

/// Scale a length, rounding to the nearest integer.
fn scale_length(len: i32, factor: f64) -> i32 {
    (len as f64 * factor).round() as i32
}

/// Apply a transform to a primitive.
///
/// - Lines, polygons and curves transform every vertex.
/// - Circles transform the center; scaling also scales the radius, which
///   is kept non-negative.
/// - Ellipses transform the center; scaling also scales both semi-axes,
///   each kept at least 1.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] when rotating an ellipse,
/// which would no longer be axis-aligned.
pub fn transform_primitive(primitive: &Primitive, transform: &Transform) -> TransformResult<Primitive> {
    tracing::trace!(kind = %primitive.kind(), ?transform, "transform primitive");
    let out = match primitive {
        Primitive::Line {
            start,
            end,
            algorithm,
        } => Primitive::Line {
            start: transform.apply_point(*start),
            end: transform.apply_point(*end),
            algorithm: *algorithm,
        },
        Primitive::Polygon {
            vertices,
            algorithm,
        } => Primitive::Polygon {
            vertices: transform.apply(vertices),
            algorithm: *algorithm,
        },
        Primitive::Curve { control, algorithm } => Primitive::Curve {
            control: transform.apply(control),
            algorithm: *algorithm,
        },
        Primitive::Circle { center, radius } => {
            let radius = match *transform {
                Transform::Scale { factor, .. } => scale_length(*radius, factor).max(0),
                Transform::Translate { .. } | Transform::Rotate { .. } => *radius,
            };
            Primitive::Circle {
                center: transform.apply_point(*center),
                radius,
            }
        }
        Primitive::Ellipse { center, rx, ry } => {
            let (rx, ry) = match *transform {
                Transform::Scale { factor, .. } => (
                    scale_length(*rx, factor).max(1),
                    scale_length(*ry, factor).max(1),
                ),
                Transform::Translate { .. } => (*rx, *ry),
                Transform::Rotate { degrees, .. } => {
                    return Err(TransformError::InvalidParameters(format!(
                        "cannot rotate an {} by {} degrees: only axis-aligned ellipses are supported",
                        PrimitiveKind::Ellipse,
                        degrees
                    )));
                }
            };
            Primitive::Ellipse {
                center: transform.apply_point(*center),
                rx,
                ry,
            }
        }
    };
    Ok(out)
}
