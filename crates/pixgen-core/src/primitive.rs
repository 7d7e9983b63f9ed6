//! Primitive descriptions
//!
//! A [`Primitive`] is a validated, typed form of a parameter list plus its
//! algorithm selector. The front end hands over `(kind, points, tag)`
//! triples; [`Primitive::from_params`] checks the arity rules once so the
//! rasterizers can work on well-formed input.
//!
//! | Kind | Parameters |
//! |---|---|
//! | line | `[start, end]` |
//! | polygon | `[v0, v1, ...]`, at least 2 |
//! | circle | `[center, (0, radius)]`, radius >= 0 |
//! | ellipse | `[center, (rx, ry)]`, rx > 0 and ry > 0 |
//! | curve | `[c0, c1, ...]`, at least 2 |

use std::fmt;
use std::str::FromStr;

use crate::algorithm::{CurveAlgorithm, LineAlgorithm};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::pta::Pta;

/// Kind of primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Line,
    Polygon,
    Circle,
    Ellipse,
    Curve,
}

impl PrimitiveKind {
    /// Lowercase tag of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Curve => "curve",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(Self::Line),
            "polygon" => Ok(Self::Polygon),
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            "curve" => Ok(Self::Curve),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated geometric primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Line segment between two endpoints
    Line {
        start: Point,
        end: Point,
        algorithm: LineAlgorithm,
    },
    /// Chain of edges through the vertices, closed by proximity
    Polygon {
        vertices: Pta,
        algorithm: LineAlgorithm,
    },
    /// Circle outline
    Circle { center: Point, radius: i32 },
    /// Axis-aligned ellipse outline
    Ellipse { center: Point, rx: i32, ry: i32 },
    /// Parametric curve over control points
    Curve {
        control: Pta,
        algorithm: CurveAlgorithm,
    },
}

impl Primitive {
    /// Build a primitive from a parameter list and an optional algorithm tag.
    ///
    /// Lines and polygons require a line tag, curves a curve tag. Circles
    /// and ellipses have a single method; any tag given for them is ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAlgorithm`] if the tag is missing or unknown for the kind.
    /// - [`Error::InvalidParameters`] if the parameter list is malformed.
    pub fn from_params(kind: PrimitiveKind, params: &Pta, tag: Option<&str>) -> Result<Self> {
        match kind {
            PrimitiveKind::Line => {
                let algorithm = parse_tag::<LineAlgorithm>(kind, tag)?;
                let (start, end) = expect_pair(kind, params)?;
                Ok(Self::Line {
                    start,
                    end,
                    algorithm,
                })
            }
            PrimitiveKind::Polygon => {
                let algorithm = parse_tag::<LineAlgorithm>(kind, tag)?;
                expect_at_least(kind, params, 2)?;
                Ok(Self::Polygon {
                    vertices: params.clone(),
                    algorithm,
                })
            }
            PrimitiveKind::Circle => {
                let (center, r) = expect_pair(kind, params)?;
                Self::circle(center, r.y)
            }
            PrimitiveKind::Ellipse => {
                let (center, axes) = expect_pair(kind, params)?;
                Self::ellipse(center, axes.x, axes.y)
            }
            PrimitiveKind::Curve => {
                let algorithm = parse_tag::<CurveAlgorithm>(kind, tag)?;
                expect_at_least(kind, params, 2)?;
                Ok(Self::Curve {
                    control: params.clone(),
                    algorithm,
                })
            }
        }
    }

    /// Build a circle primitive
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if `radius` is negative.
    pub fn circle(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::InvalidParameters(format!(
                "circle radius must be non-negative: {}",
                radius
            )));
        }
        Ok(Self::Circle { center, radius })
    }

    /// Build an ellipse primitive
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] unless both semi-axes are positive.
    pub fn ellipse(center: Point, rx: i32, ry: i32) -> Result<Self> {
        if rx <= 0 || ry <= 0 {
            return Err(Error::InvalidParameters(format!(
                "ellipse semi-axes must be positive: rx={}, ry={}",
                rx, ry
            )));
        }
        Ok(Self::Ellipse { center, rx, ry })
    }

    /// Kind of this primitive
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Polygon { .. } => PrimitiveKind::Polygon,
            Self::Circle { .. } => PrimitiveKind::Circle,
            Self::Ellipse { .. } => PrimitiveKind::Ellipse,
            Self::Curve { .. } => PrimitiveKind::Curve,
        }
    }

    /// Parameter list in the front end's encoding
    pub fn params(&self) -> Pta {
        match self {
            Self::Line { start, end, .. } => Pta::from_points(&[*start, *end]),
            Self::Polygon { vertices, .. } => vertices.clone(),
            Self::Circle { center, radius } => Pta::from_points(&[*center, Point::new(0, *radius)]),
            Self::Ellipse { center, rx, ry } => Pta::from_points(&[*center, Point::new(*rx, *ry)]),
            Self::Curve { control, .. } => control.clone(),
        }
    }

    /// Algorithm tag, for kinds that have one
    pub fn algorithm_tag(&self) -> Option<&'static str> {
        match self {
            Self::Line { algorithm, .. } | Self::Polygon { algorithm, .. } => {
                Some(algorithm.as_str())
            }
            Self::Curve { algorithm, .. } => Some(algorithm.as_str()),
            Self::Circle { .. } | Self::Ellipse { .. } => None,
        }
    }
}

fn parse_tag<T>(kind: PrimitiveKind, tag: Option<&str>) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    match tag {
        Some(tag) => tag.parse(),
        None => Err(Error::InvalidAlgorithm {
            kind: kind.as_str(),
            tag: String::new(),
        }),
    }
}

/// Check that a parameter list holds exactly two points.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] for any other length.
pub fn expect_pair(kind: PrimitiveKind, params: &Pta) -> Result<(Point, Point)> {
    match (params.len(), params.first(), params.last()) {
        (2, Some(a), Some(b)) => Ok((a, b)),
        (n, _, _) => Err(Error::InvalidParameters(format!(
            "{} takes exactly 2 points, got {}",
            kind, n
        ))),
    }
}

/// Check that a parameter list holds at least `min` points.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if it holds fewer.
pub fn expect_at_least(kind: PrimitiveKind, params: &Pta, min: usize) -> Result<()> {
    if params.len() < min {
        return Err(Error::InvalidParameters(format!(
            "{} takes at least {} points, got {}",
            kind,
            min,
            params.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_from_params() {
        let params = Pta::from_pairs(&[(0, 0), (5, 2)]);
        let prim = Primitive::from_params(PrimitiveKind::Line, &params, Some("Bresenham")).unwrap();
        assert_eq!(
            prim,
            Primitive::Line {
                start: Point::new(0, 0),
                end: Point::new(5, 2),
                algorithm: LineAlgorithm::Bresenham
            }
        );
        assert_eq!(prim.params(), params);
        assert_eq!(prim.algorithm_tag(), Some("Bresenham"));
    }

    #[test]
    fn test_line_arity() {
        let params = Pta::from_pairs(&[(0, 0), (5, 2), (7, 7)]);
        let err = Primitive::from_params(PrimitiveKind::Line, &params, Some("DDA")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn test_missing_or_unknown_tag() {
        let params = Pta::from_pairs(&[(0, 0), (5, 2)]);
        assert!(matches!(
            Primitive::from_params(PrimitiveKind::Line, &params, None),
            Err(Error::InvalidAlgorithm { kind: "line", .. })
        ));
        assert!(matches!(
            Primitive::from_params(PrimitiveKind::Curve, &params, Some("DDA")),
            Err(Error::InvalidAlgorithm { kind: "curve", .. })
        ));
    }

    #[test]
    fn test_circle_radius_encoding() {
        let params = Pta::from_pairs(&[(10, 20), (0, 7)]);
        let prim = Primitive::from_params(PrimitiveKind::Circle, &params, None).unwrap();
        assert_eq!(
            prim,
            Primitive::Circle {
                center: Point::new(10, 20),
                radius: 7
            }
        );
        assert_eq!(prim.params(), params);
        assert!(Primitive::circle(Point::ORIGIN, -1).is_err());
    }

    #[test]
    fn test_ellipse_axes_must_be_positive() {
        assert!(Primitive::ellipse(Point::ORIGIN, 10, 5).is_ok());
        assert!(Primitive::ellipse(Point::ORIGIN, 0, 5).is_err());
        assert!(Primitive::ellipse(Point::ORIGIN, 10, -5).is_err());
    }

    #[test]
    fn test_kind_tags() {
        for kind in [
            PrimitiveKind::Line,
            PrimitiveKind::Polygon,
            PrimitiveKind::Circle,
            PrimitiveKind::Ellipse,
            PrimitiveKind::Curve,
        ] {
            assert_eq!(kind.as_str().parse::<PrimitiveKind>().unwrap(), kind);
        }
        assert_eq!(
            "spline".parse::<PrimitiveKind>(),
            Err(Error::InvalidKind("spline".to_string()))
        );
    }
}
