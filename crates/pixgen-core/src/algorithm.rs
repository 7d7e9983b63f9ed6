//! Algorithm selectors
//!
//! Closed enumerations naming the stepping algorithm a rasterizer or
//! clipper uses. Each one parses from the tag names the front end passes
//! around and renders back to the canonical tag.
//!
//! | Enum | Tags |
//! |---|---|
//! | [`LineAlgorithm`] | `Naive`, `DDA`, `Bresenham` |
//! | [`CurveAlgorithm`] | `Bezier`, `B-spline` |
//! | [`ClipAlgorithm`] | `Cohen-Sutherland`, `Liang-Barsky` |
//!
//! An unknown tag is an [`Error::InvalidAlgorithm`]; there is no fallback.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Line stepping algorithm, shared by lines and polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Sample y = f(x) at every integer x
    Naive,
    /// Digital differential analyzer, stepping along the dominant axis
    Dda,
    /// Bresenham's integer-only algorithm
    Bresenham,
}

impl LineAlgorithm {
    /// All line algorithms, in tag order
    pub const ALL: [LineAlgorithm; 3] = [Self::Naive, Self::Dda, Self::Bresenham];

    /// Canonical tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Naive" => Ok(Self::Naive),
            "DDA" => Ok(Self::Dda),
            "Bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::InvalidAlgorithm {
                kind: "line",
                tag: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveAlgorithm {
    /// Bezier curve of degree `n - 1` over `n` control points
    Bezier,
    /// Uniform cubic B-spline (does not interpolate the end points)
    BSpline,
}

impl CurveAlgorithm {
    /// Canonical tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Bezier" => Ok(Self::Bezier),
            "B-spline" | "B_spline" | "UniformBSpline" => Ok(Self::BSpline),
            _ => Err(Error::InvalidAlgorithm {
                kind: "curve",
                tag: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line clipping algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipAlgorithm {
    /// Region outcodes with iterative edge intersection
    CohenSutherland,
    /// Parametric entry/exit fractions
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Both clip algorithms
    pub const ALL: [ClipAlgorithm; 2] = [Self::CohenSutherland, Self::LiangBarsky];

    /// Canonical tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Cohen-Sutherland" => Ok(Self::CohenSutherland),
            "Liang-Barsky" => Ok(Self::LiangBarsky),
            _ => Err(Error::InvalidAlgorithm {
                kind: "clip",
                tag: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tags() {
        for alg in LineAlgorithm::ALL {
            assert_eq!(alg.as_str().parse::<LineAlgorithm>().unwrap(), alg);
        }
        assert_eq!("DDA".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("dda".parse::<LineAlgorithm>().is_err());
        assert!("bezier".parse::<CurveAlgorithm>().is_err());
    }

    #[test]
    fn test_unknown_tag_is_invalid_algorithm() {
        let err = "Wu".parse::<LineAlgorithm>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAlgorithm {
                kind: "line",
                tag: "Wu".to_string()
            }
        );
        assert!(matches!(
            "Sutherland-Hodgman".parse::<ClipAlgorithm>(),
            Err(Error::InvalidAlgorithm { kind: "clip", .. })
        ));
    }

    #[test]
    fn test_curve_tag_spellings() {
        for tag in ["B-spline", "B_spline", "UniformBSpline"] {
            assert_eq!(tag.parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::BSpline);
        }
        assert_eq!(CurveAlgorithm::BSpline.to_string(), "B-spline");
    }

    #[test]
    fn test_clip_tags() {
        for alg in ClipAlgorithm::ALL {
            assert_eq!(alg.to_string().parse::<ClipAlgorithm>().unwrap(), alg);
        }
    }
}
