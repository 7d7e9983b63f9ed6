//! Rasterization options
//!
//! Tunables for the rasterizers. The defaults reproduce the fixed
//! behavior: polygons auto-close within a squared distance of 64 and
//! curves are sampled adaptively.

/// Default squared distance under which a polygon's closing edge is drawn
pub const DEFAULT_CLOSE_THRESHOLD_SQ: i64 = 64;

/// Parameter sampling strategy for curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSampling {
    /// Choose the step count from the control polygon so that consecutive
    /// samples are at most one pixel apart on each axis
    #[default]
    Adaptive,
    /// Use exactly this many parameter steps per curve (Bezier) or per
    /// segment (B-spline); gaps are possible for long curves
    Fixed(usize),
}

/// Options for rasterization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterOptions {
    /// A polygon's closing edge (last vertex to first) is drawn only when
    /// the squared distance between them is at most this value
    pub close_threshold_sq: i64,
    /// Curve sampling strategy
    pub curve_sampling: CurveSampling,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            close_threshold_sq: DEFAULT_CLOSE_THRESHOLD_SQ,
            curve_sampling: CurveSampling::Adaptive,
        }
    }
}

impl RasterOptions {
    /// Set the polygon closing threshold (squared distance)
    pub fn close_threshold_sq(mut self, threshold: i64) -> Self {
        self.close_threshold_sq = threshold;
        self
    }

    /// Always draw the closing edge of polygons
    pub fn always_close(self) -> Self {
        self.close_threshold_sq(i64::MAX)
    }

    /// Never draw the closing edge of polygons
    pub fn never_close(self) -> Self {
        self.close_threshold_sq(-1)
    }

    /// Set the curve sampling strategy
    pub fn curve_sampling(mut self, sampling: CurveSampling) -> Self {
        self.curve_sampling = sampling;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RasterOptions::default();
        assert_eq!(opts.close_threshold_sq, 64);
        assert_eq!(opts.curve_sampling, CurveSampling::Adaptive);
    }

    #[test]
    fn test_builders() {
        let opts = RasterOptions::default()
            .close_threshold_sq(100)
            .curve_sampling(CurveSampling::Fixed(32));
        assert_eq!(opts.close_threshold_sq, 100);
        assert_eq!(opts.curve_sampling, CurveSampling::Fixed(32));
        assert_eq!(RasterOptions::default().never_close().close_threshold_sq, -1);
    }
}
