//! Integer pixel coordinates

/// A 2D point with integer coordinates.
///
/// Used both for primitive parameters (vertices, centers, control points)
/// and for rasterizer output (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Computed in `i64`; saturates at `i64::MAX` for points at opposite
    /// ends of the `i32` range.
    #[inline]
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Return the point offset by (dx, dy), saturating at the `i32` range
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Return the point with x and y swapped
    #[inline]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
