//! Pta, Ptaa - Point arrays
//!
//! Arrays of integer coordinate pairs. A `Pta` carries both the parameter
//! list of a primitive (vertices, center + radius, control points) and the
//! pixel list a rasterizer produces.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout).

use crate::error::{Error, Result};
use crate::point::Point;

/// Array of points.
///
/// Stores 2D integer points as parallel x/y coordinate vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pta {
    /// X coordinates
    x: Vec<i32>,
    /// Y coordinates
    y: Vec<i32>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Create a Pta from a slice of points.
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().copied().collect()
    }

    /// Create a Pta from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Self {
        pairs.iter().map(|&p| Point::from(p)).collect()
    }

    /// Create a Pta from coordinate vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if `x` and `y` have different lengths.
    pub fn from_vecs(x: Vec<i32>, y: Vec<i32>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::InvalidParameters(format!(
                "coordinate vectors differ in length: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Get a point by index, reporting out-of-range access as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn point(&self, index: usize) -> Result<Point> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// First point, if any.
    pub fn first(&self) -> Option<Point> {
        self.get(0)
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Add a point given by coordinates.
    pub fn push(&mut self, x: i32, y: i32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Add a point.
    pub fn push_point(&mut self, p: Point) {
        self.push(p.x, p.y);
    }

    /// Append all points of `other`, in order.
    pub fn join(&mut self, other: &Pta) {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
    }

    /// Copy the points out as a vector.
    pub fn to_points(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Return `true` if `p` occurs anywhere in the array.
    pub fn contains(&self, p: Point) -> bool {
        self.iter().any(|q| q == p)
    }

    /// Compute the bounding box.
    ///
    /// Returns `(x_min, y_min, x_max, y_max)` with inclusive bounds, or
    /// `None` if empty.
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        let x_min = *self.x.iter().min()?;
        let x_max = *self.x.iter().max()?;
        let y_min = *self.y.iter().min()?;
        let y_max = *self.y.iter().max()?;
        Some((x_min, y_min, x_max, y_max))
    }

    /// Return the points as a sorted set with duplicates removed.
    ///
    /// Rasterizers that build shapes by reflection emit shared pixels more
    /// than once; this is the form to compare such outputs as sets.
    pub fn unique(&self) -> Vec<Point> {
        let mut pts = self.to_points();
        pts.sort_unstable();
        pts.dedup();
        pts
    }

    /// Return a new Pta with every point mapped through `f`.
    pub fn map<F: FnMut(Point) -> Point>(&self, f: F) -> Pta {
        self.iter().map(f).collect()
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> PtaIter<'_> {
        PtaIter {
            pta: self,
            index: 0,
        }
    }
}

/// Iterator over Pta points.
pub struct PtaIter<'a> {
    pta: &'a Pta,
    index: usize,
}

impl Iterator for PtaIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let pt = self.pta.get(self.index)?;
        self.index += 1;
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pta.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PtaIter<'_> {}

impl<'a> IntoIterator for &'a Pta {
    type Item = Point;
    type IntoIter = PtaIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point> for Pta {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let capacity = upper.unwrap_or(lower);

        let mut pta = Self::with_capacity(capacity);
        for p in iter {
            pta.push_point(p);
        }
        pta
    }
}

impl Extend<Point> for Pta {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        for p in iter {
            self.push_point(p);
        }
    }
}

/// Array of Pta.
///
/// Holds one pixel list per primitive when a whole scene is rasterized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ptaa {
    ptas: Vec<Pta>,
}

impl Ptaa {
    /// Create a new empty Ptaa.
    pub fn new() -> Self {
        Self { ptas: Vec::new() }
    }

    /// Get the number of Pta.
    #[inline]
    pub fn len(&self) -> usize {
        self.ptas.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ptas.is_empty()
    }

    /// Get a Pta by index.
    pub fn get(&self, index: usize) -> Option<&Pta> {
        self.ptas.get(index)
    }

    /// Add a Pta.
    pub fn push(&mut self, pta: Pta) {
        self.ptas.push(pta);
    }

    /// Get total number of points across all Pta.
    pub fn total_points(&self) -> usize {
        self.ptas.iter().map(Pta::len).sum()
    }

    /// Flatten into a single Pta.
    pub fn flatten(&self) -> Pta {
        let mut result = Pta::with_capacity(self.total_points());
        for pta in &self.ptas {
            result.join(pta);
        }
        result
    }

    /// Create an iterator over Pta.
    pub fn iter(&self) -> impl Iterator<Item = &Pta> {
        self.ptas.iter()
    }
}

impl FromIterator<Pta> for Ptaa {
    fn from_iter<T: IntoIterator<Item = Pta>>(iter: T) -> Self {
        Self {
            ptas: iter.into_iter().collect(),
        }
    }
}
