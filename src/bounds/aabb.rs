//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        self.width().max(self.height())
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if this AABB contains the given point (boundary inclusive).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.max_extent(), 10.0);
        assert_eq!(aabb.center(), Point2::new(5.0, 2.5));
    }

    #[test]
    fn test_single_point_has_zero_extent() {
        let aabb: Aabb2<f64> = Aabb2::from_point(Point2::new(3.0, 3.0));
        assert_eq!(aabb.max_extent(), 0.0);
        assert!(aabb.contains_point(Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_contains_point() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        assert!(aabb.contains_point(Point2::new(5.0, 5.0)));
        assert!(aabb.contains_point(Point2::new(0.0, 0.0))); // On boundary
        assert!(!aabb.contains_point(Point2::new(-1.0, 5.0)));
        assert!(!aabb.contains_point(Point2::new(5.0, 11.0)));
    }
}
