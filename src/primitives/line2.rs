//! 2D infinite line type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use tessella::primitives::{Line2, Point2};
///
/// // Perpendicular bisectors of two sides meet at the circumcenter
/// let a = Point2::new(0.0_f64, 0.0);
/// let l1 = Line2::perpendicular_bisector(a, Point2::new(2.0, 0.0));
/// let l2 = Line2::perpendicular_bisector(a, Point2::new(0.0, 2.0));
/// let hit = l1.intersect_line(&l2, 1e-12).unwrap();
/// assert!(hit.approx_eq(Point2::new(1.0, 1.0), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self {
            origin: p1,
            direction: p2 - p1,
        }
    }

    /// Returns the line through `point` perpendicular to this one.
    #[inline]
    pub fn perpendicular_at(&self, point: Point2<F>) -> Self {
        Self {
            origin: point,
            direction: self.direction.perpendicular(),
        }
    }

    /// Returns the perpendicular bisector of the segment from `a` to `b`.
    #[inline]
    pub fn perpendicular_bisector(a: Point2<F>, b: Point2<F>) -> Self {
        Self::from_points(a, b).perpendicular_at(a.midpoint(b))
    }

    /// Returns the point at parameter `t` along the line.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Returns `true` if the lines are parallel within `eps`.
    ///
    /// `eps` bounds the sine of the angle between the two directions, so the
    /// test does not depend on the scale of the coordinates. Zero-length
    /// directions count as parallel to everything.
    #[inline]
    pub fn is_parallel(&self, other: &Line2<F>, eps: F) -> bool {
        let cross = self.direction.cross(other.direction);
        cross.abs() <= eps * self.direction.magnitude() * other.direction.magnitude()
    }

    /// Intersects two lines.
    ///
    /// Returns `None` when the lines are parallel within `eps` (see
    /// [`is_parallel`](Self::is_parallel)).
    pub fn intersect_line(&self, other: &Line2<F>, eps: F) -> Option<Point2<F>> {
        if self.is_parallel(other, eps) {
            return None;
        }

        let cross = self.direction.cross(other.direction);
        let delta = other.origin - self.origin;
        let t = delta.cross(other.direction) / cross;

        Some(self.point_at(t))
    }
}
