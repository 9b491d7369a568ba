//! Triangles and their circumcircles.

use super::Edge;
use crate::primitives::{Circle2, Line2, Point2};
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle given by its three corner points.
///
/// Vertex order determines the order of [`edges`](Self::edges) but not
/// identity: [`same_vertices`](Self::same_vertices) treats the corners as a set.
///
/// The derived `==` is stricter and compares `a`, `b` and `c` in order, so a
/// rotated copy of a triangle is not `==` to it. Use `same_vertices` for the
/// unordered comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle<F> {
    /// First vertex
    pub a: Point2<F>,
    /// Second vertex
    pub b: Point2<F>,
    /// Third vertex
    pub c: Point2<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the three vertices in order.
    #[inline]
    pub fn points(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges A-B, B-C, C-A.
    #[inline]
    pub fn edges(&self) -> [Edge<F>; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Computes the circumcenter, the point equidistant from all three vertices.
    ///
    /// The center is found as the intersection of the perpendicular bisectors
    /// of sides AB and AC. Returns `None` when the vertices are collinear
    /// within `eps`, in which case the bisectors are parallel. `eps` bounds the
    /// sine of the angle between the bisectors.
    ///
    /// # Example
    ///
    /// ```
    /// use tessella::triangulation::Triangle;
    /// use tessella::Point2;
    ///
    /// let tri = Triangle::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(0.0, 2.0),
    /// );
    /// let center = tri.circumcenter(1e-10).unwrap();
    /// assert!(center.approx_eq(Point2::new(2.0, 1.0), 1e-12));
    ///
    /// let flat = Triangle::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    /// );
    /// assert!(flat.circumcenter(1e-10).is_none());
    /// ```
    pub fn circumcenter(&self, eps: F) -> Option<Point2<F>> {
        let bisector_ab = Line2::perpendicular_bisector(self.a, self.b);
        let bisector_ac = Line2::perpendicular_bisector(self.a, self.c);
        bisector_ab.intersect_line(&bisector_ac, eps)
    }

    /// Computes the circumcircle. The radius is the distance from the
    /// circumcenter to vertex A.
    ///
    /// Returns `None` when [`circumcenter`](Self::circumcenter) does.
    #[inline]
    pub fn circumcircle(&self, eps: F) -> Option<Circle2<F>> {
        self.circumcenter(eps)
            .map(|center| Circle2::new(center, center.distance(self.a)))
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// Points exactly on the circle are not contained, and neither are the
    /// triangle's own vertices whatever rounding does to their distance. A
    /// triangle whose circumcircle is undefined (collinear within `eps`)
    /// contains nothing.
    #[inline]
    pub fn contains_in_circumcircle(&self, p: Point2<F>, eps: F) -> bool {
        if self.has_vertex(p, F::zero()) {
            return false;
        }
        self.circumcircle(eps)
            .is_some_and(|circle| circle.contains_strict(p))
    }

    /// Returns `true` if `p` equals one of the vertices within `eps`.
    #[inline]
    pub fn has_vertex(&self, p: Point2<F>, eps: F) -> bool {
        self.a.approx_eq(p, eps) || self.b.approx_eq(p, eps) || self.c.approx_eq(p, eps)
    }

    /// Returns `true` if any vertex of `self` equals any vertex of `other`
    /// within `eps`.
    #[inline]
    pub fn shares_vertex_with(&self, other: &Self, eps: F) -> bool {
        other.points().iter().any(|&p| self.has_vertex(p, eps))
    }

    /// Returns `true` if both triangles have the same vertex set within `eps`,
    /// regardless of vertex order.
    pub fn same_vertices(&self, other: &Self, eps: F) -> bool {
        let pair_matches = |p: Point2<F>, q: Point2<F>, r: Point2<F>, s: Point2<F>| {
            (p.approx_eq(r, eps) && q.approx_eq(s, eps))
                || (p.approx_eq(s, eps) && q.approx_eq(r, eps))
        };

        if self.a.approx_eq(other.a, eps) {
            pair_matches(self.b, self.c, other.b, other.c)
        } else if self.a.approx_eq(other.b, eps) {
            pair_matches(self.b, self.c, other.a, other.c)
        } else if self.a.approx_eq(other.c, eps) {
            pair_matches(self.b, self.c, other.a, other.b)
        } else {
            false
        }
    }

    /// Returns twice the signed area; positive for counter-clockwise winding.
    #[inline]
    fn doubled_signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Returns the signed area, positive when the vertices wind counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> F {
        self.doubled_signed_area() / (F::one() + F::one())
    }

    /// Returns the unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (average of the three vertices).
    #[inline]
    pub fn centroid(&self) -> Point2<F> {
        let three = F::one() + F::one() + F::one();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Returns `true` if the vertices wind counter-clockwise.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.doubled_signed_area() > F::zero()
    }

    /// Returns the same triangle wound counter-clockwise.
    ///
    /// Vertex A is kept in place; B and C are swapped if needed.
    #[inline]
    pub fn to_ccw(self) -> Self {
        if self.doubled_signed_area() < F::zero() {
            Self::new(self.a, self.c, self.b)
        } else {
            self
        }
    }

    /// Returns `true` if the vertices are collinear within `eps`
    /// (see [`orient2d`]).
    #[inline]
    pub fn is_degenerate(&self, eps: F) -> bool {
        orient2d(self.a, self.b, self.c, eps) == Orientation::Collinear
    }

    /// Returns `true` if `p` lies inside the triangle or on its boundary.
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        let d1 = (self.b - self.a).cross(p - self.a);
        let d2 = (self.c - self.b).cross(p - self.b);
        let d3 = (self.a - self.c).cross(p - self.c);

        let zero = F::zero();
        let has_neg = d1 < zero || d2 < zero || d3 < zero;
        let has_pos = d1 > zero || d2 > zero || d3 > zero;

        !(has_neg && has_pos)
    }
}
