//! Undirected triangle edges.

use crate::primitives::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge between two points.
///
/// Equality ignores endpoint order: `Edge::new(a, b) == Edge::new(b, a)`.
/// Use [`eq_within`](Self::eq_within) when the endpoints come out of
/// floating-point arithmetic and may have drifted.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<F> {
    /// First endpoint
    pub a: Point2<F>,
    /// Second endpoint
    pub b: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates an edge between two points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self { a, b }
    }

    /// Returns `true` if both edges join the same two points within `eps`,
    /// in either order.
    ///
    /// Each coordinate is compared independently against `eps`.
    ///
    /// # Example
    ///
    /// ```
    /// use tessella::triangulation::Edge;
    /// use tessella::Point2;
    ///
    /// let e1 = Edge::new(Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0));
    /// let e2 = Edge::new(Point2::new(1.0, 1.0 + 1e-9), Point2::new(0.0, 0.0));
    /// assert!(e1.eq_within(&e2, 1e-6));
    /// assert!(!e1.eq_within(&e2, 1e-12));
    /// ```
    #[inline]
    pub fn eq_within(&self, other: &Self, eps: F) -> bool {
        (self.a.approx_eq(other.a, eps) && self.b.approx_eq(other.b, eps))
            || (self.a.approx_eq(other.b, eps) && self.b.approx_eq(other.a, eps))
    }

    /// Returns `true` if `p` is one of the endpoints within `eps`.
    #[inline]
    pub fn has_endpoint(&self, p: Point2<F>, eps: F) -> bool {
        self.a.approx_eq(p, eps) || self.b.approx_eq(p, eps)
    }

    /// Returns the length of the edge.
    #[inline]
    pub fn length(&self) -> F {
        self.a.distance(self.b)
    }

    /// Returns the midpoint of the edge.
    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.a.midpoint(self.b)
    }

    /// Returns the same edge with its endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl<F: Float> PartialEq for Edge<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Edge<F> {
    fn from((a, b): (Point2<F>, Point2<F>)) -> Self {
        Self::new(a, b)
    }
}
