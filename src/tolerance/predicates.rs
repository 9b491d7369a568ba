//! Geometric predicates with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if the three points are on one line within `eps`
///
/// `eps` bounds the sine of the angle at `a`: the cross product of `b - a` and
/// `c - a` is compared against `eps * |b - a| * |c - a|`. The test therefore
/// gives the same answer for a point set and any uniformly scaled copy of it.
/// Coincident points are always `Collinear`.
///
/// # Example
///
/// ```
/// use tessella::tolerance::{orient2d, Orientation};
/// use tessella::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0), 1e-10), Orientation::CounterClockwise);
/// assert_eq!(orient2d(a, b, Point2::new(2.0, 0.0), 1e-10), Orientation::Collinear);
/// ```
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(ac);
    let threshold = eps * ab.magnitude() * ac.magnitude();

    if cross > threshold {
        Orientation::CounterClockwise
    } else if cross < -threshold {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
