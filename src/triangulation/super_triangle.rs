//! The enclosing triangle that seeds Bowyer-Watson insertion.
//!
//! The three super vertices are treated as points at infinity. Each one is
//! `center + M * direction` for a symbolic distance `M`, and every predicate
//! that involves them is evaluated as a polynomial in `M` whose sign is taken
//! from the highest non-vanishing coefficient. That is the limit of making the
//! super-triangle ever larger, so hull triangles are never lost to a super
//! vertex sitting inside their circumcircle.
//!
//! The finite stand-in vertices returned by [`SuperTriangle::triangle`] only
//! identify super vertices in the mesh; their coordinates never enter a
//! predicate.

use super::Triangle;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

/// Directions of the super vertices, in degrees, counter-clockwise.
///
/// The gaps are uneven so that no pair of directions differs by an axis
/// aligned vector, which keeps ties out of the in-circle limit for grid input.
const DIRECTION_ANGLES: [f64; 3] = [215.0, 340.0, 100.0];

/// Number of coefficients kept; predicates never exceed degree four in `M`.
const COEFFICIENTS: usize = 5;

/// A polynomial in the symbolic distance `M`, lowest degree first, paired
/// with a coefficient-wise bound on the magnitude of the terms that were
/// summed into it.
#[derive(Debug, Clone, Copy)]
struct Expansion<F> {
    value: [F; COEFFICIENTS],
    bound: [F; COEFFICIENTS],
}

impl<F: Float> Expansion<F> {
    /// `constant + slope * M`
    fn linear(constant: F, slope: F) -> Self {
        let mut value = [F::zero(); COEFFICIENTS];
        value[0] = constant;
        value[1] = slope;
        Self {
            value,
            bound: value.map(F::abs),
        }
    }

    /// Sign of the highest coefficient that is not lost in rounding.
    ///
    /// A coefficient counts as zero when it is within `eps` times the
    /// magnitude of its terms.
    fn sign(&self, eps: F) -> Ordering {
        for k in (0..COEFFICIENTS).rev() {
            let c = self.value[k];
            if c.abs() > eps * self.bound[k] {
                return if c > F::zero() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }
        Ordering::Equal
    }
}

impl<F: Float> Add for Expansion<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for k in 0..COEFFICIENTS {
            out.value[k] = self.value[k] + rhs.value[k];
            out.bound[k] = self.bound[k] + rhs.bound[k];
        }
        out
    }
}

impl<F: Float> Sub for Expansion<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for k in 0..COEFFICIENTS {
            out.value[k] = self.value[k] - rhs.value[k];
            out.bound[k] = self.bound[k] + rhs.bound[k];
        }
        out
    }
}

impl<F: Float> Mul for Expansion<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut value = [F::zero(); COEFFICIENTS];
        let mut bound = [F::zero(); COEFFICIENTS];
        for i in 0..COEFFICIENTS {
            for j in 0..COEFFICIENTS - i {
                value[i + j] = value[i + j] + self.value[i] * rhs.value[j];
                bound[i + j] = bound[i + j] + self.bound[i] * rhs.bound[j];
            }
        }
        Self { value, bound }
    }
}

/// A mesh vertex as `base + M * direction`. Real points have no direction.
#[derive(Debug, Clone, Copy)]
struct Lifted<F> {
    base: Point2<F>,
    direction: Vec2<F>,
    at_infinity: bool,
}

impl<F: Float> Lifted<F> {
    /// Coordinates of `self - origin` as polynomials in `M`.
    fn relative_to(&self, origin: &Lifted<F>) -> (Expansion<F>, Expansion<F>) {
        let offset = self.base - origin.base;
        let slope = self.direction - origin.direction;
        (
            Expansion::linear(offset.x, slope.x),
            Expansion::linear(offset.y, slope.y),
        )
    }
}

/// Super-triangle with vertices at infinity around a bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SuperTriangle<F> {
    stand_ins: Triangle<F>,
    center: Point2<F>,
    directions: [Vec2<F>; 3],
}

impl<F: Float> SuperTriangle<F> {
    /// Builds the super-triangle for points inside `bounds`.
    ///
    /// The stand-in vertices lie `margin` times the larger box side away from
    /// the box centre. For a margin of at least 2 they enclose the box and
    /// cannot coincide with an input point.
    pub fn around(bounds: Aabb2<F>, margin: F) -> Self {
        let center = bounds.center();
        let reach = margin * bounds.max_extent();
        let directions = DIRECTION_ANGLES.map(|deg| {
            let (sin, cos) = F::from(deg).unwrap().to_radians().sin_cos();
            Vec2::new(cos, sin)
        });

        let [a, b, c] = directions.map(|d| center + d * reach);
        Self {
            stand_ins: Triangle::new(a, b, c),
            center,
            directions,
        }
    }

    /// Returns the finite stand-in triangle, counter-clockwise.
    #[inline]
    pub fn triangle(&self) -> Triangle<F> {
        self.stand_ins
    }

    /// Returns `true` if `p` is one of the stand-in vertices.
    #[inline]
    pub fn is_super_vertex(&self, p: Point2<F>) -> bool {
        self.stand_ins.has_vertex(p, F::zero())
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle of
    /// `triangle`, with super vertices taken at infinity.
    ///
    /// Triangles made only of input points use
    /// [`Triangle::contains_in_circumcircle`]. A triangle with one super
    /// vertex contains the open half-plane beyond its real edge on the side
    /// of that vertex, plus the interior of the edge itself. The triangle of
    /// all three super vertices contains every point. A triangle's own
    /// vertices are never contained.
    pub fn contains_in_circumcircle(&self, triangle: &Triangle<F>, p: Point2<F>, eps: F) -> bool {
        if triangle.has_vertex(p, F::zero()) {
            return false;
        }

        let vertices = triangle.points().map(|v| self.lift(v));
        match vertices.iter().filter(|v| v.at_infinity).count() {
            0 => triangle.contains_in_circumcircle(p, eps),
            3 => true,
            _ => {
                let orientation = orientation(&vertices).sign(eps);
                let incircle = incircle(&vertices, &self.lift(p)).sign(eps);
                orientation != Ordering::Equal && orientation == incircle
            }
        }
    }

    fn lift(&self, p: Point2<F>) -> Lifted<F> {
        let stand_ins = self.stand_ins.points();
        match stand_ins.iter().position(|&s| s == p) {
            Some(k) => Lifted {
                base: self.center,
                direction: self.directions[k],
                at_infinity: true,
            },
            None => Lifted {
                base: p,
                direction: Vec2::zero(),
                at_infinity: false,
            },
        }
    }
}

/// Twice the signed area of `(a, b, c)`, positive when counter-clockwise.
fn orientation<F: Float>([a, b, c]: &[Lifted<F>; 3]) -> Expansion<F> {
    let (bx, by) = b.relative_to(a);
    let (cx, cy) = c.relative_to(a);
    bx * cy - by * cx
}

/// In-circle determinant of `p` against `(a, b, c)`: positive when `p` is
/// inside and the triangle is counter-clockwise.
fn incircle<F: Float>([a, b, c]: &[Lifted<F>; 3], p: &Lifted<F>) -> Expansion<F> {
    let (ax, ay) = a.relative_to(p);
    let (bx, by) = b.relative_to(p);
    let (cx, cy) = c.relative_to(p);
    let al = ax * ax + ay * ay;
    let bl = bx * bx + by * by;
    let cl = cx * cx + cy * cy;

    ax * (by * cl - bl * cy) - ay * (bx * cl - bl * cx) + al * (bx * cy - by * cx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn unit_box() -> SuperTriangle<f64> {
        SuperTriangle::around(Aabb2::new(p(0.0, 0.0), p(1.0, 1.0)), 10.0)
    }

    #[test]
    fn test_stand_ins_enclose_box() {
        let st = unit_box();
        let tri = st.triangle();
        assert!(tri.is_ccw());
        for corner in [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)] {
            assert!(tri.contains_point(corner));
            assert!(!st.is_super_vertex(corner));
        }
        for v in tri.points() {
            assert!(st.is_super_vertex(v));
        }
    }

    #[test]
    fn test_minimum_margin_encloses_box() {
        let st = SuperTriangle::around(Aabb2::new(p(-3.0, 2.0), p(5.0, 4.0)), 2.0);
        for corner in [p(-3.0, 2.0), p(5.0, 2.0), p(5.0, 4.0), p(-3.0, 4.0)] {
            assert!(st.triangle().contains_point(corner));
        }
    }

    #[test]
    fn test_all_super_triangle_contains_everything() {
        let st = unit_box();
        assert!(st.contains_in_circumcircle(&st.triangle(), p(0.5, 0.5), EPS));
        assert!(st.contains_in_circumcircle(&st.triangle(), p(1e6, -1e6), EPS));
    }

    #[test]
    fn test_one_super_vertex_is_a_half_plane() {
        let st = unit_box();
        let [s, _, _] = st.triangle().points();
        let u = p(0.0, 0.0);
        let v = p(1.0, 0.0);
        // s points down and to the left, so it lies below the edge u-v
        let tri = Triangle::new(u, v, s);

        assert!(st.contains_in_circumcircle(&tri, p(0.5, -0.001), EPS));
        assert!(st.contains_in_circumcircle(&tri, p(500.0, -0.001), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(0.5, 0.001), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(0.5, 1000.0), EPS));

        // On the edge line: inside between the endpoints only
        assert!(st.contains_in_circumcircle(&tri, p(0.5, 0.0), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(2.0, 0.0), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(-1.0, 0.0), EPS));

        // Own vertices are never inside
        assert!(!st.contains_in_circumcircle(&tri, u, EPS));
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let st = unit_box();
        let [s0, s1, _] = st.triangle().points();
        let a = p(0.3, 0.4);
        let ccw = Triangle::new(a, s0, s1);
        let cw = Triangle::new(a, s1, s0);
        for q in [p(0.3, 0.0), p(0.3, 1.0), p(-5.0, 0.4), p(5.0, 0.41)] {
            assert_eq!(
                st.contains_in_circumcircle(&ccw, q, EPS),
                st.contains_in_circumcircle(&cw, q, EPS)
            );
        }
    }

    #[test]
    fn test_two_super_vertices_split_plane_through_real_vertex() {
        let st = unit_box();
        let [s0, s1, _] = st.triangle().points();
        let a = p(0.5, 0.5);
        let tri = Triangle::new(a, s0, s1);

        // s0 and s1 are both below the box, so points far below are inside
        // and points far above are not
        assert!(st.contains_in_circumcircle(&tri, p(0.5, -100.0), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(0.5, 100.0), EPS));
    }

    #[test]
    fn test_real_triangles_use_the_circumcircle() {
        let st = unit_box();
        let tri = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        assert!(st.contains_in_circumcircle(&tri, p(0.9, 0.9), EPS));
        assert!(!st.contains_in_circumcircle(&tri, p(1.1, 1.1), EPS));
    }

    #[test]
    fn test_expansion_sign_uses_highest_coefficient() {
        let e = Expansion::linear(5.0_f64, -1e-3);
        assert_eq!(e.sign(EPS), Ordering::Less);
        let flat = Expansion::linear(-2.0_f64, 0.0);
        assert_eq!(flat.sign(EPS), Ordering::Less);
        let zero = Expansion::linear(0.0_f64, 0.0);
        assert_eq!(zero.sign(EPS), Ordering::Equal);

        let sq = Expansion::linear(1.0_f64, 2.0) * Expansion::linear(1.0, 2.0);
        assert_eq!(sq.value[..3], [1.0, 4.0, 4.0]);
        // Terms that cancel exactly are zero
        assert_eq!((sq - sq).sign(EPS), Ordering::Equal);
    }
}
