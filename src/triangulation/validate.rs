//! Checks on a finished triangulation.
//!
//! These are brute-force O(n·t) scans meant for tests and debugging, not for
//! use inside the insertion loop.
//!
//! # Example
//!
//! ```
//! use tessella::triangulation::{edge_usage, find_delaunay_violations, triangulate};
//! use tessella::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(0.0, 1.5),
//!     Point2::new(0.8, 0.6),
//! ];
//! let triangles = triangulate(&points).unwrap();
//!
//! assert!(find_delaunay_violations(&triangles, &points, 1e-10, 1e-9).is_empty());
//! assert!(edge_usage(&triangles, 1e-6).iter().all(|&(_, n)| n <= 2));
//! ```

use super::{Edge, Triangle};
use crate::primitives::Point2;
use num_traits::Float;

/// An input point found strictly inside a triangle's circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaunayViolation {
    /// Index of the offending triangle.
    pub triangle: usize,
    /// Index of the point inside its circumcircle.
    pub point: usize,
}

/// Finds every (triangle, point) pair breaking the empty-circumcircle
/// property.
///
/// A point counts as inside when its distance to the circumcenter is less
/// than `radius * (1 - slack)`, so `slack` is relative to the circle size.
/// Vertices of the triangle itself are ignored, as are degenerate triangles
/// (judged with `collinear_eps`).
pub fn find_delaunay_violations<F: Float>(
    triangles: &[Triangle<F>],
    points: &[Point2<F>],
    collinear_eps: F,
    slack: F,
) -> Vec<DelaunayViolation> {
    let mut violations = Vec::new();

    for (ti, triangle) in triangles.iter().enumerate() {
        let Some(circle) = triangle.circumcircle(collinear_eps) else {
            continue;
        };

        let limit = circle.radius * (F::one() - slack);
        for (pi, &p) in points.iter().enumerate() {
            if triangle.has_vertex(p, F::zero()) {
                continue;
            }
            if circle.center.distance(p) < limit {
                violations.push(DelaunayViolation {
                    triangle: ti,
                    point: pi,
                });
            }
        }
    }

    violations
}

/// Counts how many triangles use each distinct edge (matched within `eps`).
///
/// In a valid triangulation hull edges are used once and interior edges
/// twice. Edges are listed in order of first appearance.
pub fn edge_usage<F: Float>(triangles: &[Triangle<F>], eps: F) -> Vec<(Edge<F>, usize)> {
    let mut usage: Vec<(Edge<F>, usize)> = Vec::new();

    for edge in triangles.iter().flat_map(|t| t.edges()) {
        match usage.iter_mut().find(|(e, _)| e.eq_within(&edge, eps)) {
            Some((_, count)) => *count += 1,
            None => usage.push((edge, 1)),
        }
    }

    usage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_detects_bad_diagonal() {
        // A kite whose short diagonal is the Delaunay one; use the long one
        let points = vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 0.5), p(2.0, -0.5)];
        let bad = vec![
            Triangle::new(points[0], points[1], points[2]),
            Triangle::new(points[0], points[3], points[1]),
        ];
        let violations = find_delaunay_violations(&bad, &points, 1e-10, 1e-9);
        assert!(violations.contains(&DelaunayViolation {
            triangle: 0,
            point: 3
        }));
        assert!(violations.contains(&DelaunayViolation {
            triangle: 1,
            point: 2
        }));

        let good = vec![
            Triangle::new(points[2], points[3], points[1]),
            Triangle::new(points[3], points[2], points[0]),
        ];
        assert!(find_delaunay_violations(&good, &points, 1e-10, 1e-9).is_empty());
    }

    #[test]
    fn test_cocircular_points_are_not_violations() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let triangles = vec![
            Triangle::new(points[0], points[1], points[2]),
            Triangle::new(points[0], points[2], points[3]),
        ];
        assert!(find_delaunay_violations(&triangles, &points, 1e-10, 1e-9).is_empty());
    }

    #[test]
    fn test_degenerate_triangles_are_skipped() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(1.0, 0.1)];
        let triangles = vec![Triangle::new(points[0], points[1], points[2])];
        assert!(find_delaunay_violations(&triangles, &points, 1e-10, 0.0).is_empty());
    }

    #[test]
    fn test_edge_usage() {
        let triangles = vec![
            Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)),
            Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)),
        ];
        let usage = edge_usage(&triangles, 1e-6);
        assert_eq!(usage.len(), 5);

        let shared: Vec<_> = usage.iter().filter(|&&(_, n)| n == 2).collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].0, Edge::new(p(1.0, 1.0), p(0.0, 0.0)));
        assert_eq!(usage.iter().map(|&(_, n)| n).sum::<usize>(), 6);
    }
}
