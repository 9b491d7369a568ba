//! The working set of triangles during Bowyer-Watson insertion.
//!
//! Each insertion step is split into a read-only scan ([`Mesh::find_bad`],
//! [`Mesh::boundary_of`]) that returns fresh collections, followed by a
//! mutation phase ([`Mesh::remove_all`], [`Mesh::add_all`]). The mesh is never
//! modified while it is being scanned.

use super::{Edge, Triangle};
use crate::primitives::Point2;
use num_traits::Float;

/// An unordered collection of triangles.
///
/// Triangles are kept in a `Vec`, so scans visit them in the order they were
/// added. That makes every operation deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct Mesh<F> {
    triangles: Vec<Triangle<F>>,
}

impl<F: Float> Mesh<F> {
    /// Creates an empty mesh.
    #[inline]
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh holding a single triangle.
    #[inline]
    pub fn from_triangle(triangle: Triangle<F>) -> Self {
        Self {
            triangles: vec![triangle],
        }
    }

    /// Returns the current triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// Iterates over the current triangles.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle<F>> {
        self.triangles.iter()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the mesh holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Consumes the mesh and returns its triangles.
    #[inline]
    pub fn into_triangles(self) -> Vec<Triangle<F>> {
        self.triangles
    }

    /// Appends a triangle. No uniqueness check is made.
    #[inline]
    pub fn add(&mut self, triangle: Triangle<F>) {
        self.triangles.push(triangle);
    }

    /// Removes the first triangle with the same vertex set as `triangle`
    /// (within `eps`, in any vertex order).
    ///
    /// Returns `false` and leaves the mesh untouched if there is no such
    /// triangle.
    pub fn remove(&mut self, triangle: &Triangle<F>, eps: F) -> bool {
        match self
            .triangles
            .iter()
            .position(|t| t.same_vertices(triangle, eps))
        {
            Some(index) => {
                self.triangles.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the triangles whose circumcircle strictly contains `point`.
    ///
    /// `eps` is the collinearity tolerance handed to
    /// [`Triangle::contains_in_circumcircle`]; degenerate triangles are never
    /// returned.
    pub fn find_bad(&self, point: Point2<F>, eps: F) -> Vec<Triangle<F>> {
        self.find_bad_by(|t| t.contains_in_circumcircle(point, eps))
    }

    /// Returns the triangles for which `is_bad` holds, in mesh order.
    ///
    /// Used with [`SuperTriangle::contains_in_circumcircle`](super::SuperTriangle::contains_in_circumcircle)
    /// when the mesh still holds super vertices.
    pub fn find_bad_by<P>(&self, mut is_bad: P) -> Vec<Triangle<F>>
    where
        P: FnMut(&Triangle<F>) -> bool,
    {
        self.triangles
            .iter()
            .filter(|t| is_bad(t))
            .copied()
            .collect()
    }

    /// Computes the boundary polygon of the cavity formed by `bad`.
    ///
    /// An edge is on the boundary when no other triangle in `bad` has an edge
    /// equal to it within `eps`. Edges shared by two bad triangles are inside
    /// the cavity and are dropped. Repeated boundary edges are reported once.
    ///
    /// Too small an `eps` fails to recognise shared edges and leaves holes;
    /// too large an `eps` merges distinct short edges.
    pub fn boundary_of(&self, bad: &[Triangle<F>], eps: F) -> Vec<Edge<F>> {
        let mut boundary: Vec<Edge<F>> = Vec::new();

        for (i, triangle) in bad.iter().enumerate() {
            for edge in triangle.edges() {
                let shared = bad.iter().enumerate().any(|(j, other)| {
                    j != i && other.edges().iter().any(|e| e.eq_within(&edge, eps))
                });
                if shared {
                    continue;
                }
                if !boundary.iter().any(|e| e.eq_within(&edge, eps)) {
                    boundary.push(edge);
                }
            }
        }

        boundary
    }

    /// Removes each triangle of `triangles` from the mesh (matching by vertex
    /// set within `eps`). Returns how many were actually removed.
    pub fn remove_all(&mut self, triangles: &[Triangle<F>], eps: F) -> usize {
        triangles
            .iter()
            .filter(|t| self.remove(t, eps))
            .count()
    }

    /// Connects `point` to every boundary edge, adding one triangle per edge.
    ///
    /// New triangles are wound counter-clockwise.
    pub fn add_all(&mut self, point: Point2<F>, boundary: &[Edge<F>]) {
        self.triangles.extend(
            boundary
                .iter()
                .map(|edge| Triangle::new(edge.a, edge.b, point).to_ccw()),
        );
    }

    /// Removes every triangle that shares a vertex (within `eps`) with
    /// `super_triangle`. Returns how many were removed.
    pub fn remove_triangles_touching(&mut self, super_triangle: &Triangle<F>, eps: F) -> usize {
        let before = self.triangles.len();
        self.triangles
            .retain(|t| !t.shares_vertex_with(super_triangle, eps));
        before - self.triangles.len()
    }
}

impl<'a, F: Float> IntoIterator for &'a Mesh<F> {
    type Item = &'a Triangle<F>;
    type IntoIter = std::slice::Iter<'a, Triangle<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
