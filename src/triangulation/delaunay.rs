//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points, its vertices taken
//!    at infinity so that it never cuts into the convex hull
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point and connect the point to the boundary of the hole
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Insertion is strictly sequential. Each step depends on the mesh left by
//! the previous one.
//!
//! # Complexity
//!
//! - Time: O(n²) (every step scans the whole mesh)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use tessella::triangulation::triangulate;
//! use tessella::Point2;
//!
//! // Square with center point
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let triangles = triangulate(&points).unwrap();
//! assert_eq!(triangles.len(), 4);
//! ```

use super::{Edge, InsertionOrder, Mesh, SuperTriangle, Triangle, TriangulationOptions};
use crate::bounds::Aabb2;
use crate::error::{Degeneracy, TriangulationError};
use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// Progress of a [`Triangulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The super-triangle is in place and no point has been inserted yet.
    Initialized,
    /// The given number of points has been inserted; more remain.
    Inserting(usize),
    /// Every point is inserted; super-triangle triangles are still present.
    Cleanup,
    /// The mesh is the final triangulation.
    Done,
}

/// Drives one Bowyer-Watson run over a fixed point set.
///
/// Construction validates the input and sets up the super-triangle. Each call
/// to [`step`](Self::step) performs one insertion (or the final cleanup), so a
/// caller can stop between steps. [`run`](Self::run) drives to completion.
///
/// # Example
///
/// ```
/// use tessella::triangulation::{Phase, Triangulator, TriangulationOptions};
/// use tessella::Point2;
///
/// let points = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 10.0),
/// ];
/// let mut triangulator = Triangulator::new(&points, TriangulationOptions::default()).unwrap();
/// assert_eq!(triangulator.phase(), Phase::Initialized);
///
/// assert_eq!(triangulator.step().unwrap(), Phase::Inserting(1));
/// assert_eq!(triangulator.step().unwrap(), Phase::Inserting(2));
/// assert_eq!(triangulator.step().unwrap(), Phase::Cleanup);
/// assert_eq!(triangulator.step().unwrap(), Phase::Done);
/// assert_eq!(triangulator.mesh().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Triangulator<F> {
    options: TriangulationOptions<F>,
    /// Points in insertion order, tagged with their index in the caller's input.
    schedule: Vec<(usize, Point2<F>)>,
    super_triangle: SuperTriangle<F>,
    mesh: Mesh<F>,
    phase: Phase,
    failure: Option<TriangulationError>,
}

impl<F: Float> Triangulator<F> {
    /// Validates `points` and prepares the super-triangle.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidOptions`] if `options` fail validation
    /// - [`TriangulationError::NonFiniteInput`] for NaN or infinite coordinates
    /// - [`TriangulationError::DegenerateInput`] for fewer than three distinct
    ///   points or an all-collinear point set
    pub fn new(
        points: &[Point2<F>],
        options: TriangulationOptions<F>,
    ) -> Result<Self, TriangulationError> {
        options.validate()?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteInput { index });
        }

        // Points closer than the edge tolerance would give edges that cannot
        // be told apart, so they count as repeats of the earlier point.
        let mut distinct: Vec<Point2<F>> = Vec::with_capacity(points.len());
        let mut schedule: Vec<(usize, Point2<F>)> = Vec::with_capacity(points.len());
        for (index, &p) in points.iter().enumerate() {
            let repeated = distinct
                .iter()
                .any(|&q| q.approx_eq(p, options.edge_tolerance));
            if !repeated {
                distinct.push(p);
            } else if options.skip_duplicates {
                tracing::debug!(index, "skipping duplicate point");
                continue;
            }
            schedule.push((index, p));
        }

        check_degeneracy(&distinct, options.collinear_tolerance)?;

        if options.insertion_order == InsertionOrder::Lexicographic {
            // Stable, so repeated points keep their input order
            schedule.sort_by(|(_, p), (_, q)| p.lexicographic_cmp(q));
        }

        let bounds = Aabb2::from_points(distinct.iter().copied()).ok_or(
            TriangulationError::DegenerateInput(Degeneracy::TooFewPoints { distinct: 0 }),
        )?;
        let super_triangle = SuperTriangle::around(bounds, options.super_triangle_margin);

        tracing::debug!(
            points = points.len(),
            scheduled = schedule.len(),
            "starting triangulation"
        );

        Ok(Self {
            options,
            schedule,
            super_triangle,
            mesh: Mesh::from_triangle(super_triangle.triangle()),
            phase: Phase::Initialized,
            failure: None,
        })
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the working mesh.
    ///
    /// Before [`Phase::Done`] it still contains triangles attached to the
    /// super-triangle.
    #[inline]
    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// Returns the finite stand-in for the synthetic triangle enclosing all
    /// input points.
    ///
    /// Insertion treats its vertices as points at infinity (see
    /// [`SuperTriangle`]); these coordinates only mark them in the mesh.
    #[inline]
    pub fn super_triangle(&self) -> Triangle<F> {
        self.super_triangle.triangle()
    }

    /// Returns the points still to be inserted or already inserted, in
    /// insertion order, with their index in the caller's input.
    #[inline]
    pub fn points(&self) -> &[(usize, Point2<F>)] {
        &self.schedule
    }

    /// Advances the run by one insertion, or by the final cleanup.
    ///
    /// Returns the phase reached. Calling `step` after [`Phase::Done`] does
    /// nothing. Once a step has failed every later call returns the same
    /// error.
    pub fn step(&mut self) -> Result<Phase, TriangulationError> {
        if let Some(err) = self.failure {
            return Err(err);
        }

        self.phase = match self.phase {
            Phase::Initialized => self.insert(0)?,
            Phase::Inserting(inserted) => self.insert(inserted)?,
            Phase::Cleanup => {
                let removed = self.mesh.remove_triangles_touching(
                    &self.super_triangle.triangle(),
                    self.options.point_tolerance,
                );
                tracing::debug!(
                    removed,
                    triangles = self.mesh.len(),
                    "finished triangulation"
                );
                Phase::Done
            }
            Phase::Done => Phase::Done,
        };

        Ok(self.phase)
    }

    /// Runs every remaining step and returns the triangles.
    pub fn run(mut self) -> Result<Vec<Triangle<F>>, TriangulationError> {
        while self.step()? != Phase::Done {}
        Ok(self.mesh.into_triangles())
    }

    /// Inserts the scheduled point at `position` and returns the next phase.
    fn insert(&mut self, position: usize) -> Result<Phase, TriangulationError> {
        let Some(&(index, point)) = self.schedule.get(position) else {
            return Ok(Phase::Cleanup);
        };

        let eps = self.options.collinear_tolerance;
        let super_triangle = &self.super_triangle;
        let bad = self
            .mesh
            .find_bad_by(|t| super_triangle.contains_in_circumcircle(t, point, eps));
        if bad.is_empty() {
            tracing::warn!(index, "no circumcircle contains point, aborting");
            let err = TriangulationError::NoBadTriangle { index };
            self.failure = Some(err);
            return Err(err);
        }

        let boundary = self.mesh.boundary_of(&bad, self.options.edge_tolerance);
        let removed = self.mesh.remove_all(&bad, self.options.point_tolerance);
        debug_assert_eq!(removed, bad.len());
        self.mesh.add_all(point, &boundary);

        tracing::trace!(
            index,
            bad = bad.len(),
            boundary = boundary.len(),
            triangles = self.mesh.len(),
            "inserted point"
        );

        let inserted = position + 1;
        Ok(if inserted < self.schedule.len() {
            Phase::Inserting(inserted)
        } else {
            Phase::Cleanup
        })
    }
}

/// Fails unless `distinct` holds at least three points that are not all on
/// one line.
fn check_degeneracy<F: Float>(distinct: &[Point2<F>], eps: F) -> Result<(), TriangulationError> {
    if distinct.len() < 3 {
        return Err(TriangulationError::DegenerateInput(
            Degeneracy::TooFewPoints {
                distinct: distinct.len(),
            },
        ));
    }

    // Measure collinearity against the farthest point from the first, which
    // gives the longest and best conditioned baseline.
    let a = distinct[0];
    let b = distinct
        .iter()
        .copied()
        .fold(a, |far, p| {
            if a.distance_squared(p) > a.distance_squared(far) {
                p
            } else {
                far
            }
        });

    let spans_plane = distinct
        .iter()
        .any(|&c| orient2d(a, b, c, eps) != Orientation::Collinear);
    if spans_plane {
        Ok(())
    } else {
        Err(TriangulationError::DegenerateInput(Degeneracy::Collinear))
    }
}

/// Computes the Delaunay triangulation of a set of points with default
/// options.
///
/// Triangles are returned counter-clockwise, in the order the final mesh
/// holds them.
///
/// # Errors
///
/// See [`Triangulator::new`]; additionally
/// [`TriangulationError::NoBadTriangle`] if an insertion step finds no
/// triangle to replace.
///
/// # Example
///
/// ```
/// use tessella::triangulation::triangulate;
/// use tessella::{Point2, TriangulationError};
///
/// let tri = triangulate(&[
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 10.0),
/// ]).unwrap();
/// assert_eq!(tri.len(), 1);
///
/// let collinear = triangulate(&[
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
/// ]);
/// assert!(matches!(collinear, Err(TriangulationError::DegenerateInput(_))));
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Vec<Triangle<F>>, TriangulationError> {
    triangulate_with(points, &TriangulationOptions::default())
}

/// Computes the Delaunay triangulation of a set of points.
pub fn triangulate_with<F: Float>(
    points: &[Point2<F>],
    options: &TriangulationOptions<F>,
) -> Result<Vec<Triangle<F>>, TriangulationError> {
    Triangulator::new(points, *options)?.run()
}

/// Computes the Delaunay triangulation and returns its distinct edges.
///
/// # Example
///
/// ```
/// use tessella::triangulation::triangulate_edges;
/// use tessella::Point2;
///
/// let square = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// // Four sides plus one diagonal
/// assert_eq!(triangulate_edges(&square).unwrap().len(), 5);
/// ```
pub fn triangulate_edges<F: Float>(points: &[Point2<F>]) -> Result<Vec<Edge<F>>, TriangulationError> {
    triangulate_edges_with(points, &TriangulationOptions::default())
}

/// Computes the Delaunay triangulation and returns its distinct edges,
/// matched with `options.edge_tolerance`.
pub fn triangulate_edges_with<F: Float>(
    points: &[Point2<F>],
    options: &TriangulationOptions<F>,
) -> Result<Vec<Edge<F>>, TriangulationError> {
    let triangles = triangulate_with(points, options)?;
    Ok(unique_edges(&triangles, options.edge_tolerance))
}

/// Collects the edges of `triangles`, keeping the first of any edges equal
/// within `eps`.
pub fn unique_edges<F: Float>(triangles: &[Triangle<F>], eps: F) -> Vec<Edge<F>> {
    let mut edges: Vec<Edge<F>> = Vec::with_capacity(triangles.len() * 2);
    for edge in triangles.iter().flat_map(|t| t.edges()) {
        if !edges.iter().any(|e| e.eq_within(&edge, eps)) {
            edges.push(edge);
        }
    }
    edges
}
