//! Tuning knobs for a triangulation run.

use crate::error::TriangulationError;
use num_traits::Float;

/// Order in which input points are inserted into the mesh.
///
/// When several points are cocircular the Delaunay triangulation is not
/// unique, and which diagonal survives depends on insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionOrder {
    /// Insert points in the order they were supplied.
    #[default]
    AsGiven,
    /// Insert points sorted by x, then y. The result is then independent of
    /// how the caller happened to order the input.
    Lexicographic,
}

/// Options for [`triangulate_with`](super::triangulate_with) and
/// [`Triangulator`](super::Triangulator).
///
/// All tolerances are explicit; nothing in the triangulation uses a hidden
/// epsilon.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationOptions<F> {
    /// Per-coordinate tolerance under which two points are the same point.
    ///
    /// Used for triangle identity and super-triangle cleanup.
    pub point_tolerance: F,
    /// Per-coordinate tolerance for matching edges when building the cavity
    /// boundary and deduplicating edges. Must not be tighter than
    /// `point_tolerance`.
    ///
    /// Input points within this tolerance of an earlier point are repeats:
    /// the edges between them could not be told apart from their neighbours.
    pub edge_tolerance: F,
    /// Sine threshold under which three points count as collinear. Also
    /// decides when a circumcenter is undefined.
    pub collinear_tolerance: F,
    /// Distance of the stand-in super-triangle vertices from the centre of the
    /// input bounding box, in multiples of its larger side. Must be at least
    /// 2, which keeps every point of the box strictly inside them.
    ///
    /// Insertion treats the super vertices as points at infinity, so the
    /// margin does not change the result; it only places the stand-ins.
    pub super_triangle_margin: F,
    /// Order in which points are inserted.
    pub insertion_order: InsertionOrder,
    /// Drop points equal (within `edge_tolerance`) to an earlier point.
    ///
    /// When disabled an exact repeat finds no triangle to replace and the run
    /// fails with [`TriangulationError::NoBadTriangle`]. A near repeat is
    /// inserted, and its very short edges may be merged by tolerant edge
    /// matching.
    pub skip_duplicates: bool,
}

impl<F: Float> Default for TriangulationOptions<F> {
    fn default() -> Self {
        Self {
            point_tolerance: F::from(1e-9).unwrap(),
            edge_tolerance: F::from(1e-6).unwrap(),
            collinear_tolerance: F::from(1e-10).unwrap(),
            super_triangle_margin: F::from(10.0).unwrap(),
            insertion_order: InsertionOrder::AsGiven,
            skip_duplicates: true,
        }
    }
}

impl<F: Float> TriangulationOptions<F> {
    /// Sets the point identity tolerance.
    pub fn with_point_tolerance(mut self, tolerance: F) -> Self {
        self.point_tolerance = tolerance;
        self
    }

    /// Sets the edge matching tolerance.
    pub fn with_edge_tolerance(mut self, tolerance: F) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    /// Sets the collinearity tolerance.
    pub fn with_collinear_tolerance(mut self, tolerance: F) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    /// Sets the super-triangle margin.
    pub fn with_super_triangle_margin(mut self, margin: F) -> Self {
        self.super_triangle_margin = margin;
        self
    }

    /// Sets the insertion order.
    pub fn with_insertion_order(mut self, order: InsertionOrder) -> Self {
        self.insertion_order = order;
        self
    }

    /// Enables or disables duplicate skipping.
    pub fn with_skip_duplicates(mut self, skip: bool) -> Self {
        self.skip_duplicates = skip;
        self
    }

    /// Checks that the options are usable.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        let non_negative = |v: F| v.is_finite() && v >= F::zero();

        if !non_negative(self.point_tolerance) {
            return Err(TriangulationError::InvalidOptions {
                reason: "point tolerance must be finite and non-negative",
            });
        }
        if !non_negative(self.edge_tolerance) {
            return Err(TriangulationError::InvalidOptions {
                reason: "edge tolerance must be finite and non-negative",
            });
        }
        if self.edge_tolerance < self.point_tolerance {
            return Err(TriangulationError::InvalidOptions {
                reason: "edge tolerance must not be tighter than point tolerance",
            });
        }
        if !non_negative(self.collinear_tolerance) || self.collinear_tolerance >= F::one() {
            return Err(TriangulationError::InvalidOptions {
                reason: "collinear tolerance must be in [0, 1)",
            });
        }
        let two = F::one() + F::one();
        if !self.super_triangle_margin.is_finite() || self.super_triangle_margin < two {
            return Err(TriangulationError::InvalidOptions {
                reason: "super-triangle margin must be finite and at least 2",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options: TriangulationOptions<f64> = TriangulationOptions::default();
        assert!(options.validate().is_ok());
        assert!(options.edge_tolerance > options.point_tolerance);
        assert_eq!(options.insertion_order, InsertionOrder::AsGiven);
        assert!(options.skip_duplicates);

        let options32: TriangulationOptions<f32> = TriangulationOptions::default();
        assert!(options32.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let options: TriangulationOptions<f64> = TriangulationOptions::default()
            .with_point_tolerance(1e-8)
            .with_edge_tolerance(1e-5)
            .with_collinear_tolerance(1e-9)
            .with_super_triangle_margin(50.0)
            .with_insertion_order(InsertionOrder::Lexicographic)
            .with_skip_duplicates(false);
        assert_eq!(options.point_tolerance, 1e-8);
        assert_eq!(options.edge_tolerance, 1e-5);
        assert_eq!(options.collinear_tolerance, 1e-9);
        assert_eq!(options.super_triangle_margin, 50.0);
        assert_eq!(options.insertion_order, InsertionOrder::Lexicographic);
        assert!(!options.skip_duplicates);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_edge_tolerance_tighter_than_point_tolerance_is_rejected() {
        let options: TriangulationOptions<f64> = TriangulationOptions::default()
            .with_point_tolerance(1e-3)
            .with_edge_tolerance(1e-6);
        assert!(matches!(
            options.validate(),
            Err(TriangulationError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let base: TriangulationOptions<f64> = TriangulationOptions::default();
        assert!(base.with_point_tolerance(-1.0).validate().is_err());
        assert!(base.with_edge_tolerance(f64::NAN).validate().is_err());
        assert!(base.with_collinear_tolerance(1.0).validate().is_err());
        assert!(base.with_super_triangle_margin(1.5).validate().is_err());
        assert!(base.with_super_triangle_margin(2.0).validate().is_ok());
        assert!(base
            .with_super_triangle_margin(f64::INFINITY)
            .validate()
            .is_err());
    }
}
