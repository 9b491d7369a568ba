//! Error types for triangulation runs.

use thiserror::Error;

/// Why an input point set cannot be triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degeneracy {
    /// Fewer than three distinct points were supplied.
    #[error("only {distinct} distinct point(s), at least 3 are required")]
    TooFewPoints {
        /// Number of distinct points found.
        distinct: usize,
    },

    /// Every point lies on a single line.
    #[error("all points are collinear")]
    Collinear,
}

/// Errors that can occur while triangulating a point set.
///
/// A run either succeeds with a complete mesh or fails with exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// The input has no meaningful 2D triangulation.
    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),

    /// No triangle's circumcircle contained the point being inserted.
    ///
    /// The super-triangle guarantees coverage, so this means an earlier
    /// numeric step left the mesh in an invalid state.
    #[error("no triangle circumcircle contains input point {index}")]
    NoBadTriangle {
        /// Index of the offending point in the caller's input.
        index: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("input point {index} has a non-finite coordinate")]
    NonFiniteInput {
        /// Index of the offending point in the caller's input.
        index: usize,
    },

    /// The triangulation options are inconsistent.
    #[error("invalid triangulation options: {reason}")]
    InvalidOptions {
        /// Which constraint was violated.
        reason: &'static str,
    },
}
