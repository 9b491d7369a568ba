//! tessella - Delaunay triangulation of 2D point sets
//!
//! Incremental Bowyer-Watson insertion over floating-point coordinates, with
//! every tolerance passed explicitly rather than hidden in the algorithm.

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::{Degeneracy, TriangulationError};
pub use primitives::{Circle2, Line2, Point2, Vec2};
pub use tolerance::{approx_eq, orient2d, Orientation};
pub use triangulation::{
    triangulate, triangulate_edges, triangulate_with, Edge, Triangle, TriangulationOptions,
};
