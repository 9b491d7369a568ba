//! Delaunay triangulation of point sets.
//!
//! Building blocks ([`Edge`], [`Triangle`], [`Mesh`]) and the incremental
//! Bowyer-Watson driver ([`Triangulator`]) with its convenience entry points.
//! Every geometric comparison takes an explicit tolerance, collected in
//! [`TriangulationOptions`].

mod delaunay;
mod edge;
mod mesh;
mod options;
mod super_triangle;
mod triangle;
mod validate;

pub use delaunay::{
    triangulate, triangulate_edges, triangulate_edges_with, triangulate_with, unique_edges, Phase,
    Triangulator,
};
pub use edge::Edge;
pub use mesh::Mesh;
pub use options::{InsertionOrder, TriangulationOptions};
pub use super_triangle::SuperTriangle;
pub use triangle::Triangle;
pub use validate::{edge_usage, find_delaunay_violations, DelaunayViolation};
