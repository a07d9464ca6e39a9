//! Navigation mesh for LEADSHOT.
//!
//! Waypoints with directed adjacency, nearest-vertex and neighbor queries,
//! the compact `.navm` binary format, and a JSON document form.

pub use leadshot_core as core;

pub mod document;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod navm;

// Re-export key types for convenience.
pub use document::NavMeshDocument;
pub use error::{NavMeshError, NavMeshResult};
pub use grid::grid_mesh;
pub use mesh::{NavMeshBuilder, NavigationMesh, VertexId};
pub use navm::{load_navm, write_navm};
