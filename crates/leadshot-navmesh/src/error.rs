//! Error types for navigation mesh operations.

use glam::Vec3;
use thiserror::Error;

/// Result type alias for navigation mesh operations.
pub type NavMeshResult<T> = Result<T, NavMeshError>;

/// Errors that can occur while building, querying or decoding a mesh.
#[derive(Debug, Error)]
pub enum NavMeshError {
    /// Nearest-vertex query against a mesh with no vertices.
    #[error("navigation mesh has no vertices")]
    EmptyMesh,

    /// No vertex sits exactly at the queried position.
    #[error("vertex not found: {0}")]
    VertexNotFound(Vec3),

    /// Two vertices share the same position.
    #[error("duplicate vertex at {0}")]
    DuplicateVertex(Vec3),

    /// A neighbor reference points at a position that is not a vertex.
    #[error("neighbor {neighbor} of vertex {vertex} is not in the mesh")]
    DanglingNeighbor { vertex: Vec3, neighbor: Vec3 },

    /// A vertex id that the mesh never issued.
    #[error("vertex id {0} is out of range")]
    InvalidVertexId(u32),

    /// Vertex positions must be finite to be usable as keys.
    #[error("vertex position is not finite: {0}")]
    NonFinitePosition(Vec3),

    /// Nearest-vertex queries need a finite point to compare against.
    #[error("query point is not finite: {0}")]
    NonFiniteQuery(Vec3),

    /// Persisted bytes do not describe a valid mesh.
    #[error("corrupt navmesh data: {0}")]
    Corrupt(String),

    /// Reading or writing a mesh file failed.
    #[error("navmesh I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavMeshError {
    /// Create a corrupt data error.
    #[must_use]
    pub fn corrupt(details: impl Into<String>) -> Self {
        Self::Corrupt(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavMeshError::EmptyMesh;
        assert!(format!("{err}").contains("no vertices"));

        let err = NavMeshError::VertexNotFound(Vec3::new(1.0, 2.0, 3.0));
        assert!(format!("{err}").contains("not found"));

        let err = NavMeshError::corrupt("truncated vertex record");
        assert!(format!("{err}").contains("truncated vertex record"));
    }
}
