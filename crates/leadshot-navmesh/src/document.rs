//! JSON document form of a navigation mesh.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{NavMeshError, NavMeshResult};
use crate::mesh::NavigationMesh;

/// Human-editable mesh: positions plus neighbor index lists, in vertex order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavMeshDocument {
    pub vertices: Vec<[f32; 3]>,
    pub neighbors: Vec<Vec<u32>>,
}

impl NavMeshDocument {
    pub fn from_json_str(json: &str) -> NavMeshResult<Self> {
        serde_json::from_str(json).map_err(|e| NavMeshError::corrupt(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> NavMeshResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NavMeshError::corrupt(e.to_string()))
    }
}

impl NavigationMesh {
    /// Snapshot this mesh as a document.
    pub fn to_document(&self) -> NavMeshDocument {
        NavMeshDocument {
            vertices: self.vertices().iter().map(|v| v.to_array()).collect(),
            neighbors: self
                .iter()
                .map(|(_, ids)| ids.iter().map(|id| id.0).collect())
                .collect(),
        }
    }

    /// Build a mesh from a document, with the same validation as decoding.
    pub fn from_document(document: NavMeshDocument) -> NavMeshResult<Self> {
        let positions = document.vertices.into_iter().map(Vec3::from_array).collect();
        NavigationMesh::from_parts(positions, document.neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json_roundtrip() {
        let json = r#"{
            "vertices": [[0.0, 0.0, 0.0], [1.5, 0.0, 0.0], [0.0, 2.25, -1.0]],
            "neighbors": [[1, 2], [0], []]
        }"#;
        let doc = NavMeshDocument::from_json_str(json).unwrap();
        let mesh = NavigationMesh::from_document(doc.clone()).unwrap();

        assert_eq!(mesh.len(), 3);
        assert_eq!(mesh.neighbors(Vec3::new(1.5, 0.0, 0.0)).unwrap(), vec![Vec3::ZERO]);
        assert_eq!(mesh.to_document(), doc);

        let text = doc.to_json_pretty().unwrap();
        assert_eq!(NavMeshDocument::from_json_str(&text).unwrap(), doc);
    }

    #[test]
    fn test_document_mismatched_lengths() {
        let doc = NavMeshDocument {
            vertices: vec![[0.0; 3], [1.0; 3]],
            neighbors: vec![vec![1]],
        };
        assert!(matches!(
            NavigationMesh::from_document(doc),
            Err(NavMeshError::Corrupt(_))
        ));
    }

    #[test]
    fn test_document_bad_json() {
        assert!(NavMeshDocument::from_json_str("{").is_err());
    }
}
