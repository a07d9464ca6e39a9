//! NavigationMesh: waypoints stored in an arena with index-based adjacency.
//!
//! Vertices live in insertion order in a single `Vec`; each vertex owns a
//! list of `VertexId`s naming its neighbors. Connections are directed and
//! never auto-symmetrized. A built mesh is immutable: rebuild and replace it
//! (or `deserialize` over it) to change the graph.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::{NavMeshError, NavMeshResult};
use crate::navm;

/// Stable index of a vertex inside one mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Exact-match lookup key for a position. `-0.0` and `0.0` map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u32; 3]);

impl VertexKey {
    fn new(p: Vec3) -> Self {
        Self([(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()])
    }
}

/// Ordered mapping from vertex position to its neighbor positions.
#[derive(Debug, Clone, Default)]
pub struct NavigationMesh {
    positions: Vec<Vec3>,
    connections: Vec<Vec<VertexId>>,
    index: HashMap<VertexKey, VertexId>,
}

impl NavigationMesh {
    /// An empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from `(vertex, neighbors)` pairs.
    ///
    /// Every neighbor must itself appear as a vertex somewhere in the input;
    /// forward references are fine. Vertex order follows the input order.
    pub fn from_adjacency<I>(adjacency: I) -> NavMeshResult<Self>
    where
        I: IntoIterator<Item = (Vec3, Vec<Vec3>)>,
    {
        let adjacency: Vec<(Vec3, Vec<Vec3>)> = adjacency.into_iter().collect();

        let mut builder = NavMeshBuilder::with_capacity(adjacency.len());
        for (vertex, _) in &adjacency {
            builder.add_vertex(*vertex)?;
        }

        let mut connections = Vec::with_capacity(adjacency.len());
        for (vertex, neighbors) in &adjacency {
            let mut ids = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                let id = builder.vertex_id(*neighbor).ok_or(NavMeshError::DanglingNeighbor {
                    vertex: *vertex,
                    neighbor: *neighbor,
                })?;
                ids.push(id);
            }
            connections.push(ids);
        }

        let mut mesh = builder.build();
        mesh.connections = connections;
        Ok(mesh)
    }

    /// Assemble a mesh from raw positions and index lists, validating both.
    ///
    /// Neighbor lists are kept exactly as given, duplicates included.
    pub(crate) fn from_parts(positions: Vec<Vec3>, connections: Vec<Vec<u32>>) -> NavMeshResult<Self> {
        if positions.len() != connections.len() {
            return Err(NavMeshError::corrupt(format!(
                "{} vertices but {} neighbor lists",
                positions.len(),
                connections.len()
            )));
        }

        let mut builder = NavMeshBuilder::with_capacity(positions.len());
        for position in &positions {
            builder.add_vertex(*position)?;
        }

        let count = positions.len() as u32;
        let mut resolved = Vec::with_capacity(connections.len());
        for list in connections {
            if let Some(&bad) = list.iter().find(|&&i| i >= count) {
                return Err(NavMeshError::InvalidVertexId(bad));
            }
            resolved.push(list.into_iter().map(VertexId).collect());
        }

        let mut mesh = builder.build();
        mesh.connections = resolved;
        Ok(mesh)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All vertex positions in vertex order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.positions
    }

    /// Total number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.connections.iter().map(Vec::len).sum()
    }

    /// Id of the vertex exactly at `position`.
    pub fn vertex_id(&self, position: Vec3) -> Option<VertexId> {
        self.index.get(&VertexKey::new(position)).copied()
    }

    /// Position of vertex `id`.
    pub fn position(&self, id: VertexId) -> Option<Vec3> {
        self.positions.get(id.index()).copied()
    }

    /// Neighbor ids of vertex `id`, in insertion order.
    pub fn neighbor_ids(&self, id: VertexId) -> Option<&[VertexId]> {
        self.connections.get(id.index()).map(Vec::as_slice)
    }

    /// Iterate `(position, neighbor ids)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, &[VertexId])> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.connections.iter().map(Vec::as_slice))
    }

    /// Id of the vertex nearest to `point` (Euclidean). Ties go to the earliest vertex.
    ///
    /// A NaN or infinite `point` is rejected with [`NavMeshError::NonFiniteQuery`].
    pub fn closest_vertex_id(&self, point: Vec3) -> NavMeshResult<VertexId> {
        if !point.is_finite() {
            return Err(NavMeshError::NonFiniteQuery(point));
        }

        let mut best: Option<(usize, f32)> = None;
        for (i, position) in self.positions.iter().enumerate() {
            let d = position.distance_squared(point);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        best.map(|(i, _)| VertexId(i as u32))
            .ok_or(NavMeshError::EmptyMesh)
    }

    /// Position of the vertex nearest to `point`.
    pub fn closest_vertex(&self, point: Vec3) -> NavMeshResult<Vec3> {
        let id = self.closest_vertex_id(point)?;
        Ok(self.positions[id.index()])
    }

    /// Neighbor positions of the vertex exactly at `vertex`.
    ///
    /// A known vertex with no connections yields an empty list; a position
    /// that is not a vertex is an error.
    pub fn neighbors(&self, vertex: Vec3) -> NavMeshResult<Vec<Vec3>> {
        let id = self
            .vertex_id(vertex)
            .ok_or(NavMeshError::VertexNotFound(vertex))?;
        Ok(self.connections[id.index()]
            .iter()
            .map(|n| self.positions[n.index()])
            .collect())
    }

    /// Encode the mesh in `.navm` format.
    pub fn serialize(&self) -> Vec<u8> {
        navm::serialize_navm(self)
    }

    /// Replace this mesh with one decoded from `.navm` bytes.
    ///
    /// On error the mesh is left exactly as it was.
    pub fn deserialize(&mut self, data: &[u8]) -> NavMeshResult<()> {
        *self = navm::parse_navm(data)?;
        Ok(())
    }

    /// Decode a new mesh from `.navm` bytes.
    pub fn from_bytes(data: &[u8]) -> NavMeshResult<Self> {
        navm::parse_navm(data)
    }
}

/// Incremental construction of a [`NavigationMesh`].
#[derive(Debug, Clone, Default)]
pub struct NavMeshBuilder {
    positions: Vec<Vec3>,
    connections: Vec<Vec<VertexId>>,
    index: HashMap<VertexKey, VertexId>,
}

impl NavMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            connections: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    /// Add a vertex. Positions must be finite and unique.
    pub fn add_vertex(&mut self, position: Vec3) -> NavMeshResult<VertexId> {
        if !position.is_finite() {
            return Err(NavMeshError::NonFinitePosition(position));
        }

        let key = VertexKey::new(position);
        if self.index.contains_key(&key) {
            return Err(NavMeshError::DuplicateVertex(position));
        }

        let id = VertexId(self.positions.len() as u32);
        self.positions.push(position);
        self.connections.push(Vec::new());
        self.index.insert(key, id);
        Ok(id)
    }

    /// Id of an already-added vertex.
    pub fn vertex_id(&self, position: Vec3) -> Option<VertexId> {
        self.index.get(&VertexKey::new(position)).copied()
    }

    /// Add a directed connection `from → to`. Repeated connections are ignored.
    pub fn connect(&mut self, from: VertexId, to: VertexId) -> NavMeshResult<()> {
        self.check(from)?;
        self.check(to)?;

        let list = &mut self.connections[from.index()];
        if !list.contains(&to) {
            list.push(to);
        }
        Ok(())
    }

    /// Connect `a → b` and `b → a`.
    pub fn connect_bidirectional(&mut self, a: VertexId, b: VertexId) -> NavMeshResult<()> {
        self.connect(a, b)?;
        self.connect(b, a)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn build(self) -> NavigationMesh {
        NavigationMesh {
            positions: self.positions,
            connections: self.connections,
            index: self.index,
        }
    }

    fn check(&self, id: VertexId) -> NavMeshResult<()> {
        if id.index() < self.positions.len() {
            Ok(())
        } else {
            Err(NavMeshError::InvalidVertexId(id.0))
        }
    }
}
