//! .navm binary format loader and writer.
//!
//! Layout (all fields little-endian):
//!
//! ```text
//! header   magic "NAVM" | version u16 | reserved u16 | vertex count u32
//! vertex   x f32 | y f32 | z f32 | neighbor count u32 | neighbor index u32 * count
//! ```
//!
//! Vertex records follow the header in vertex order. Neighbor indices may
//! point forward, so decoding reads every record before validating them.

use std::path::Path;

use glam::Vec3;
use tracing::{debug, info, warn};

use crate::error::{NavMeshError, NavMeshResult};
use crate::mesh::NavigationMesh;

/// .navm magic bytes.
const NAVM_MAGIC: [u8; 4] = *b"NAVM";

/// Current format version.
const NAVM_VERSION: u16 = 1;

/// Total header size in bytes.
const HEADER_SIZE: usize = 12;

/// Fixed part of a vertex record: position plus neighbor count.
const VERTEX_RECORD_SIZE: usize = 16;

/// Size of one neighbor index.
const INDEX_SIZE: usize = 4;

/// Load a NavigationMesh from a .navm file.
pub fn load_navm(path: &Path) -> NavMeshResult<NavigationMesh> {
    let data = std::fs::read(path)?;
    let mesh = parse_navm(&data)?;
    info!(
        path = %path.display(),
        vertices = mesh.len(),
        connections = mesh.connection_count(),
        "loaded navmesh"
    );
    Ok(mesh)
}

/// Write a NavigationMesh to a .navm file.
pub fn write_navm(mesh: &NavigationMesh, path: &Path) -> NavMeshResult<()> {
    let data = serialize_navm(mesh);
    std::fs::write(path, &data)?;
    info!(path = %path.display(), bytes = data.len(), "wrote navmesh");
    Ok(())
}

/// Serialize a NavigationMesh to .navm bytes.
pub fn serialize_navm(mesh: &NavigationMesh) -> Vec<u8> {
    let total_size = HEADER_SIZE
        + mesh.len() * VERTEX_RECORD_SIZE
        + mesh.connection_count() * INDEX_SIZE;
    let mut buf = Vec::with_capacity(total_size);

    buf.extend_from_slice(&NAVM_MAGIC);
    buf.extend_from_slice(&NAVM_VERSION.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&(mesh.len() as u32).to_le_bytes());

    for (position, neighbors) in mesh.iter() {
        buf.extend_from_slice(&position.x.to_le_bytes());
        buf.extend_from_slice(&position.y.to_le_bytes());
        buf.extend_from_slice(&position.z.to_le_bytes());
        buf.extend_from_slice(&(neighbors.len() as u32).to_le_bytes());
        for id in neighbors {
            buf.extend_from_slice(&id.0.to_le_bytes());
        }
    }

    buf
}

/// Parse a NavigationMesh from a .navm byte buffer.
pub fn parse_navm(data: &[u8]) -> NavMeshResult<NavigationMesh> {
    let mut reader = Reader::new(data);

    let magic = reader.take(4, "header")?;
    if magic != NAVM_MAGIC {
        return Err(NavMeshError::corrupt("invalid .navm magic bytes"));
    }

    let version = reader.read_u16("header")?;
    if version != NAVM_VERSION {
        return Err(NavMeshError::corrupt(format!(
            "unsupported .navm version: {version}"
        )));
    }
    let _reserved = reader.read_u16("header")?;

    let count = reader.read_u32("header")? as usize;
    if count > reader.remaining() / VERTEX_RECORD_SIZE {
        return Err(NavMeshError::corrupt(format!(
            "header declares {count} vertices but only {} bytes follow",
            reader.remaining()
        )));
    }

    let mut positions = Vec::with_capacity(count);
    let mut connections = Vec::with_capacity(count);
    for _ in 0..count {
        let x = reader.read_f32("vertex record")?;
        let y = reader.read_f32("vertex record")?;
        let z = reader.read_f32("vertex record")?;
        let neighbor_count = reader.read_u32("vertex record")? as usize;
        if neighbor_count > reader.remaining() / INDEX_SIZE {
            return Err(NavMeshError::corrupt(format!(
                "vertex declares {neighbor_count} neighbors but only {} bytes follow",
                reader.remaining()
            )));
        }

        let mut neighbors = Vec::with_capacity(neighbor_count);
        for _ in 0..neighbor_count {
            neighbors.push(reader.read_u32("neighbor index")?);
        }

        positions.push(Vec3::new(x, y, z));
        connections.push(neighbors);
    }

    if reader.remaining() != 0 {
        warn!(trailing = reader.remaining(), "rejecting .navm with trailing bytes");
        return Err(NavMeshError::corrupt(format!(
            "{} trailing bytes after last vertex record",
            reader.remaining()
        )));
    }

    let mesh = NavigationMesh::from_parts(positions, connections)
        .map_err(|e| NavMeshError::corrupt(e.to_string()))?;
    debug!(vertices = mesh.len(), "decoded .navm");
    Ok(mesh)
}

/// Bounds-checked little-endian cursor over a byte slice.
struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize, what: &str) -> NavMeshResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(NavMeshError::corrupt(format!(
                "truncated {what} at byte {}",
                self.offset
            )));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self, what: &str) -> NavMeshResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }

    fn read_u16(&mut self, what: &str) -> NavMeshResult<u16> {
        Ok(u16::from_le_bytes(self.read_array(what)?))
    }

    fn read_u32(&mut self, what: &str) -> NavMeshResult<u32> {
        Ok(u32::from_le_bytes(self.read_array(what)?))
    }

    fn read_f32(&mut self, what: &str) -> NavMeshResult<f32> {
        Ok(f32::from_le_bytes(self.read_array(what)?))
    }
}
