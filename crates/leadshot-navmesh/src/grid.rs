//! Regular grid mesh generator.

use glam::Vec3;

use crate::error::NavMeshResult;
use crate::mesh::{NavMeshBuilder, NavigationMesh};

/// `cols × rows` waypoints on the z=0 plane, `spacing` apart, each connected
/// both ways to its 4-neighborhood. Vertex order is row-major.
pub fn grid_mesh(cols: u32, rows: u32, spacing: f32) -> NavMeshResult<NavigationMesh> {
    let mut builder = NavMeshBuilder::with_capacity((cols as usize) * (rows as usize));

    let mut ids = Vec::with_capacity((cols as usize) * (rows as usize));
    for row in 0..rows {
        for col in 0..cols {
            let position = Vec3::new(col as f32 * spacing, row as f32 * spacing, 0.0);
            ids.push(builder.add_vertex(position)?);
        }
    }

    let at = |col: u32, row: u32| ids[(row * cols + col) as usize];
    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                builder.connect_bidirectional(at(col, row), at(col + 1, row))?;
            }
            if row + 1 < rows {
                builder.connect_bidirectional(at(col, row), at(col, row + 1))?;
            }
        }
    }

    Ok(builder.build())
}
