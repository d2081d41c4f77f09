use bevy::prelude::Vec3;
use serde::Deserialize;

use super::{accumulate_face_normals, ColorBands, TerrainMeshData};
use crate::HeightField;

/// World-space rectangle the grid is laid over.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridExtent {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for GridExtent {
    fn default() -> Self {
        Self {
            min_x: -1.,
            max_x: 1.,
            min_y: -1.,
            max_y: 1.,
        }
    }
}

pub fn heightmap_to_grid_mesh(terrain: &HeightField, extent: GridExtent) -> TerrainMeshData {
    heightmap_to_grid_mesh_with_bands(terrain, extent, &ColorBands::default())
}

/// Builds a triangle grid over `terrain`.
///
/// The vertex grid is `edge + 1` wide, one more than the height field, and
/// vertex `(i, j)` reads flat sample `j + i * edge`. The extra column thus
/// picks up the first sample of the next row, and vertices past the end of
/// the store sit at height 0. Spacing is the extent divided by the exponent,
/// not by the number of cells.
pub fn heightmap_to_grid_mesh_with_bands(
    terrain: &HeightField,
    extent: GridExtent,
    bands: &ColorBands,
) -> TerrainMeshData {
    let n = terrain.exponent() as f32;
    let edge = terrain.size();
    let stride = edge + 1;

    let delta_x = (extent.max_x - extent.min_x) / n;
    let delta_y = (extent.max_y - extent.min_y) / n;

    let mut vertices = Vec::with_capacity(stride * stride);
    let mut colors = Vec::with_capacity(stride * stride);

    for i in 0..=edge {
        for j in 0..=edge {
            let height = terrain.get_flat(j + i * edge).unwrap_or(0.);

            vertices.push(Vec3::new(
                extent.min_x + delta_x * j as f32,
                extent.min_y + delta_y * i as f32,
                height,
            ));
            colors.push(bands.color_for(height));
        }
    }

    let mut indices = Vec::with_capacity(edge * edge * 6);
    let idx = |i: usize, j: usize| -> u32 { (i * stride + j) as u32 };

    for i in 0..edge {
        for j in 0..edge {
            // Two triangles per cell
            indices.extend([idx(i, j), idx(i, j + 1), idx(i + 1, j)]);
            indices.extend([idx(i, j + 1), idx(i + 1, j + 1), idx(i + 1, j)]);
        }
    }

    let normals = accumulate_face_normals(&vertices, &indices, vec![Vec3::ZERO; vertices.len()]);
    let triangle_count = indices.len() / 3;

    TerrainMeshData {
        vertices,
        colors,
        indices,
        normals,
        triangle_count,
    }
}
