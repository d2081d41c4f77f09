mod color;
mod grid;
mod normals;
mod wireframe;

pub use color::{ColorBands, TerrainBand};
pub use grid::{heightmap_to_grid_mesh, heightmap_to_grid_mesh_with_bands, GridExtent};
pub use normals::accumulate_face_normals;
pub use wireframe::triangles_to_lines;

use bevy::{
    prelude::*,
    render::{mesh::Indices, render_resource::PrimitiveTopology},
};

const WIREFRAME_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.];

/// Buffers for an indexed triangle mesh. `vertices`, `colors` and `normals`
/// are index-aligned; `indices` holds one triple per triangle.
#[derive(Clone, Debug, Default)]
pub struct TerrainMeshData {
    pub vertices: Vec<Vec3>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
    /// Summed face normals, not yet unit length.
    pub normals: Vec<Vec3>,
    pub triangle_count: usize,
}

impl TerrainMeshData {
    pub fn flat_vertices(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn flat_colors(&self) -> Vec<f32> {
        self.colors.iter().flatten().copied().collect()
    }

    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Axis-aligned bounds of the vertex positions.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), &v| (min.min(v), max.max(v)),
        )
    }

    /// Edge list for wireframe display, two indices per edge.
    pub fn lines(&self) -> Vec<u32> {
        triangles_to_lines(&self.indices)
    }

    fn unit_normals(&self) -> Vec<Vec3> {
        self.normals.iter().map(|n| n.normalize_or_zero()).collect()
    }

    pub fn wireframe_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::LineList);

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.vertices.clone());
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.unit_normals());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_COLOR,
            vec![WIREFRAME_COLOR; self.vertices.len()],
        );

        mesh.set_indices(Some(Indices::U32(self.lines())));

        mesh
    }

    pub fn into_render_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);

        let normals = self.unit_normals();

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.vertices);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

        mesh.set_indices(Some(Indices::U32(self.indices)));

        mesh
    }
}
