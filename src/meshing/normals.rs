use bevy::prelude::Vec3;

/// Adds the unit face normal of every triangle into the slot of each of its
/// three vertices and hands the accumulator back.
///
/// The sums are left unnormalized; `TerrainMeshData::into_render_mesh` does
/// that when the buffers are uploaded.
pub fn accumulate_face_normals(vertices: &[Vec3], indices: &[u32], mut normals: Vec<Vec3>) -> Vec<Vec3> {
    debug_assert_eq!(vertices.len(), normals.len());

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

        let edge1 = vertices[a] - vertices[b];
        let edge2 = vertices[c] - vertices[b];
        let normal = edge2.cross(edge1).normalize_or_zero();

        normals[a] += normal;
        normals[b] += normal;
        normals[c] += normal;
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        let vertices = [Vec3::ZERO, Vec3::X * 2., Vec3::Y * 3.];
        let normals = accumulate_face_normals(&vertices, &[0, 1, 2], vec![Vec3::ZERO; 3]);

        assert_eq!(normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn test_shared_vertices_sum() {
        // Two triangles folded along the 1-2 edge
        let vertices = [
            Vec3::new(0., 0., 0.),
            Vec3::new(1., 0., 0.),
            Vec3::new(0., 1., 0.),
            Vec3::new(1., 1., 1.),
        ];
        let normals =
            accumulate_face_normals(&vertices, &[0, 1, 2, 1, 3, 2], vec![Vec3::ZERO; 4]);

        let second = (vertices[2] - vertices[3])
            .cross(vertices[1] - vertices[3])
            .normalize();

        assert_eq!(normals[0], Vec3::Z);
        assert!((normals[1] - (Vec3::Z + second)).length() < 1e-6);
        assert!((normals[2] - (Vec3::Z + second)).length() < 1e-6);
        assert!((normals[3] - second).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_adds_nothing() {
        let vertices = [Vec3::ZERO, Vec3::X, Vec3::X * 2.];
        let normals = accumulate_face_normals(&vertices, &[0, 1, 2], vec![Vec3::ZERO; 3]);

        assert_eq!(normals, vec![Vec3::ZERO; 3]);
    }

    #[test]
    fn test_accumulator_is_additive() {
        let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let normals = accumulate_face_normals(&vertices, &[0, 1, 2], vec![Vec3::ONE; 3]);

        assert_eq!(normals, vec![Vec3::new(1., 1., 2.); 3]);
    }
}
