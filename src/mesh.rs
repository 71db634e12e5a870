//! Vertex format and the hardcoded tutorial geometry shared by the demo
//! binaries: a unit quad and the classic ten-cube field.

use glam::{Mat4, Vec3};

/// Position + texture coordinate vertex, matching the demo shaders'
/// locations 0 and 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate (v=0 at the bottom).
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Vertex buffer layout for pipelines consuming this vertex type.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn v(position: [f32; 3], uv: [f32; 2]) -> TexturedVertex {
    TexturedVertex { position, uv }
}

/// Unit quad in the z=0 plane, wound for the index list below.
pub const QUAD_VERTICES: [TexturedVertex; 4] = [
    v([0.5, 0.5, 0.0], [1.0, 1.0]),   // top right
    v([0.5, -0.5, 0.0], [1.0, 0.0]),  // bottom right
    v([-0.5, -0.5, 0.0], [0.0, 0.0]), // bottom left
    v([-0.5, 0.5, 0.0], [0.0, 1.0]),  // top left
];

/// Two counter-clockwise triangles covering the quad.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// Unit cube as 36 unindexed vertices, one face per six rows.
pub const CUBE_VERTICES: [TexturedVertex; 36] = [
    // back face (z = -0.5)
    v([-0.5, -0.5, -0.5], [0.0, 0.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0]),
    // front face (z = 0.5)
    v([-0.5, -0.5, 0.5], [0.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [1.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0]),
    // left face (x = -0.5)
    v([-0.5, 0.5, 0.5], [1.0, 0.0]),
    v([-0.5, 0.5, -0.5], [1.0, 1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [1.0, 0.0]),
    // right face (x = 0.5)
    v([0.5, 0.5, 0.5], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0]),
    v([0.5, -0.5, -0.5], [0.0, 1.0]),
    v([0.5, -0.5, -0.5], [0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0]),
    // bottom face (y = -0.5)
    v([-0.5, -0.5, -0.5], [0.0, 1.0]),
    v([0.5, -0.5, -0.5], [1.0, 1.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0]),
    // top face (y = 0.5)
    v([-0.5, 0.5, -0.5], [0.0, 1.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0]),
];

/// World-space positions of the ten cubes in the fly-camera scene.
pub const CUBE_OFFSETS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Model matrix for cube `index`: translated to its offset and rotated
/// 20°·index about the (1.0, 0.3, 0.5) axis.
#[must_use]
pub fn cube_model_matrix(index: usize) -> Mat4 {
    let offset = Vec3::from_array(CUBE_OFFSETS[index % CUBE_OFFSETS.len()]);
    let angle = (20.0 * index as f32).to_radians();
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(offset) * Mat4::from_axis_angle(axis, angle)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{
        cube_model_matrix, TexturedVertex, CUBE_OFFSETS, CUBE_VERTICES,
        QUAD_INDICES, QUAD_VERTICES,
    };

    #[test]
    fn layout_stride_matches_vertex_size() {
        let layout = TexturedVertex::layout();
        assert_eq!(
            layout.array_stride,
            size_of::<TexturedVertex>() as u64
        );
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn quad_indices_are_in_bounds() {
        for index in QUAD_INDICES {
            assert!((index as usize) < QUAD_VERTICES.len());
        }
    }

    #[test]
    fn cube_has_twelve_triangles() {
        assert_eq!(CUBE_VERTICES.len(), 36);
        // Every vertex sits on the unit cube surface.
        for vertex in &CUBE_VERTICES {
            let furthest = vertex
                .position
                .iter()
                .fold(0.0f32, |acc, c| acc.max(c.abs()));
            assert_eq!(furthest, 0.5);
        }
    }

    #[test]
    fn ten_cube_offsets() {
        assert_eq!(CUBE_OFFSETS.len(), 10);
    }

    #[test]
    fn first_cube_is_unrotated_at_origin() {
        let model = cube_model_matrix(0);
        let p = model.transform_point3(Vec3::new(0.5, 0.5, 0.5));
        assert!((p - Vec3::new(0.5, 0.5, 0.5)).length() < 1e-6);
    }

    #[test]
    fn later_cubes_translate_to_their_offset() {
        for (i, offset) in CUBE_OFFSETS.iter().enumerate() {
            let model = cube_model_matrix(i);
            let center = model.transform_point3(Vec3::ZERO);
            assert!((center - Vec3::from_array(*offset)).length() < 1e-5);
        }
    }
}
