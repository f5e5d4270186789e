use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// How a surface responds to the scene light.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Material {
    /// Ambient plus diffuse lighting from the light position.
    #[default]
    Lit,
    /// Drawn with its colour as-is (markings, sun disc, lines).
    Unlit,
}

/// One mesh vertex in world space.
///
/// Unlit vertices carry a zero normal; the shader keys off its length.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Straight (non-premultiplied) RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x4  // color
    ];

    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4], material: Material) -> Self {
        let normal = match material {
            Material::Lit => normal.normalize_or_zero(),
            Material::Unlit => Vec3::ZERO,
        };
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }

    pub fn is_lit(&self) -> bool {
        Vec3::from_array(self.normal).length_squared() > 0.25
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
