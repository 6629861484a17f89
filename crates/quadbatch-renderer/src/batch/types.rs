/// A batched vertex: 2D position in world units.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    /// Buffer layout matching [`MeshBuilder`](crate::mesh::MeshBuilder)
    /// output: tightly packed position pairs at shader location 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Uniform buffer for the batch pipeline.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Uniforms {
    /// Viewport size in pixels.
    pub resolution: [f32; 2],
    /// Orthographic view height in world units.
    pub view_scale: f32,
    pub _pad: f32,
    /// RGBA fill color, each component 0.0..=1.0.
    pub color: [f32; 4],
}

/// Indices appended per quad by the mesh builder.
pub(crate) const INDICES_PER_QUAD: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8); // 2 floats * 4 bytes
    }

    #[test]
    fn uniforms_size() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 32); // 8 floats * 4 bytes
    }

    #[test]
    fn vertex_layout_is_one_tightly_packed_vec2() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
    }
}
