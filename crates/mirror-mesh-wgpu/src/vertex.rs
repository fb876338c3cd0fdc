use mirror_mesh::Vertex;

/// WGPU-specific vertex format with Pod/Zeroable for buffer uploading
///
/// Colors are stored as u8 (Unorm8x4), which keeps a vertex at 20 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [u8; 4],
}

impl From<Vertex> for GpuVertex {
    fn from(vertex: Vertex) -> Self {
        Self {
            pos: vertex.pos,
            uv: vertex.uv,
            color: vertex.color.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8),
        }
    }
}

impl GpuVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Unorm8x4, // u8x4 normalized to 0.0-1.0
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use mirror_mesh::Color;

    #[test]
    fn test_vertex_is_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 20);
        let layout = GpuVertex::desc();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes[2].offset, 16);
    }

    #[test]
    fn test_color_converts_to_unorm() {
        let vertex = Vertex::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(0.25, 0.75),
            Color::new(1.0, 0.5, 0.0, 2.0),
        );
        let gpu = GpuVertex::from(vertex);

        assert_eq!(gpu.pos, [1.0, 2.0]);
        assert_eq!(gpu.uv, [0.25, 0.75]);
        assert_eq!(gpu.color, [255, 128, 0, 255]);
    }
}
