use crate::mesh::Vertex;

/// GPU-side vertex: position in screen pixels plus packed RGBA.
///
/// Colors travel as `Unorm8x4`, which brings a vertex down to 12 bytes. Every
/// particle disc fans out dozens of vertices per frame, so the packing cuts
/// the per-frame upload roughly in half versus float colors.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WgpuVertex {
    pub pos: [f32; 2],
    pub color: [u8; 4],
}

/// Quantize one linear [0, 1] channel to a byte, saturating out-of-range
/// input instead of wrapping.
fn pack_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<Vertex> for WgpuVertex {
    fn from(vertex: Vertex) -> Self {
        Self {
            pos: vertex.pos,
            color: vertex.color.map(pack_channel),
        }
    }
}

impl WgpuVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // pos
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color, unpacked back to [0, 1] floats by the vertex stage
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Unorm8x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<WgpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_field::Color;

    #[test]
    fn packing_rounds_and_saturates() {
        assert_eq!(pack_channel(0.0), 0);
        assert_eq!(pack_channel(1.0), 255);
        assert_eq!(pack_channel(0.5), 128);
        assert_eq!(pack_channel(-0.2), 0);
        assert_eq!(pack_channel(1.7), 255);
    }

    #[test]
    fn conversion_keeps_position_and_packs_color() {
        let vertex = Vertex::new([3.0, -7.5], Color::new(1.0, 0.0, 0.5, 0.6));
        let gpu = WgpuVertex::from(vertex);

        assert_eq!(gpu.pos, [3.0, -7.5]);
        assert_eq!(gpu.color, [255, 0, 128, 153]);
    }

    #[test]
    fn layout_stride_matches_struct_size() {
        let layout = WgpuVertex::desc();
        assert_eq!(layout.array_stride as usize, std::mem::size_of::<WgpuVertex>());
        assert_eq!(std::mem::size_of::<WgpuVertex>(), 12);
    }
}
