//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Quad vertex with position and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
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
            ],
        }
    }
}

/// The one quad every sprite shares: a unit square around the origin as two
/// triangles. Only the bound texture and model matrix vary per draw.
pub const QUAD_VERTICES: [Vertex; 6] = [
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
    Vertex::new(0.5, -0.5, 1.0, 1.0),
    Vertex::new(0.5, 0.5, 1.0, 0.0),
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
    Vertex::new(0.5, 0.5, 1.0, 0.0),
    Vertex::new(-0.5, 0.5, 0.0, 0.0),
];
