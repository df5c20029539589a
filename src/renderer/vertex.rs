//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
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
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.04, 0.05, 0.10, 1.0];
    pub const LANE_FILL: [f32; 4] = [1.0, 1.0, 1.0, 0.06];
    pub const LANE_BORDER: [f32; 4] = [1.0, 1.0, 1.0, 0.12];
    pub const CENTER_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.14];

    pub const OBSTACLE: [f32; 4] = [1.0, 0.231, 0.231, 1.0]; // #ff3b3b
    pub const OBSTACLE_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 0.18];

    pub const CAR_BODY: [f32; 4] = [0.965, 0.769, 0.0, 1.0]; // #f6c400
    pub const CAR_WINDSHIELD: [f32; 4] = [0.0, 0.0, 0.0, 0.22];
    pub const CAR_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.12];
    pub const CAR_WHEEL: [f32; 4] = [0.043, 0.059, 0.122, 1.0]; // #0b0f1f
    pub const CAR_TRIM: [f32; 4] = [1.0, 1.0, 1.0, 0.22];
}
