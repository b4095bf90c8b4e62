//! Placed objects of the room and their GPU instance data.
//!
//! Blocks and walls share the same renderable payload (which mesh to draw, how many
//! indices, where and in which colour). They only differ in the variant specific
//! data kept in [`ObjectKind`].

use cgmath::Vector3;

use crate::{
    data_structures::geometry::{CUBE_INDICES, WALL_INDICES},
    resources::BufferHandle,
};

/// RGBA colour in linear `[0, 1]` components.
pub type Color = [f32; 4];

/// What a [`RenderObject`] represents in the room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    /// A cube of the room's block edge length. Interactive blocks are the ones
    /// the player is meant to collect.
    Block { interactive: bool },
    /// One of the five bounding planes.
    Wall,
}

/// A single drawable object: mesh handle, index count, world position and colour.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderObject {
    pub buffer: BufferHandle,
    pub vertex_count: u32,
    pub position: Vector3<f32>,
    pub color: Color,
    pub kind: ObjectKind,
}

impl RenderObject {
    pub fn block(buffer: BufferHandle, position: Vector3<f32>, color: Color, interactive: bool) -> Self {
        Self {
            buffer,
            vertex_count: CUBE_INDICES.len() as u32,
            position,
            color,
            kind: ObjectKind::Block { interactive },
        }
    }

    pub fn wall(buffer: BufferHandle, position: Vector3<f32>, color: Color) -> Self {
        Self {
            buffer,
            vertex_count: WALL_INDICES.len() as u32,
            position,
            color,
            kind: ObjectKind::Wall,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, ObjectKind::Block { interactive: true })
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: cgmath::Matrix4::from_translation(self.position).into(),
            color: self.color,
        }
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/**
 * Stride layout: the model matrix as four vec4 columns followed by the RGBA colour.
 *
 * Locations 0..5 are reserved for per-vertex data.
 */
impl InstanceRaw {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // A mat4 takes up 4 vertex slots as it is technically 4 vec4s.
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
