//! Raw vertex data for the room's shapes.
//!
//! The room only ever needs four meshes: one cube shared by every block and
//! three quads, one per axis-aligned plane, shared by the five walls. All of
//! them are built here as plain position arrays together with their fixed
//! triangulation tables. Uploading them is the job of
//! [`crate::resources::GraphicsBackend`].

use cgmath::Vector3;

/// Triangulation of the eight cube corners returned by [`cube_vertices`].
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 4, // front
    0, 2, 4, //
    0, 3, 6, // left
    0, 2, 6, //
    1, 5, 7, // right
    1, 4, 7, //
    5, 7, 6, // back
    5, 3, 6, //
    0, 1, 5, // bottom
    0, 3, 5, //
    2, 4, 7, // top
    2, 6, 7, //
];

/// Triangulation of the four corners of every wall quad.
pub const WALL_INDICES: [u32; 6] = [0, 1, 3, 0, 2, 3];

/// Number of distinct wall shapes (YZ, XZ and XY plane).
pub const WALL_SHAPES: usize = 3;

/// A single vertex as it is stored on the GPU: three tightly packed floats.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Vertex buffer layout: position only, attribute slot 0.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<[f32; 3]> for PositionVertex {
    fn from(position: [f32; 3]) -> Self {
        Self { position }
    }
}

/// Corners of an axis-aligned cube spanning `(0,0,0)..(edge,edge,edge)`.
///
/// The corner order is fixed and must match [`CUBE_INDICES`].
pub fn cube_vertices(edge: f32) -> [PositionVertex; 8] {
    [
        [0.0, 0.0, 0.0],
        [edge, 0.0, 0.0],
        [0.0, edge, 0.0],
        [0.0, 0.0, edge],
        [edge, edge, 0.0],
        [edge, 0.0, edge],
        [0.0, edge, edge],
        [edge, edge, edge],
    ]
    .map(PositionVertex::from)
}

/// One quad per axis-aligned plane, each anchored at the local origin.
///
/// * `[0]` spans the YZ plane (left and right wall)
/// * `[1]` spans the XZ plane (bottom and top wall)
/// * `[2]` spans the XY plane (back wall)
///
/// Every quad uses [`WALL_INDICES`].
pub fn wall_vertices(len: Vector3<f32>) -> [[PositionVertex; 4]; WALL_SHAPES] {
    let (x, y, z) = (len.x, len.y, len.z);
    [
        [[0.0, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z], [0.0, y, z]].map(PositionVertex::from),
        [[0.0, 0.0, 0.0], [x, 0.0, 0.0], [0.0, 0.0, z], [x, 0.0, z]].map(PositionVertex::from),
        [[0.0, 0.0, 0.0], [x, 0.0, 0.0], [0.0, y, 0.0], [x, y, 0.0]].map(PositionVertex::from),
    ]
}
