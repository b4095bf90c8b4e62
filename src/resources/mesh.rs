use std::ops::Range;

use anyhow::Context;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::geometry::PositionVertex,
    resources::{BufferHandle, GraphicsBackend, validate_mesh},
};

/// Vertex and index buffer of one registered shape.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

/**
 * Owns the GPU memory of every registered shape.
 *
 * Handles are indices into `meshes`. Nothing is ever removed so a handle stays
 * valid for the lifetime of the registry.
 */
#[derive(Debug)]
pub struct MeshRegistry {
    device: wgpu::Device,
    meshes: Vec<Mesh>,
}

impl MeshRegistry {
    pub fn new(device: wgpu::Device) -> Self {
        Self {
            device,
            meshes: Vec::new(),
        }
    }

    pub fn get(&self, handle: BufferHandle) -> Option<&Mesh> {
        self.meshes.get(handle.id() as usize)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl GraphicsBackend for MeshRegistry {
    fn register_buffer(
        &mut self,
        label: &str,
        vertices: &[PositionVertex],
        indices: &[u32],
    ) -> anyhow::Result<BufferHandle> {
        validate_mesh(label, vertices, indices)?;
        let id = u32::try_from(self.meshes.len())
            .with_context(|| format!("Too many meshes registered to add {:?}", label))?;
        let num_elements = u32::try_from(indices.len())
            .with_context(|| format!("Mesh {:?} has too many indices", label))?;

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertex Buffer", label)),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Index Buffer", label)),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        log::debug!(
            "Registered mesh {:?} ({} vertices, {} indices) as handle {}",
            label,
            vertices.len(),
            indices.len(),
            id
        );
        self.meshes.push(Mesh {
            name: label.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements,
        });
        Ok(BufferHandle::from_raw(id))
    }
}

/// Bind + draw for registered meshes, implemented on the render pass.
pub trait DrawMesh<'a> {
    fn bind_mesh(&mut self, mesh: &'a Mesh);

    fn draw_mesh_instanced(&mut self, mesh: &'a Mesh, vertex_count: u32, instances: Range<u32>);
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn bind_mesh(&mut self, mesh: &'b Mesh) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b Mesh, vertex_count: u32, instances: Range<u32>) {
        self.bind_mesh(mesh);
        self.draw_indexed(0..vertex_count.min(mesh.num_elements), 0, instances);
    }
}
