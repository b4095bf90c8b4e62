//! Render composition for the room.
//!
//! Objects sharing a mesh are drawn with a single instanced call. [`batch_objects`]
//! groups the room's objects by [`BufferHandle`] (in order of first appearance, so
//! walls come before blocks) and [`RoomRenderer`] keeps one instance buffer per group.
//!
//! # Key types
//!
//! - [`RoomRenderer`] owns the per-mesh instance buffers and issues the draws
//! - [`Batch`] is one mesh plus the instances drawn with it

use std::iter;

use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        instance::{InstanceRaw, RenderObject},
        terrain::Room,
    },
    resources::{BufferHandle, mesh::DrawMesh},
};

/// Instances sharing one mesh, still on the CPU.
#[derive(Clone, Debug)]
pub struct BatchData {
    pub buffer: BufferHandle,
    pub vertex_count: u32,
    pub instances: Vec<InstanceRaw>,
}

/// Groups `objects` by mesh, keeping the order in which meshes first appear.
pub fn batch_objects<'a>(objects: impl IntoIterator<Item = &'a RenderObject>) -> Vec<BatchData> {
    let mut batches: Vec<BatchData> = Vec::new();
    for object in objects {
        match batches.iter_mut().find(|batch| batch.buffer == object.buffer) {
            Some(batch) => batch.instances.push(object.to_raw()),
            None => batches.push(BatchData {
                buffer: object.buffer,
                vertex_count: object.vertex_count,
                instances: vec![object.to_raw()],
            }),
        }
    }
    batches
}

/// One mesh and the GPU buffer of its instances.
#[derive(Debug)]
pub struct Batch {
    pub buffer: BufferHandle,
    pub vertex_count: u32,
    pub instance_buffer: wgpu::Buffer,
    pub amount: u32,
}

#[derive(Debug, Default)]
pub struct RoomRenderer {
    batches: Vec<Batch>,
    revision: Option<u64>,
}

impl RoomRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the instance buffers if `room` changed since the last call.
    pub fn sync(&mut self, device: &wgpu::Device, room: &Room) {
        if self.revision == Some(room.revision()) {
            return;
        }
        self.batches = batch_objects(room.objects())
            .into_iter()
            .map(|batch| Batch {
                buffer: batch.buffer,
                vertex_count: batch.vertex_count,
                instance_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Instance Buffer {}", batch.buffer.id())),
                    contents: bytemuck::cast_slice(&batch.instances),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                amount: batch.instances.len() as u32,
            })
            .collect();
        self.revision = Some(room.revision());
        log::debug!("Rebuilt {} instance batches", self.batches.len());
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Renders one frame: clear, then every batch with the flat colour pipeline.
    pub fn render(&self, ctx: &Context) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&ctx.pipeline);
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
            for batch in &self.batches {
                if batch.amount == 0 {
                    continue;
                }
                let Some(mesh) = ctx.meshes.get(batch.buffer) else {
                    log::error!("No mesh registered for handle {}", batch.buffer.id());
                    continue;
                };
                render_pass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
                render_pass.draw_mesh_instanced(mesh, batch.vertex_count, 0..batch.amount);
            }
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
