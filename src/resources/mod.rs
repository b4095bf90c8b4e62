//! Everything that hands geometry over to the graphics backend.
//!
//! The room never touches GPU memory directly. It registers each distinct shape once
//! through a [`GraphicsBackend`] and keeps the returned [`BufferHandle`] around.

use anyhow::bail;

use crate::data_structures::geometry::PositionVertex;

pub mod mesh;

/// Opaque reference to a registered vertex/index buffer pair.
///
/// Handles are cheap to copy and stay valid for as long as the backend that issued
/// them is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(u32);

impl BufferHandle {
    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// The part of the graphics backend the room depends on.
///
/// `register_buffer` uploads vertex positions (attribute slot 0) and a triangle
/// index list and returns a handle for later draws. A failure is not recoverable:
/// without its meshes the room cannot be drawn at all.
pub trait GraphicsBackend {
    fn register_buffer(
        &mut self,
        label: &str,
        vertices: &[PositionVertex],
        indices: &[u32],
    ) -> anyhow::Result<BufferHandle>;
}

/// Rejects geometry that can't form a triangle list over `vertices`.
pub fn validate_mesh(label: &str, vertices: &[PositionVertex], indices: &[u32]) -> anyhow::Result<()> {
    if vertices.is_empty() {
        bail!("mesh {:?} has no vertices", label);
    }
    if indices.is_empty() || indices.len() % 3 != 0 {
        bail!(
            "mesh {:?} has {} indices which is not a triangle list",
            label,
            indices.len()
        );
    }
    if let Some(idx) = indices.iter().find(|&&idx| idx as usize >= vertices.len()) {
        bail!(
            "mesh {:?} references vertex {} but only has {} vertices",
            label,
            idx,
            vertices.len()
        );
    }
    Ok(())
}
