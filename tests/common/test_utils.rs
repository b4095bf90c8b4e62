#![allow(dead_code)]

use anyhow::bail;
use rand::{SeedableRng, rngs::StdRng};
use scrape_race::{
    Vector3,
    config::GameConfig,
    data_structures::{geometry::PositionVertex, terrain::RoomLayout},
    resources::{BufferHandle, GraphicsBackend, validate_mesh},
};

/// One `register_buffer` call as seen by the [`RecordingBackend`].
#[derive(Clone, Debug)]
pub(crate) struct Registration {
    pub label: String,
    pub vertices: Vec<PositionVertex>,
    pub indices: Vec<u32>,
    pub handle: BufferHandle,
}

/// Graphics backend that keeps the uploaded geometry in memory.
///
/// Handles are issued sequentially starting at 0. `fail_at` makes the n-th call
/// (0-based) fail like a GPU allocation error would.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub registrations: Vec<Registration>,
    pub fail_at: Option<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            registrations: Vec::new(),
            fail_at: Some(call),
        }
    }

    pub fn get(&self, handle: BufferHandle) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.handle == handle)
    }
}

impl GraphicsBackend for RecordingBackend {
    fn register_buffer(
        &mut self,
        label: &str,
        vertices: &[PositionVertex],
        indices: &[u32],
    ) -> anyhow::Result<BufferHandle> {
        if self.fail_at == Some(self.registrations.len()) {
            bail!("out of GPU memory while uploading {:?}", label);
        }
        validate_mesh(label, vertices, indices)?;
        let handle = BufferHandle::from_raw(self.registrations.len() as u32);
        self.registrations.push(Registration {
            label: label.to_string(),
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
            handle,
        });
        Ok(handle)
    }
}

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn layout(block_count: usize) -> RoomLayout {
    RoomLayout {
        origin: Vector3::new(2.0, 2.0, 2.0),
        dimensions: Vector3::new(3.0, 3.0, 20.0),
        block_edge: 0.2,
        block_count,
    }
}

/// Default game with a fixed seed and no random blocks in the way.
pub(crate) fn empty_room_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.seed = Some(7);
    config.room.block_count = 0;
    config
}

pub(crate) fn assert_vec_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
    let eps = 1e-5;
    assert!(
        (actual.x - expected.x).abs() < eps
            && (actual.y - expected.y).abs() < eps
            && (actual.z - expected.z).abs() < eps,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
