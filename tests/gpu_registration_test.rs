//! Needs a real adapter. Run with `--features integration-tests`.
#![cfg(feature = "integration-tests")]

use scrape_race::{
    context::headless_device,
    data_structures::{geometry::PositionVertex, terrain::Room},
    render::RoomRenderer,
    resources::{GraphicsBackend, mesh::MeshRegistry},
};

use crate::common::test_utils::{layout, rng};

mod common;

fn registry() -> MeshRegistry {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (device, _queue) = runtime.block_on(headless_device()).unwrap();
    MeshRegistry::new(device)
}

#[test]
fn room_meshes_are_uploaded() {
    let mut meshes = registry();
    let room = Room::generate(layout(25), &mut meshes, &mut rng(3)).unwrap();
    assert_eq!(meshes.len(), 4);

    let cube = meshes.get(room.cube_buffer()).unwrap();
    assert_eq!(cube.num_elements, 36);
    for handle in room.wall_buffers() {
        assert_eq!(meshes.get(handle).unwrap().num_elements, 6);
    }

    let mut renderer = RoomRenderer::new();
    renderer.sync(meshes.device(), &room);
    assert_eq!(renderer.batches().len(), 4);
    assert_eq!(renderer.batches()[3].amount, 25);
}

#[test]
fn malformed_mesh_is_rejected() {
    let mut meshes = registry();
    let vertices = [PositionVertex::from([0.0, 0.0, 0.0]); 3];
    assert!(meshes.register_buffer("Broken", &vertices, &[0, 1]).is_err());
    assert!(meshes.register_buffer("Out of range", &vertices, &[0, 1, 3]).is_err());
    assert!(meshes.is_empty());
}
