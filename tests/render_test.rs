use scrape_race::{
    data_structures::terrain::{BLOCK_COLOR, GOAL_WALL_COLOR, Room, WALL_COLOR},
    render::batch_objects,
};

use crate::common::test_utils::{RecordingBackend, layout, rng};

mod common;

#[test]
fn objects_sharing_a_mesh_share_a_batch() {
    let mut backend = RecordingBackend::new();
    let room = Room::generate(layout(10), &mut backend, &mut rng(4)).unwrap();
    let [side, floor, goal] = room.wall_buffers();

    let batches = batch_objects(room.objects());
    let summary: Vec<_> = batches
        .iter()
        .map(|b| (b.buffer, b.vertex_count, b.instances.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (side, 6, 2),
            (floor, 6, 2),
            (goal, 6, 1),
            (room.cube_buffer(), 36, 10),
        ]
    );
}

#[test]
fn instances_carry_translation_and_colour() {
    let mut backend = RecordingBackend::new();
    let room = Room::generate(layout(6), &mut backend, &mut rng(5)).unwrap();
    let batches = batch_objects(room.objects());

    assert_eq!(batches[0].instances[0].color, WALL_COLOR);
    assert_eq!(batches[2].instances[0].color, GOAL_WALL_COLOR);
    let goal = batches[2].instances[0].model[3];
    assert_eq!(goal, [2.0, 2.0, 22.0, 1.0]);

    let cubes = &batches[3];
    for (raw, block) in cubes.instances.iter().zip(room.blocks()) {
        let p = block.position;
        assert_eq!(raw.model[3], [p.x, p.y, p.z, 1.0]);
    }
    assert_eq!(cubes.instances[1].color, BLOCK_COLOR);
}

#[test]
fn empty_room_still_batches_walls() {
    let mut backend = RecordingBackend::new();
    let room = Room::generate(layout(0), &mut backend, &mut rng(6)).unwrap();
    let batches = batch_objects(room.objects());
    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.vertex_count == 6));
}
