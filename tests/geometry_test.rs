use scrape_race::{
    Vector3,
    data_structures::geometry::{CUBE_INDICES, WALL_INDICES, cube_vertices, wall_vertices},
};

#[test]
fn cube_spans_origin_to_edge() {
    let vertices = cube_vertices(0.2);
    assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(vertices[7].position, [0.2, 0.2, 0.2]);
    for vertex in vertices {
        for c in vertex.position {
            assert!(c == 0.0 || c == 0.2, "unexpected component {}", c);
        }
    }
}

#[test]
fn cube_corners_are_distinct() {
    let vertices = cube_vertices(1.0);
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn cube_triangulation_covers_six_faces() {
    assert_eq!(CUBE_INDICES.len(), 36);
    let vertices = cube_vertices(1.0);
    // Every triangle lies in one of the six faces: all three corners share one coordinate.
    for triangle in CUBE_INDICES.chunks(3) {
        let corners: Vec<[f32; 3]> = triangle
            .iter()
            .map(|&i| vertices[i as usize].position)
            .collect();
        let on_face = (0..3).any(|axis| {
            corners.iter().all(|c| c[axis] == corners[0][axis])
        });
        assert!(on_face, "triangle {:?} cuts through the cube", triangle);
    }
    // Each face is split into two triangles.
    let mut faces = Vec::new();
    for triangle in CUBE_INDICES.chunks(3) {
        let corners: Vec<[f32; 3]> = triangle
            .iter()
            .map(|&i| vertices[i as usize].position)
            .collect();
        let face = (0..3)
            .find(|&axis| corners.iter().all(|c| c[axis] == corners[0][axis]))
            .map(|axis| (axis, corners[0][axis] as i32));
        faces.push(face.unwrap());
    }
    for axis in 0..3 {
        for side in [0, 1] {
            assert_eq!(faces.iter().filter(|&&f| f == (axis, side)).count(), 2);
        }
    }
}

#[test]
fn walls_lie_in_their_planes() {
    let [side, floor, back] = wall_vertices(Vector3::new(3.0, 4.0, 20.0));

    assert!(side.iter().all(|v| v.position[0] == 0.0));
    assert!(floor.iter().all(|v| v.position[1] == 0.0));
    assert!(back.iter().all(|v| v.position[2] == 0.0));

    assert_eq!(side[3].position, [0.0, 4.0, 20.0]);
    assert_eq!(floor[3].position, [3.0, 0.0, 20.0]);
    assert_eq!(back[3].position, [3.0, 4.0, 0.0]);
}

#[test]
fn wall_quads_use_both_triangles() {
    assert_eq!(WALL_INDICES.len(), 6);
    let mut used = [false; 4];
    for &i in &WALL_INDICES {
        used[i as usize] = true;
    }
    assert!(used.iter().all(|&u| u));
}
