use cgmath::{Deg, InnerSpace};
use scrape_race::{
    Vector3,
    camera::{Camera, Direction},
    config::GameConfig,
};

use crate::common::test_utils::assert_vec_eq;

mod common;

fn assert_deg_eq(actual: Deg<f32>, expected: Deg<f32>) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn pitch_is_clamped_when_looking_far_up_or_down() {
    let mut camera = Camera::new((0.0, 0.0, 0.0), Deg(90.0), Deg(0.0));
    camera.process_mouse(0.0, -10_000.0);
    assert_eq!(camera.pitch(), Deg(89.0));

    camera.process_mouse(0.0, 10_000.0);
    assert_eq!(camera.pitch(), Deg(-89.0));
}

#[test]
fn start_pitch_is_clamped_too() {
    let camera = Camera::new((0.0, 0.0, 0.0), Deg(0.0), Deg(120.0));
    assert_eq!(camera.pitch(), Deg(89.0));
}

#[test]
fn mouse_look_is_scaled_by_sensitivity() {
    let mut config = GameConfig::default();
    config.mouse_sensitivity = 0.5;
    let mut camera = Camera::from_config(&config);

    camera.process_mouse(10.0, 4.0);
    assert_deg_eq(camera.yaw(), Deg(95.0));
    assert_deg_eq(camera.pitch(), Deg(-2.0));
}

#[test]
fn reset_restores_position_and_orientation() {
    let config = GameConfig::default();
    let mut camera = Camera::from_config(&config);

    camera.process_keyboard(Direction::Forward, 1.0);
    camera.process_keyboard(Direction::Left, 0.5);
    camera.process_mouse(300.0, -150.0);
    camera.set_position(Vector3::new(9.0, 9.0, 9.0));

    camera.reset();
    assert_vec_eq(camera.position, config.start_position);
    assert_eq!(camera.yaw(), config.start_yaw);
    assert_eq!(camera.pitch(), config.start_pitch);
}

#[test]
fn default_camera_looks_into_the_room() {
    let camera = Camera::from_config(&GameConfig::default());
    assert_vec_eq(camera.front(), Vector3::new(0.0, 0.0, 1.0));
    assert_vec_eq(camera.up(), Vector3::new(0.0, 1.0, 0.0));
}

#[test]
fn basis_stays_orthonormal_when_turned() {
    let camera = Camera::new((1.0, 2.0, 3.0), Deg(37.0), Deg(-25.0));
    let (front, right, up) = (camera.front(), camera.right(), camera.up());

    for v in [front, right, up] {
        assert!((v.magnitude() - 1.0).abs() < 1e-5);
    }
    assert!(front.dot(up).abs() < 1e-5);
    assert!(front.dot(right).abs() < 1e-5);
    assert!(up.y > 0.0);
}

#[test]
fn inverse_front_is_the_reciprocal_of_front() {
    let camera = Camera::new((0.0, 0.0, 0.0), Deg(30.0), Deg(20.0));
    let front = camera.front();
    let inv = camera.inverse_front();

    for axis in 0..3 {
        assert!((front[axis] * inv[axis] - 1.0).abs() < 1e-5);
    }
}

#[test]
fn inverse_front_of_a_level_camera_is_infinite_on_y() {
    let camera = Camera::new((0.0, 0.0, 0.0), Deg(30.0), Deg(0.0));
    assert!(camera.inverse_front().y.is_infinite());
}

#[test]
fn ray_starts_at_the_camera() {
    let mut camera = Camera::new((0.0, 0.0, 0.0), Deg(45.0), Deg(10.0));
    camera.set_position(Vector3::new(2.5, 3.5, 7.0));

    let ray = camera.ray();
    assert_vec_eq(ray.origin, camera.position);
    assert_vec_eq(ray.inv_direction, camera.inverse_front());
}

#[test]
fn forward_moves_along_front() {
    let mut camera = Camera::new((0.0, 0.0, 0.0), Deg(0.0), Deg(0.0));
    let front = camera.front();
    camera.process_keyboard(Direction::Forward, 2.0);
    assert_vec_eq(camera.position, front * 2.5 * 2.0);

    camera.process_keyboard(Direction::Backward, 2.0);
    assert_vec_eq(camera.position, Vector3::new(0.0, 0.0, 0.0));
}
