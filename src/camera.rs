//! First-person camera, projection and the uniform uploaded to the GPU.

use cgmath::{Angle, Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, SquareMatrix, Vector3, perspective};

use crate::{config::GameConfig, pick::Ray};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const PITCH_LIMIT: Deg<f32> = Deg(89.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// A free-flying first-person camera.
///
/// Remembers where it started so [`reset`](Self::reset) can put the player back.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vector3<f32>,
    yaw: Deg<f32>,
    pitch: Deg<f32>,
    start_position: Vector3<f32>,
    start_yaw: Deg<f32>,
    start_pitch: Deg<f32>,
    speed: f32,
    sensitivity: f32,
}

impl Camera {
    pub fn new<V: Into<Vector3<f32>>>(position: V, yaw: Deg<f32>, pitch: Deg<f32>) -> Self {
        let position = position.into();
        let pitch = clamp_pitch(pitch);
        Self {
            position,
            yaw,
            pitch,
            start_position: position,
            start_yaw: yaw,
            start_pitch: pitch,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Self::new(config.start_position, config.start_yaw, config.start_pitch);
        camera.speed = config.camera_speed;
        camera.sensitivity = config.mouse_sensitivity;
        camera
    }

    pub fn yaw(&self) -> Deg<f32> {
        self.yaw
    }

    pub fn pitch(&self) -> Deg<f32> {
        self.pitch
    }

    /// Unit vector the camera looks along.
    pub fn front(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(Vector3::unit_y()).normalize()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(self.front()).normalize()
    }

    /// Component-wise reciprocal of [`front`](Self::front), as consumed by the slab test.
    pub fn inverse_front(&self) -> Vector3<f32> {
        crate::pick::invert(self.front())
    }

    /// Ray from the camera through the centre of the screen.
    pub fn ray(&self) -> Ray {
        Ray::from_inverse(self.position, self.inverse_front())
    }

    pub fn process_keyboard(&mut self, direction: Direction, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            Direction::Forward => self.position += self.front() * velocity,
            Direction::Backward => self.position -= self.front() * velocity,
            Direction::Left => self.position -= self.right() * velocity,
            Direction::Right => self.position += self.right() * velocity,
        }
    }

    /// Turn by a mouse delta. Positive `dy` (mouse moved down) looks down.
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw = self.yaw + Deg(dx * self.sensitivity);
        self.pitch = clamp_pitch(self.pitch - Deg(dy * self.sensitivity));
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    /// Back to the start position and orientation.
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.yaw = self.start_yaw;
        self.pitch = self.start_pitch;
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(Point3::from_vec(self.position), self.front(), Vector3::unit_y())
    }
}

fn clamp_pitch(pitch: Deg<f32>) -> Deg<f32> {
    Deg(pitch.0.clamp(-PITCH_LIMIT.0, PITCH_LIMIT.0))
}

#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Deg<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, fovy: Deg<f32>, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy,
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_proj = (projection.calc_matrix() * camera.view_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
