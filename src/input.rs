//! Input collected between two frames.
//!
//! The event loop feeds winit events in, the game session drains the state once
//! per frame. Held keys persist, one-shot requests are consumed by `take_*`.

use winit::{
    event::{ElementState, MouseButton},
    keyboard::KeyCode,
};

use crate::camera::Direction;

#[derive(Clone, Debug, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    mouse_delta: (f64, f64),
    /// Set until the first motion after gaining focus has been swallowed.
    first_mouse: bool,
    click: bool,
    reset: bool,
    print_position: bool,
    regenerate: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            first_mouse: true,
            ..Default::default()
        }
    }

    /// Returns `true` if the key is used by the game.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state.is_pressed();
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::KeyH => self.reset |= pressed,
            KeyCode::KeyP => self.print_position |= pressed,
            KeyCode::KeyR => self.regenerate |= pressed,
            _ => return false,
        }
        true
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state.is_pressed() {
            self.click = true;
        }
    }

    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.first_mouse {
            self.first_mouse = false;
            return;
        }
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Called when the window loses focus: held keys are released and the next
    /// mouse motion is treated as the first one again.
    pub fn release_all(&mut self) {
        *self = Self::new();
    }

    pub fn held_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        [
            (self.forward, Direction::Forward),
            (self.backward, Direction::Backward),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }

    pub fn take_mouse_delta(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.mouse_delta)
    }

    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click)
    }

    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset)
    }

    pub fn take_print_position(&mut self) -> bool {
        std::mem::take(&mut self.print_position)
    }

    pub fn take_regenerate(&mut self) -> bool {
        std::mem::take(&mut self.regenerate)
    }
}
