//! Game session: the player, their camera and the room, plus the rules tying them together.
//!
//! # Rules
//!
//! - Clicking snaps the player into the closest block in the middle of the screen.
//!   Every successful snap costs one click
//! - Leaving the room sideways (x or y) costs a life and sends the player back to the start
//! - Passing the far (green) wall wins the game, losing the last life loses it.
//!   If both happen in the same frame the win stands
//!
//! A finished session stays in its terminal [`GameState`]. Shutting down is left to
//! whoever drives the session.

use instant::Duration;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    camera::Camera,
    config::GameConfig,
    data_structures::terrain::Room,
    input::InputState,
    pick::{self, Hit},
    resources::GraphicsBackend,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Active,
    Win,
    Lose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub lives: u32,
    pub clicks_left: u32,
}

impl Player {
    pub fn new(lives: u32, clicks: u32) -> Self {
        Self {
            lives,
            clicks_left: clicks,
        }
    }
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    pub camera: Camera,
    pub player: Player,
    room: Room,
    state: GameState,
    rng: StdRng,
}

impl GameSession {
    /// Builds a session seeded from `config.seed`, or from entropy if there is none.
    pub fn new<B: GraphicsBackend + ?Sized>(config: GameConfig, backend: &mut B) -> anyhow::Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, backend, rng)
    }

    pub fn with_rng<B: GraphicsBackend + ?Sized>(
        config: GameConfig,
        backend: &mut B,
        mut rng: StdRng,
    ) -> anyhow::Result<Self> {
        let room = Room::generate(config.room, backend, &mut rng)?;
        Ok(Self {
            camera: Camera::from_config(&config),
            player: Player::new(config.lives, config.clicks),
            room,
            state: GameState::Menu,
            rng,
            config,
        })
    }

    pub fn start(&mut self) {
        if self.state == GameState::Menu {
            log::info!("Game started");
            self.state = GameState::Active;
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Win | GameState::Lose)
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advances the session by one frame. Does nothing unless the game is running.
    pub fn update(&mut self, input: &mut InputState, dt: Duration) {
        if self.state != GameState::Active {
            return;
        }
        let dt = dt.as_secs_f32();
        for direction in input.held_directions() {
            self.camera.process_keyboard(direction, dt);
        }
        let (dx, dy) = input.take_mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_mouse(dx as f32, dy as f32);
        }
        if input.take_reset() {
            self.camera.reset();
        }
        if input.take_print_position() {
            let p = self.camera.position;
            log::info!("Player position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        }
        if input.take_regenerate() {
            self.regenerate_terrain();
        }
        if input.take_click() {
            self.check_click_hit();
        }
        self.check_bounds();
    }

    /// Casts the camera ray and snaps the player to the closest block it hits.
    ///
    /// Blocks the player is currently sitting in are ignored. Without clicks left
    /// nothing happens.
    pub fn check_click_hit(&mut self) -> Option<Hit> {
        if self.player.clicks_left == 0 {
            log::info!("No clicks left");
            return None;
        }
        let perch = pick::containing(self.room.blocks(), self.room.block_edge(), self.camera.position);

        match self.room.closest_hit(&self.camera.ray(), &perch) {
            Some(hit) => {
                self.player.clicks_left -= 1;
                self.camera.set_position(hit.snap_point);
                log::info!(
                    "Hit block {} at distance {:.2} ({} clicks left)",
                    hit.index,
                    hit.distance,
                    self.player.clicks_left
                );
                Some(hit)
            }
            None => {
                log::info!("No hit");
                None
            }
        }
    }

    /// Applies the room boundaries to the camera position.
    pub fn check_bounds(&mut self) -> GameState {
        let position = self.camera.position;
        let min = self.room.origin();
        let max = self.room.max();

        if position.x < min.x || position.y < min.y || position.x > max.x || position.y > max.y {
            self.player.lives = self.player.lives.saturating_sub(1);
            log::warn!("Out of bounds! {} lives left", self.player.lives);
            if self.player.lives == 0 {
                self.state = GameState::Lose;
                log::info!("Game over!");
            }
            self.camera.reset();
        }
        // Passing the far wall counts even if the same frame cost the last life.
        if position.z > max.z {
            self.state = GameState::Win;
            log::info!("You win!");
        }
        self.state
    }

    /// Re-rolls block placement. Clicks and lives are left alone.
    pub fn regenerate_terrain(&mut self) {
        self.room.regenerate(&mut self.rng);
    }
}
