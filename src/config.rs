//! Game parameters.
//!
//! Everything that shapes a run lives in [`GameConfig`]. The defaults describe the
//! regular game; [`GameConfig::from_env`] lets a few of them be overridden without
//! recompiling.

use std::{env, str::FromStr};

use cgmath::{Deg, Vector3};

use crate::data_structures::terrain::RoomLayout;

pub const SEED_VAR: &str = "SCRAPE_RACE_SEED";
pub const BLOCKS_VAR: &str = "SCRAPE_RACE_BLOCKS";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,

    pub start_position: Vector3<f32>,
    /// Initial heading around the y axis. 90° looks down +z into the room.
    pub start_yaw: Deg<f32>,
    pub start_pitch: Deg<f32>,
    pub camera_speed: f32,
    /// Degrees of rotation per unit of mouse movement.
    pub mouse_sensitivity: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,

    pub room: RoomLayout,
    pub lives: u32,
    pub clicks: u32,
    /// Fixed seed for block placement. A random one is used if unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "ScrapeRace".to_string(),
            width: 800,
            height: 600,
            clear_colour: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            start_position: Vector3::new(3.0, 3.0, -1.0),
            start_yaw: Deg(90.0),
            start_pitch: Deg(0.0),
            camera_speed: 2.5,
            mouse_sensitivity: 0.1,
            fovy: Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
            room: RoomLayout {
                origin: Vector3::new(2.0, 2.0, 2.0),
                dimensions: Vector3::new(3.0, 3.0, 20.0),
                block_edge: 0.2,
                block_count: 300,
            },
            lives: 3,
            clicks: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults with `SCRAPE_RACE_SEED` and `SCRAPE_RACE_BLOCKS` applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`. Unparsable values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse_var::<u64>(SEED_VAR, lookup(SEED_VAR)) {
            self.seed = Some(seed);
        }
        if let Some(blocks) = parse_var::<usize>(BLOCKS_VAR, lookup(BLOCKS_VAR)) {
            self.room.block_count = blocks;
        }
        self
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid number", key, value);
            None
        }
    }
}
