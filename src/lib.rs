//! scrape-race
//!
//! A minimal first-person "collect the blocks, avoid the walls" game on top of wgpu.
//! The player flies through a long room filled with randomly placed cubes, snaps from
//! block to block by clicking at them and wins by passing the green back wall.
//!
//! High-level modules
//! - `camera`: first-person camera, projection and camera uniform
//! - `config`: game parameters and environment overrides
//! - `context`: central GPU and window context that owns device/queue/pipeline/meshes
//! - `data_structures`: room geometry, placed objects and the room generator
//! - `flow`: the winit event loop driving a game session
//! - `game`: player, game state and the rules of a session
//! - `input`: keyboard and mouse state collected between frames
//! - `pick`: ray/box intersection and closest-block picking
//! - `pipelines`: render pipeline definitions
//! - `resources`: registering geometry with the graphics backend
//! - `render`: batching room objects into instanced draws
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod game;
pub mod input;
pub mod pick;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::Vector3;
