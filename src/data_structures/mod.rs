//! Room data structures.
//!
//! - `geometry` holds the raw vertex data and triangulations of the cube and wall shapes
//! - `instance` holds placed objects (blocks and walls) and their GPU instance data
//! - `terrain` generates and owns the room
//! - `texture` contains the depth texture wrapper

pub mod geometry;
pub mod instance;
pub mod terrain;
pub mod texture;
