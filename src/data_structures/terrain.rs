//! The room the player flies through.
//!
//! A [`Room`] is an axis-aligned box bounded by five walls (the near side stays open)
//! with `block_count` cubes scattered inside. Every fifth cube is interactive.
//! Geometry for the cube and the three wall shapes is registered exactly once when
//! the room is generated; regenerating only re-rolls placement.

use anyhow::Context;
use cgmath::Vector3;
use rand::Rng;

use crate::{
    data_structures::{
        geometry::{self, CUBE_INDICES, WALL_INDICES, WALL_SHAPES},
        instance::{Color, RenderObject},
    },
    pick::{self, Hit, Ray},
    resources::{BufferHandle, GraphicsBackend},
};

pub const BLOCK_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
pub const INTERACTIVE_BLOCK_COLOR: Color = [0.96, 0.57, 0.04, 1.0];
pub const WALL_COLOR: Color = [0.01, 0.04, 0.54, 1.0];
/// The back wall marks the finish line.
pub const GOAL_WALL_COLOR: Color = [0.09, 0.79, 0.02, 1.0];

/// Every n-th block (starting with the first) is interactive.
pub const INTERACTIVE_EVERY: usize = 5;
pub const WALL_COUNT: usize = 5;

/// Where the room is and what goes into it.
///
/// `dimensions` must be larger than `block_edge` on every axis. This is not checked:
/// smaller rooms just produce blocks on or outside the walls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomLayout {
    pub origin: Vector3<f32>,
    pub dimensions: Vector3<f32>,
    pub block_edge: f32,
    pub block_count: usize,
}

#[derive(Debug)]
pub struct Room {
    layout: RoomLayout,
    blocks: Vec<RenderObject>,
    walls: Vec<RenderObject>,
    cube_buffer: BufferHandle,
    wall_buffers: [BufferHandle; WALL_SHAPES],
    revision: u64,
}

impl Room {
    /// Registers the room's four meshes with `backend` and places blocks and walls.
    ///
    /// Fails only if the backend refuses a mesh, which leaves nothing to draw.
    pub fn generate<B, R>(layout: RoomLayout, backend: &mut B, rng: &mut R) -> anyhow::Result<Self>
    where
        B: GraphicsBackend + ?Sized,
        R: Rng + ?Sized,
    {
        let cube_buffer = backend
            .register_buffer("Block", &geometry::cube_vertices(layout.block_edge), &CUBE_INDICES)
            .context("Failed to register the block mesh")?;

        let [left_right, bottom_top, back] = geometry::wall_vertices(layout.dimensions);
        let wall_buffers = [
            backend
                .register_buffer("Side wall", &left_right, &WALL_INDICES)
                .context("Failed to register the side wall mesh")?,
            backend
                .register_buffer("Floor and ceiling", &bottom_top, &WALL_INDICES)
                .context("Failed to register the floor mesh")?,
            backend
                .register_buffer("Back wall", &back, &WALL_INDICES)
                .context("Failed to register the back wall mesh")?,
        ];

        let mut room = Self {
            layout,
            blocks: Vec::with_capacity(layout.block_count),
            walls: Vec::with_capacity(WALL_COUNT),
            cube_buffer,
            wall_buffers,
            revision: 0,
        };
        room.generate_blocks(rng);
        room.generate_walls();
        Ok(room)
    }

    /// Throws away all blocks and walls and places them again.
    ///
    /// The registered meshes are reused.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.generate_blocks(rng);
        self.generate_walls();
        self.revision += 1;
    }

    fn generate_blocks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let RoomLayout {
            origin,
            dimensions,
            block_edge,
            block_count,
        } = self.layout;
        // Keep the far side of every block inside the room.
        let span = dimensions - Vector3::new(block_edge, block_edge, block_edge);

        self.blocks.clear();
        for i in 0..block_count {
            let offset = Vector3::new(
                rng.r#gen::<f32>() * span.x,
                rng.r#gen::<f32>() * span.y,
                rng.r#gen::<f32>() * span.z,
            );
            let interactive = i % INTERACTIVE_EVERY == 0;
            let color = if interactive {
                INTERACTIVE_BLOCK_COLOR
            } else {
                BLOCK_COLOR
            };
            self.blocks.push(RenderObject::block(
                self.cube_buffer,
                origin + offset,
                color,
                interactive,
            ));
        }
        log::info!("Terrain generated with {} blocks", self.blocks.len());
    }

    fn generate_walls(&mut self) {
        let origin = self.layout.origin;
        let dim = self.layout.dimensions;
        let [side, floor, goal] = self.wall_buffers;

        self.walls.clear();
        self.walls.extend([
            RenderObject::wall(side, origin, WALL_COLOR),
            RenderObject::wall(side, origin + Vector3::new(dim.x, 0.0, 0.0), WALL_COLOR),
            RenderObject::wall(floor, origin, WALL_COLOR),
            RenderObject::wall(floor, origin + Vector3::new(0.0, dim.y, 0.0), WALL_COLOR),
            RenderObject::wall(goal, origin + Vector3::new(0.0, 0.0, dim.z), GOAL_WALL_COLOR),
        ]);
    }

    /// Closest block hit by `ray`, ignoring the blocks at the indices in `skip`.
    pub fn closest_hit(&self, ray: &Ray, skip: &[usize]) -> Option<Hit> {
        pick::closest_hit(&self.blocks, self.layout.block_edge, ray, skip)
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn origin(&self) -> Vector3<f32> {
        self.layout.origin
    }

    pub fn dimensions(&self) -> Vector3<f32> {
        self.layout.dimensions
    }

    /// The corner opposite to [`origin`](Self::origin).
    pub fn max(&self) -> Vector3<f32> {
        self.layout.origin + self.layout.dimensions
    }

    pub fn block_edge(&self) -> f32 {
        self.layout.block_edge
    }

    pub fn blocks(&self) -> &[RenderObject] {
        &self.blocks
    }

    pub fn walls(&self) -> &[RenderObject] {
        &self.walls
    }

    pub fn cube_buffer(&self) -> BufferHandle {
        self.cube_buffer
    }

    pub fn wall_buffers(&self) -> [BufferHandle; WALL_SHAPES] {
        self.wall_buffers
    }

    /// Bumped on every [`regenerate`](Self::regenerate).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Walls first, then blocks. This is also the draw order.
    pub fn objects(&self) -> impl Iterator<Item = &RenderObject> {
        self.walls.iter().chain(self.blocks.iter())
    }
}
