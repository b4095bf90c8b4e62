//! Object picking and selection.
//!
//! Picking casts a ray from the camera through the centre of the screen and tests it
//! against every block of the room with the slab method:
//!
//! 1. For every axis compute where the ray enters and leaves the slab between the
//!    box's two planes on that axis
//! 2. Keep the latest entry (`tmin`, never behind the origin) and the earliest exit (`tmax`)
//! 3. The box is hit if the ray enters all slabs before it leaves any of them
//!
//! The ray carries the component-wise inverse of its direction. A zero direction
//! component becomes an infinity. If the origin lies strictly between that axis' planes
//! its slab distances are `-inf..inf` and the axis stops constraining the hit. If it lies
//! exactly on one of the planes, `0 * inf` yields a `NaN`. The local `min` and `max` keep their
//! first operand whenever the comparison fails, so a `NaN` slab distance drops out at the
//! outer clamp and leaves the running bounds alone.

use cgmath::{InnerSpace, Vector3};

use crate::data_structures::instance::RenderObject;

/// A pick ray: origin plus the reciprocal of its direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub inv_direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            inv_direction: invert(direction),
        }
    }

    pub fn from_inverse(origin: Vector3<f32>, inv_direction: Vector3<f32>) -> Self {
        Self {
            origin,
            inv_direction,
        }
    }
}

/// Component-wise reciprocal. Zero components turn into (signed) infinities.
pub fn invert(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(1.0 / v.x, 1.0 / v.y, 1.0 / v.z)
}

/// Slab test of a ray against the cube spanning `box_min..box_min + edge`.
pub fn intersect(
    box_min: Vector3<f32>,
    edge: f32,
    ray_origin: Vector3<f32>,
    inv_direction: Vector3<f32>,
) -> bool {
    let box_max = box_min + Vector3::new(edge, edge, edge);

    let mut tmin = 0.0_f32;
    let mut tmax = f32::INFINITY;

    for axis in 0..3 {
        let t1 = (box_min[axis] - ray_origin[axis]) * inv_direction[axis];
        let t2 = (box_max[axis] - ray_origin[axis]) * inv_direction[axis];

        tmin = max(tmin, min(min(t1, t2), tmax));
        tmax = min(tmax, max(max(t1, t2), tmin));
    }

    tmin < tmax
}

/// `b` if it is smaller than `a`, otherwise `a`. Unlike [`f32::min`] a `NaN` in `a` is kept.
fn min(a: f32, b: f32) -> f32 {
    if b < a { b } else { a }
}

/// `b` if it is larger than `a`, otherwise `a`.
fn max(a: f32, b: f32) -> f32 {
    if a < b { b } else { a }
}

/// The block a pick ray ran into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Index into the slice of blocks that was searched.
    pub index: usize,
    pub position: Vector3<f32>,
    /// Distance from the ray origin to the block's position.
    pub distance: f32,
    pub interactive: bool,
    /// Where the player ends up when snapping to the block: its centre.
    pub snap_point: Vector3<f32>,
}

/// Finds the closest of `blocks` hit by `ray`.
///
/// Blocks that are not closer than the best hit so far are skipped without testing.
/// Blocks whose index is in `skip` are left out, typically the ones the ray starts in.
pub fn closest_hit(blocks: &[RenderObject], edge: f32, ray: &Ray, skip: &[usize]) -> Option<Hit> {
    let half = Vector3::new(edge, edge, edge) * 0.5;

    let mut closest: Option<Hit> = None;
    for (index, block) in blocks.iter().enumerate() {
        if skip.contains(&index) {
            continue;
        }
        let distance = (block.position - ray.origin).magnitude();
        if closest.is_some_and(|hit| distance >= hit.distance) {
            continue;
        }
        if intersect(block.position, edge, ray.origin, ray.inv_direction) {
            closest = Some(Hit {
                index,
                position: block.position,
                distance,
                interactive: block.is_interactive(),
                snap_point: block.position + half,
            });
        }
    }
    closest
}

/// Indices of all `blocks` containing `point`.
pub fn containing(blocks: &[RenderObject], edge: f32, point: Vector3<f32>) -> Vec<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| contains(block.position, edge, point))
        .map(|(index, _)| index)
        .collect()
}

/// True if `point` lies inside the cube spanning `box_min..box_min + edge`.
pub fn contains(box_min: Vector3<f32>, edge: f32, point: Vector3<f32>) -> bool {
    let rel = point - box_min;
    (0..3).all(|axis| rel[axis] >= 0.0 && rel[axis] <= edge)
}

/// Unit direction from `from` towards `to`.
pub fn direction(from: Vector3<f32>, to: Vector3<f32>) -> Vector3<f32> {
    (to - from).normalize()
}
