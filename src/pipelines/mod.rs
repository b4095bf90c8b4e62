//! Render pipelines.
//!
//! - `basic`: flat coloured, instanced geometry (walls and blocks)

pub mod basic;
