//! wgpu render backend for castlewalk.
//!
//! Draws the static castle scene as instanced unit cubes (walls) and unit
//! quads (floors), lit by one directional light plus ambient. The camera is
//! a perspective projection driven by the player's yaw and pitch.
//!
//! # Invariants
//! - The renderer never mutates play state.
//! - Scene geometry is uploaded once; frames only rewrite the camera uniform.

mod camera;
mod gpu;
mod shaders;

pub use camera::{Projection, view_matrix};
pub use gpu::{WgpuFrame, WgpuRenderer, material_color};

pub fn crate_info() -> &'static str {
    "castlewalk-render-wgpu v0.1.0"
}
