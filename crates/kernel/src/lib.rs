//! Play kernel: collider registry, player movement, simulation stepping,
//! and the per-frame driver.
//!
//! # Invariants
//! - The collider registry is append-only while the map is built and
//!   read-only once the simulation owns it.
//! - Movement commits X and Z independently; a blocked axis is discarded
//!   without affecting the other.
//! - A frame's `dt` never exceeds the configured maximum.

pub mod colliders;
pub mod frame;
pub mod movement;
pub mod player;
pub mod simulation;

pub use colliders::ColliderRegistry;
pub use frame::{FrameClock, FrameLoop, FrameTimer};
pub use movement::{AxisResult, MoveOutcome};
pub use player::Player;
pub use simulation::Simulation;

pub fn crate_info() -> &'static str {
    "castlewalk-kernel v0.1.0"
}
