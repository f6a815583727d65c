//! Shared types for castlewalk: bounding boxes, compass sides, startup config.
//!
//! # Invariants
//! - `Aabb::min <= Aabb::max` component-wise.
//! - Configuration is read once at startup and never mutated afterwards.

pub mod config;
pub mod types;

pub use config::{ConfigError, FrameConfig, GameConfig, MapConfig, PlayerConfig};
pub use types::{Aabb, Side};

pub fn crate_info() -> &'static str {
    "castlewalk-common v0.1.0"
}
