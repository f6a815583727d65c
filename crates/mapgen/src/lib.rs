//! Procedural castle generation.
//!
//! Rooms and corridors are described as plain values, then a [`MapBuilder`]
//! emits their floors and walls into a [`SceneSink`] and registers every
//! wall's box in a [`castlewalk_kernel::ColliderRegistry`].
//!
//! # Invariants
//! - Each room side gets exactly one treatment: a full wall or two walls
//!   flanking a centred door gap.
//! - Every emitted wall has exactly one collider with identical bounds;
//!   floors have none.
//! - Identical config and door plan produce identical primitive lists.

pub mod builder;
pub mod corridor;
pub mod error;
pub mod layout;
pub mod room;
pub mod scene;

pub use builder::{BuildStats, MapBuilder};
pub use corridor::{Corridor, CorridorAxis};
pub use error::MapError;
pub use layout::{
    CastleMap, DoorPlan, build_castle, build_castle_with, castle_corridors, castle_rooms,
    spawn_point,
};
pub use room::{Room, SideWalls, WallSegment};
pub use scene::{Material, Primitive, SceneSink, Shape};

pub fn crate_info() -> &'static str {
    "castlewalk-mapgen v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert_eq!(crate_info(), "castlewalk-mapgen v0.1.0");
    }
}
