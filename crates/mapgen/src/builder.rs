use castlewalk_common::Side;
use castlewalk_kernel::ColliderRegistry;

use crate::corridor::Corridor;
use crate::room::{Room, SideWalls, WallSegment};
use crate::scene::SceneSink;

/// Counts of what a build emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rooms: usize,
    pub corridors: usize,
    pub floors: usize,
    pub walls: usize,
    pub doorways: usize,
}

/// Emits primitives into a scene and keeps the collider registry in step.
///
/// Every wall goes to both the scene and the registry in one call; floors
/// only go to the scene.
pub struct MapBuilder<'a, S: SceneSink> {
    scene: &'a mut S,
    colliders: ColliderRegistry,
    wall_height: f32,
    wall_thickness: f32,
    stats: BuildStats,
}

impl<'a, S: SceneSink> MapBuilder<'a, S> {
    pub fn new(scene: &'a mut S, wall_height: f32, wall_thickness: f32) -> Self {
        Self {
            scene,
            colliders: ColliderRegistry::new(),
            wall_height,
            wall_thickness,
            stats: BuildStats::default(),
        }
    }

    fn wall(&mut self, segment: &WallSegment) {
        self.scene.add(segment.primitive());
        self.colliders.register(segment.aabb());
        self.stats.walls += 1;
    }

    /// Emit one side's walls and register their colliders.
    pub fn side(&mut self, walls: &SideWalls) {
        for segment in walls.segments() {
            self.wall(&segment);
        }
        if walls.gap().is_some() {
            self.stats.doorways += 1;
        }
    }

    pub fn room(&mut self, room: &Room) {
        self.scene.add(room.floor());
        self.stats.floors += 1;
        for side in Side::ALL {
            let walls = room.side_walls(side, self.wall_height, self.wall_thickness);
            self.side(&walls);
        }
        self.stats.rooms += 1;
        tracing::debug!(
            x = room.center.x,
            z = room.center.y,
            doors = ?room.door_sides(),
            "room emitted"
        );
    }

    pub fn corridor(&mut self, corridor: &Corridor) {
        self.scene.add(corridor.floor());
        self.stats.floors += 1;
        for segment in corridor.side_walls(self.wall_height, self.wall_thickness) {
            self.wall(&segment);
        }
        self.stats.corridors += 1;
        tracing::debug!(
            x = corridor.center.x,
            z = corridor.center.y,
            axis = ?corridor.axis,
            "corridor emitted"
        );
    }

    /// Hand over the finished registry.
    pub fn finish(self) -> (ColliderRegistry, BuildStats) {
        (self.colliders, self.stats)
    }
}
