use castlewalk_common::{Aabb, Side};
use glam::{Vec2, Vec3};

use crate::error::MapError;
use crate::scene::Primitive;

/// One wall box, described by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub center: Vec3,
    pub size: Vec3,
}

impl WallSegment {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    pub fn primitive(&self) -> Primitive {
        Primitive::wall(self.center, self.size)
    }
}

/// How one side of a room is closed off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SideWalls {
    /// A single wall across the whole side.
    Full(WallSegment),
    /// Two walls flanking a centred opening of width `gap`.
    DoorFlanked {
        gap: f32,
        first: WallSegment,
        second: WallSegment,
    },
}

impl SideWalls {
    pub fn segments(&self) -> Vec<WallSegment> {
        match self {
            SideWalls::Full(wall) => vec![*wall],
            SideWalls::DoorFlanked { first, second, .. } => vec![*first, *second],
        }
    }

    pub fn gap(&self) -> Option<f32> {
        match self {
            SideWalls::Full(_) => None,
            SideWalls::DoorFlanked { gap, .. } => Some(*gap),
        }
    }
}

/// A rectangular room on the XZ plane. Exists only while the map is being
/// built; afterwards only its floor, walls and colliders remain.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub center: Vec2,
    pub half_extents: Vec2,
    doors: [Option<f32>; 4],
}

impl Room {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
            doors: [None; 4],
        }
    }

    pub fn square(center: Vec2, size: f32) -> Self {
        Self::new(center, Vec2::splat(size / 2.0))
    }

    /// Open a centred door of `width` on `side`.
    pub fn with_door(mut self, side: Side, width: f32) -> Result<Self, MapError> {
        let span = self.span(side);
        if width.is_nan() || width <= 0.0 {
            return Err(MapError::DoorTooNarrow { side, width });
        }
        if width >= span {
            return Err(MapError::DoorTooWide { side, width, span });
        }
        self.doors[side.index()] = Some(width);
        Ok(self)
    }

    pub fn door(&self, side: Side) -> Option<f32> {
        self.doors[side.index()]
    }

    pub fn door_sides(&self) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|s| self.door(*s).is_some())
            .collect()
    }

    /// Length of the wall line on `side`.
    pub fn span(&self, side: Side) -> f32 {
        if side.runs_along_x() {
            self.half_extents.x * 2.0
        } else {
            self.half_extents.y * 2.0
        }
    }

    pub fn floor(&self) -> Primitive {
        Primitive::floor(
            Vec3::new(self.center.x, 0.0, self.center.y),
            self.half_extents.x * 2.0,
            self.half_extents.y * 2.0,
        )
    }

    /// Walls for `side`, centred on the room boundary and standing on the floor.
    pub fn side_walls(&self, side: Side, height: f32, thickness: f32) -> SideWalls {
        let span = self.span(side);
        let normal = side.normal();
        let line = Vec3::new(
            self.center.x + normal.x * self.half_extents.x,
            height / 2.0,
            self.center.y + normal.z * self.half_extents.y,
        );
        let along = if side.runs_along_x() { Vec3::X } else { Vec3::Z };

        match self.door(side) {
            None => SideWalls::Full(WallSegment {
                center: line,
                size: wall_size(side, span, height, thickness),
            }),
            Some(gap) => {
                let piece = (span - gap) / 2.0;
                let offset = (gap + piece) / 2.0;
                let size = wall_size(side, piece, height, thickness);
                SideWalls::DoorFlanked {
                    gap,
                    first: WallSegment {
                        center: line - along * offset,
                        size,
                    },
                    second: WallSegment {
                        center: line + along * offset,
                        size,
                    },
                }
            }
        }
    }
}

/// Box size for a wall of `length` running along `side`'s boundary line.
fn wall_size(side: Side, length: f32, height: f32, thickness: f32) -> Vec3 {
    if side.runs_along_x() {
        Vec3::new(length, height, thickness)
    } else {
        Vec3::new(thickness, height, length)
    }
}
