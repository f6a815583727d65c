use glam::{Vec2, Vec3};

use crate::room::WallSegment;
use crate::scene::Primitive;

/// Direction a corridor runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorAxis {
    /// Joins two rooms side by side (east-west).
    AlongX,
    /// Joins two rooms one above the other (north-south).
    AlongZ,
}

/// A straight passage with a floor and a wall on each long side.
/// Its ends are left open; the rooms' door gaps close them off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corridor {
    pub center: Vec2,
    pub axis: CorridorAxis,
    pub length: f32,
    pub width: f32,
}

impl Corridor {
    pub fn floor(&self) -> Primitive {
        let (w, d) = match self.axis {
            CorridorAxis::AlongX => (self.length, self.width),
            CorridorAxis::AlongZ => (self.width, self.length),
        };
        Primitive::floor(Vec3::new(self.center.x, 0.0, self.center.y), w, d)
    }

    /// The two side walls, each centred on a line `width / 2` from the axis.
    pub fn side_walls(&self, height: f32, thickness: f32) -> [WallSegment; 2] {
        let half = self.width / 2.0;
        let (offset, size) = match self.axis {
            CorridorAxis::AlongX => (Vec3::Z * half, Vec3::new(self.length, height, thickness)),
            CorridorAxis::AlongZ => (Vec3::X * half, Vec3::new(thickness, height, self.length)),
        };
        let mid = Vec3::new(self.center.x, height / 2.0, self.center.y);
        [
            WallSegment {
                center: mid - offset,
                size,
            },
            WallSegment {
                center: mid + offset,
                size,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_corridor_walls() {
        let c = Corridor {
            center: Vec2::new(0.0, -9.0),
            axis: CorridorAxis::AlongX,
            length: 8.0,
            width: 3.0,
        };
        let [a, b] = c.side_walls(4.0, 0.4);
        assert_eq!(a.center, Vec3::new(0.0, 2.0, -10.5));
        assert_eq!(b.center, Vec3::new(0.0, 2.0, -7.5));
        assert_eq!(a.size, Vec3::new(8.0, 4.0, 0.4));

        let floor = c.floor().bounds();
        assert_eq!(floor.size().x, 8.0);
        assert_eq!(floor.size().z, 3.0);
    }

    #[test]
    fn vertical_corridor_walls() {
        let c = Corridor {
            center: Vec2::new(9.0, 0.0),
            axis: CorridorAxis::AlongZ,
            length: 8.0,
            width: 3.0,
        };
        let [a, b] = c.side_walls(4.0, 0.4);
        assert_eq!(a.center, Vec3::new(7.5, 2.0, 0.0));
        assert_eq!(b.center, Vec3::new(10.5, 2.0, 0.0));
        assert_eq!(b.size, Vec3::new(0.4, 4.0, 8.0));

        let floor = c.floor().bounds();
        assert_eq!(floor.size().x, 3.0);
        assert_eq!(floor.size().z, 8.0);
    }
}
