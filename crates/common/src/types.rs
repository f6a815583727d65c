use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
///
/// Intervals are closed: two boxes that share a face intersect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build a box from its center and full size along each axis.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Closed-interval overlap on all three axes.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Compass side of a room. North faces -Z, East faces +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Unit outward normal in the XZ plane.
    pub fn normal(self) -> Vec3 {
        match self {
            Side::North => Vec3::NEG_Z,
            Side::South => Vec3::Z,
            Side::East => Vec3::X,
            Side::West => Vec3::NEG_X,
        }
    }

    /// Whether a wall on this side runs along the X axis.
    pub fn runs_along_x(self) -> bool {
        matches!(self, Side::North | Side::South)
    }

    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::East => 2,
            Side::West => 3,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_corners() {
        let b = Aabb::new(Vec3::new(1.0, 5.0, -1.0), Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(b.max, Vec3::new(1.0, 5.0, 2.0));
    }

    #[test]
    fn center_size_roundtrip() {
        let b = Aabb::from_center_size(Vec3::new(2.0, 1.0, 0.0), Vec3::new(4.0, 2.0, 0.4));
        assert_eq!(b.center(), Vec3::new(2.0, 1.0, 0.0));
        assert!((b.size() - Vec3::new(4.0, 2.0, 0.4)).length() < 1e-6);
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn shared_face_counts_as_intersection() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_on_one_axis_is_clear() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(0.0, 0.0, 1.01), Vec3::new(1.0, 1.0, 2.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn side_normals_point_outward() {
        assert_eq!(Side::North.normal(), Vec3::NEG_Z);
        assert_eq!(Side::East.normal(), Vec3::X);
        assert!(Side::South.runs_along_x());
        assert!(!Side::West.runs_along_x());
    }
}
