use castlewalk_common::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Surface look of a primitive. Renderers map these to colours or textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Castle walls.
    Stone,
    /// Room and corridor floors.
    Flagstone,
}

/// Geometry of a drawable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box with full size along each axis.
    Box { size: Vec3 },
    /// Horizontal plane facing +Y, `width` along X and `depth` along Z.
    Plane { width: f32, depth: f32 },
}

/// A drawable placed in the world. `position` is the shape's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub shape: Shape,
    pub position: Vec3,
    pub material: Material,
}

impl Primitive {
    pub fn wall(center: Vec3, size: Vec3) -> Self {
        Self {
            shape: Shape::Box { size },
            position: center,
            material: Material::Stone,
        }
    }

    pub fn floor(center: Vec3, width: f32, depth: f32) -> Self {
        Self {
            shape: Shape::Plane { width, depth },
            position: center,
            material: Material::Flagstone,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self.shape, Shape::Box { .. })
    }

    /// World-space bounds. Planes are flat on Y.
    pub fn bounds(&self) -> Aabb {
        match self.shape {
            Shape::Box { size } => Aabb::from_center_size(self.position, size),
            Shape::Plane { width, depth } => {
                Aabb::from_center_size(self.position, Vec3::new(width, 0.0, depth))
            }
        }
    }
}

/// Anything that accepts drawables: a scene graph, a GPU upload list, or a
/// plain vector in tests.
pub trait SceneSink {
    fn add(&mut self, primitive: Primitive);
}

impl SceneSink for Vec<Primitive> {
    fn add(&mut self, primitive: Primitive) {
        self.push(primitive);
    }
}
