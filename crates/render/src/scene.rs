use castlewalk_common::Aabb;
use castlewalk_mapgen::{Primitive, SceneSink, Shape};

/// Retained list of everything drawable, in insertion order.
///
/// Built once by the map builder and never edited during play.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    primitives: Vec<Primitive>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn box_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_box()).count()
    }

    pub fn plane_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p.shape, Shape::Plane { .. }))
            .count()
    }

    /// Bounds enclosing every primitive, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut iter = self.primitives.iter().map(Primitive::bounds);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, b| Aabb::new(acc.min.min(b.min), acc.max.max(b.max))))
    }
}

impl SceneSink for SceneGraph {
    fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}
