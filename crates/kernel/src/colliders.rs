use castlewalk_common::Aabb;

/// Every static collision volume in the loaded map.
///
/// Filled once while the map is built, then only queried. There is no
/// removal: colliders live as long as the map.
///
/// Queries are a linear scan. That is fine for the few dozen walls of a
/// castle but does not scale; there is no broad phase.
#[derive(Debug, Clone, Default)]
pub struct ColliderRegistry {
    boxes: Vec<Aabb>,
}

impl ColliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    /// True if `candidate` overlaps any registered box. Touching counts.
    pub fn intersects(&self, candidate: &Aabb) -> bool {
        self.boxes.iter().any(|b| b.intersects(candidate))
    }

    /// First registered box overlapping `candidate`, if any.
    pub fn first_hit(&self, candidate: &Aabb) -> Option<&Aabb> {
        self.boxes.iter().find(|b| b.intersects(candidate))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aabb> {
        self.boxes.iter()
    }

    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes
    }
}

impl FromIterator<Aabb> for ColliderRegistry {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}
