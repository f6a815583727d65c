use std::hash::Hash;

use crate::action::{Direction, MoveIntent};
use crate::tracker::InputTracker;

/// Maps platform keys to walking directions. Several keys may drive the
/// same direction (WASD plus arrows, say).
#[derive(Debug, Clone)]
pub struct KeyBindings<K> {
    bindings: Vec<(K, Direction)>,
}

impl<K: Eq + Hash + Clone> KeyBindings<K> {
    pub fn new(forward: K, back: K, left: K, right: K) -> Self {
        Self {
            bindings: vec![
                (forward, Direction::Forward),
                (back, Direction::Back),
                (left, Direction::Left),
                (right, Direction::Right),
            ],
        }
    }

    /// Add another key for `direction`.
    pub fn bind(mut self, key: K, direction: Direction) -> Self {
        self.bindings.push((key, direction));
        self
    }

    pub fn direction_of(&self, key: &K) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| *d)
    }

    /// Read the tracker's held keys into an intent.
    pub fn intent(&self, tracker: &InputTracker<K>) -> MoveIntent {
        let mut intent = MoveIntent::default();
        for (key, direction) in &self.bindings {
            if tracker.is_pressed(key) {
                intent.set(*direction, true);
            }
        }
        intent
    }
}

impl KeyBindings<&'static str> {
    /// WASD using DOM-style key codes.
    pub fn wasd_codes() -> Self {
        Self::new("KeyW", "KeyS", "KeyA", "KeyD")
    }
}
