/// One of the four walking directions, relative to where the player faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

/// Which walking directions are requested this frame.
///
/// The movement resolver consumes intents, never raw key events, so the
/// same resolver serves every input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Intent with exactly one direction held.
    pub fn only(direction: Direction) -> Self {
        let mut intent = Self::default();
        intent.set(direction, true);
        intent
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Forward => self.forward = held,
            Direction::Back => self.back = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }

    /// True when nothing is held.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.back || self.left || self.right)
    }

    /// Signed (forward, right) axes in {-1, 0, 1}. Opposing keys cancel.
    pub fn axes(&self) -> (f32, f32) {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        (axis(self.forward, self.back), axis(self.right, self.left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intent_is_idle() {
        assert!(MoveIntent::default().is_idle());
        assert_eq!(MoveIntent::default().axes(), (0.0, 0.0));
    }

    #[test]
    fn only_sets_one_direction() {
        let intent = MoveIntent::only(Direction::Left);
        assert!(intent.left);
        assert!(!intent.forward && !intent.back && !intent.right);
        assert_eq!(intent.axes(), (0.0, -1.0));
    }

    #[test]
    fn opposing_keys_cancel() {
        let intent = MoveIntent::only(Direction::Forward).with(Direction::Back);
        assert!(!intent.is_idle());
        assert_eq!(intent.axes(), (0.0, 0.0));
    }

    #[test]
    fn diagonal_axes() {
        let intent = MoveIntent::only(Direction::Forward).with(Direction::Right);
        assert_eq!(intent.axes(), (1.0, 1.0));
    }
}
