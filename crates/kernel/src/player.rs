use castlewalk_common::{Aabb, PlayerConfig};
use glam::Vec3;

/// First-person player: camera position plus look angles.
///
/// Yaw 0 faces -Z. `position.y` is the eye height and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Stand on the floor at `(x, z)` with eyes at the configured height.
    pub fn standing_at(x: f32, z: f32, body: &PlayerConfig) -> Self {
        Self::new(Vec3::new(x, body.eye_height, z))
    }

    /// Horizontal walking direction. Pitch does not tilt it.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal strafe direction, forward x up.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Collision volume if the player stood at `position`: a square column
    /// of half-width `radius` from the floor up to `body_height`.
    pub fn body_at(position: Vec3, body: &PlayerConfig) -> Aabb {
        Aabb::new(
            Vec3::new(position.x - body.radius, 0.0, position.z - body.radius),
            Vec3::new(position.x + body.radius, body.body_height, position.z + body.radius),
        )
    }

    pub fn body(&self, body: &PlayerConfig) -> Aabb {
        Self::body_at(self.position, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn yaw_zero_faces_negative_z() {
        let p = Player::new(Vec3::ZERO);
        assert!(close(p.forward(), Vec3::NEG_Z));
        assert!(close(p.right(), Vec3::X));
    }

    #[test]
    fn quarter_turn_right_faces_positive_x() {
        let mut p = Player::new(Vec3::ZERO);
        p.yaw = -FRAC_PI_2;
        assert!(close(p.forward(), Vec3::X));
        assert!(close(p.right(), Vec3::Z));
    }

    #[test]
    fn pitch_does_not_tilt_walk_direction() {
        let mut p = Player::new(Vec3::ZERO);
        p.pitch = 1.2;
        assert_eq!(p.forward().y, 0.0);
        assert!((p.forward().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let mut p = Player::new(Vec3::ZERO);
        p.yaw = 0.7;
        assert!(p.forward().dot(p.right()).abs() < 1e-6);
    }

    #[test]
    fn body_spans_floor_to_head() {
        let cfg = PlayerConfig::default();
        let p = Player::standing_at(2.0, -3.0, &cfg);
        let b = p.body(&cfg);
        assert_eq!(b.min.y, 0.0);
        assert_eq!(b.max.y, cfg.body_height);
        assert!((b.min.x - (2.0 - cfg.radius)).abs() < 1e-6);
        assert!((b.max.z - (-3.0 + cfg.radius)).abs() < 1e-6);
        assert_eq!(p.position.y, cfg.eye_height);
    }
}
