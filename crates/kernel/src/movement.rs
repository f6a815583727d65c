//! Axis-separated movement against the collider registry.
//!
//! A displacement is split into its X and Z parts. Each part is tested on
//! its own and committed only if the player's body would be clear there, so
//! walking diagonally into a wall keeps the motion along it (wall sliding).

use castlewalk_common::PlayerConfig;
use castlewalk_input::MoveIntent;
use glam::Vec3;

use crate::colliders::ColliderRegistry;
use crate::player::Player;

/// What happened on one horizontal axis this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisResult {
    /// No displacement was requested on this axis.
    #[default]
    Idle,
    Moved,
    /// The candidate position overlapped a collider; the axis was discarded.
    Blocked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub x: AxisResult,
    pub z: AxisResult,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        self.x == AxisResult::Moved || self.z == AxisResult::Moved
    }

    pub fn blocked(&self) -> bool {
        self.x == AxisResult::Blocked || self.z == AxisResult::Blocked
    }
}

/// Horizontal displacement requested by `intent` for one frame, or `None`
/// when the held keys cancel out.
pub fn desired_displacement(player: &Player, intent: MoveIntent, speed: f32, dt: f32) -> Option<Vec3> {
    let (forward, right) = intent.axes();
    let wish = player.forward() * forward + player.right() * right;
    if wish.length_squared() == 0.0 {
        return None;
    }
    Some(wish.normalize() * speed * dt)
}

/// Try `delta` on X, then on Z from wherever X left the player.
pub fn apply_displacement(
    player: &mut Player,
    delta: Vec3,
    colliders: &ColliderRegistry,
    body: &PlayerConfig,
) -> MoveOutcome {
    let x = try_axis(player, Vec3::new(delta.x, 0.0, 0.0), colliders, body);
    let z = try_axis(player, Vec3::new(0.0, 0.0, delta.z), colliders, body);
    MoveOutcome { x, z }
}

fn try_axis(
    player: &mut Player,
    step: Vec3,
    colliders: &ColliderRegistry,
    body: &PlayerConfig,
) -> AxisResult {
    if step == Vec3::ZERO {
        return AxisResult::Idle;
    }
    let candidate = player.position + step;
    if let Some(hit) = colliders.first_hit(&Player::body_at(candidate, body)) {
        tracing::trace!(?step, wall_min = ?hit.min, wall_max = ?hit.max, "axis blocked");
        return AxisResult::Blocked;
    }
    player.position = candidate;
    AxisResult::Moved
}

/// One frame of walking. Idle intent returns early without touching the
/// player.
pub fn resolve(
    player: &mut Player,
    intent: MoveIntent,
    dt: f32,
    colliders: &ColliderRegistry,
    body: &PlayerConfig,
) -> MoveOutcome {
    match desired_displacement(player, intent, body.speed, dt) {
        Some(delta) => apply_displacement(player, delta, colliders, body),
        None => MoveOutcome::default(),
    }
}
