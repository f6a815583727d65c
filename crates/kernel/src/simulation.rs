use std::hash::Hash;

use castlewalk_common::GameConfig;
use castlewalk_input::{InputTracker, KeyBindings, MoveIntent};
use glam::Vec3;

use crate::colliders::ColliderRegistry;
use crate::movement::{self, MoveOutcome};
use crate::player::Player;

/// The single owner of all mutable play state.
///
/// Input events write to the tracker, `step` writes to the player, and the
/// collider registry is read-only once handed over. Nothing here is shared
/// or global.
#[derive(Debug)]
pub struct Simulation<K> {
    config: GameConfig,
    colliders: ColliderRegistry,
    player: Player,
    input: InputTracker<K>,
    bindings: KeyBindings<K>,
    tick: u64,
    last_outcome: MoveOutcome,
}

impl<K: Eq + Hash + Clone> Simulation<K> {
    /// Take ownership of a finished collider registry and place the player.
    ///
    /// `spawn` is a floor position; the eye height comes from the config.
    pub fn new(
        config: GameConfig,
        colliders: ColliderRegistry,
        bindings: KeyBindings<K>,
        spawn: Vec3,
    ) -> Self {
        let player = Player::standing_at(spawn.x, spawn.z, &config.player);
        let input = InputTracker::new(config.player.mouse_sensitivity);
        tracing::info!(
            colliders = colliders.len(),
            x = spawn.x,
            z = spawn.z,
            "simulation ready"
        );
        Self {
            config,
            colliders,
            player,
            input,
            bindings,
            tick: 0,
            last_outcome: MoveOutcome::default(),
        }
    }

    /// Start looking in a given direction.
    pub fn with_look(mut self, yaw: f32, pitch: f32) -> Self {
        self.input = self.input.with_look(yaw, pitch);
        self.player.yaw = self.input.yaw();
        self.player.pitch = self.input.pitch();
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn colliders(&self) -> &ColliderRegistry {
        &self.colliders
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn input(&self) -> &InputTracker<K> {
        &self.input
    }

    /// Raw input events go here.
    pub fn input_mut(&mut self) -> &mut InputTracker<K> {
        &mut self.input
    }

    pub fn bindings(&self) -> &KeyBindings<K> {
        &self.bindings
    }

    /// Frames stepped so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn last_outcome(&self) -> MoveOutcome {
        self.last_outcome
    }

    /// The intent the held keys currently express.
    pub fn intent(&self) -> MoveIntent {
        self.bindings.intent(&self.input)
    }

    /// Advance one frame. `dt` is clamped to `[0, frame.max_dt]` so a stall
    /// cannot teleport the player through a wall.
    pub fn step(&mut self, dt: f32) -> MoveOutcome {
        let dt = dt.clamp(0.0, self.config.frame.max_dt);
        let (yaw, pitch) = self.input.look();
        self.player.yaw = yaw;
        self.player.pitch = pitch;

        let intent = self.intent();
        let outcome = movement::resolve(
            &mut self.player,
            intent,
            dt,
            &self.colliders,
            &self.config.player,
        );
        if outcome.blocked() {
            tracing::trace!(tick = self.tick, ?outcome, "movement blocked");
        }
        self.tick += 1;
        self.last_outcome = outcome;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlewalk_common::Aabb;
    use crate::movement::AxisResult;

    fn sim(colliders: ColliderRegistry) -> Simulation<&'static str> {
        Simulation::new(
            GameConfig::default(),
            colliders,
            KeyBindings::wasd_codes(),
            Vec3::ZERO,
        )
    }

    #[test]
    fn spawns_at_eye_height() {
        let s = sim(ColliderRegistry::new());
        assert_eq!(s.player().position, Vec3::new(0.0, 1.7, 0.0));
        assert_eq!(s.tick(), 0);
    }

    #[test]
    fn step_without_keys_only_updates_look() {
        let mut s = sim(ColliderRegistry::new());
        s.input_mut().capture_engaged();
        s.input_mut().mouse_motion(-100.0, 0.0);
        let out = s.step(0.016);
        assert_eq!(out, MoveOutcome::default());
        assert!((s.player().yaw - 0.2).abs() < 1e-6);
        assert_eq!(s.player().position, Vec3::new(0.0, 1.7, 0.0));
        assert_eq!(s.tick(), 1);
    }

    #[test]
    fn large_dt_is_clamped() {
        let mut s = sim(ColliderRegistry::new());
        s.input_mut().key_down("KeyW");
        s.step(5.0);
        let max_step = s.config().player.speed * s.config().frame.max_dt;
        assert!((s.player().position.z + max_step).abs() < 1e-5);
    }

    #[test]
    fn negative_dt_does_not_move() {
        let mut s = sim(ColliderRegistry::new());
        s.input_mut().key_down("KeyW");
        s.step(-1.0);
        assert_eq!(s.player().position, Vec3::new(0.0, 1.7, 0.0));
    }

    #[test]
    fn look_applies_before_movement() {
        let mut s = sim(ColliderRegistry::new()).with_look(-std::f32::consts::FRAC_PI_2, 0.0);
        s.input_mut().key_down("KeyW");
        s.step(0.02);
        assert!(s.player().position.x > 0.09);
        assert!(s.player().position.z.abs() < 1e-5);
    }

    #[test]
    fn wall_blocks_through_simulation() {
        let colliders: ColliderRegistry =
            [Aabb::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::new(5.0, 4.0, -0.5))]
                .into_iter()
                .collect();
        let mut s = sim(colliders);
        s.input_mut().key_down("KeyW");
        for _ in 0..30 {
            s.step(1.0 / 60.0);
        }
        assert_eq!(s.last_outcome().z, AxisResult::Blocked);
        assert!(s.player().position.z - 0.4 > -0.5);
    }

    #[test]
    fn released_key_stops_walking() {
        let mut s = sim(ColliderRegistry::new());
        s.input_mut().key_down("KeyD");
        s.step(0.02);
        let after_walk = s.player().position;
        s.input_mut().key_up("KeyD");
        s.step(0.02);
        assert_eq!(s.player().position, after_walk);
        assert!(after_walk.x > 0.0);
    }
}
