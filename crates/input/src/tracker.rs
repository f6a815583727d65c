use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;
use std::hash::Hash;

/// Pointer capture lifecycle.
///
/// Capture is asked for by a user gesture and granted (or later revoked) by
/// the platform, so a request does not imply engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Released,
    Requested,
    Engaged,
}

/// Raw input state: which keys are down and the accumulated look angles.
///
/// `K` is the platform key identifier (a winit `KeyCode` on desktop, a
/// string code in headless runs). Look angles only change while capture is
/// engaged; pitch stays within `[-pi/2, pi/2]`, yaw is unbounded.
#[derive(Debug, Clone)]
pub struct InputTracker<K> {
    keys: HashMap<K, bool>,
    capture: CaptureState,
    yaw: f32,
    pitch: f32,
    sensitivity: f32,
}

impl<K: Eq + Hash> InputTracker<K> {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            keys: HashMap::new(),
            capture: CaptureState::Released,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity,
        }
    }

    /// Start from a given look direction (e.g. a spawn facing).
    pub fn with_look(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        self
    }

    pub fn key_down(&mut self, key: K) {
        self.keys.insert(key, true);
    }

    pub fn key_up(&mut self, key: K) {
        self.keys.insert(key, false);
    }

    /// Route a key event by its pressed flag.
    pub fn key(&mut self, key: K, pressed: bool) {
        self.keys.insert(key, pressed);
    }

    pub fn is_pressed(&self, key: &K) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Forget every held key. Used when the window loses focus and key-up
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    pub fn pressed_count(&self) -> usize {
        self.keys.values().filter(|down| **down).count()
    }

    pub fn capture(&self) -> CaptureState {
        self.capture
    }

    pub fn is_captured(&self) -> bool {
        self.capture == CaptureState::Engaged
    }

    /// User gesture asking for capture. No effect when already engaged.
    pub fn request_capture(&mut self) {
        if self.capture == CaptureState::Released {
            tracing::debug!("pointer capture requested");
            self.capture = CaptureState::Requested;
        }
    }

    /// The platform granted capture.
    pub fn capture_engaged(&mut self) {
        if self.capture != CaptureState::Engaged {
            tracing::debug!("pointer capture engaged");
        }
        self.capture = CaptureState::Engaged;
    }

    /// The platform dropped capture (Escape, focus loss, denied request).
    /// Safe to call in any state.
    pub fn capture_lost(&mut self) {
        if self.capture != CaptureState::Released {
            tracing::debug!(previous = ?self.capture, "pointer capture lost");
        }
        self.capture = CaptureState::Released;
    }

    /// Apply a relative mouse delta in pixels. Returns false (and changes
    /// nothing) unless capture is engaged.
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) -> bool {
        if !self.is_captured() {
            return false;
        }
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
        true
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current (yaw, pitch) in radians.
    pub fn look(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> InputTracker<&'static str> {
        InputTracker::new(0.002)
    }

    #[test]
    fn key_down_then_up() {
        let mut t = tracker();
        assert!(!t.is_pressed(&"KeyW"));
        t.key_down("KeyW");
        assert!(t.is_pressed(&"KeyW"));
        assert_eq!(t.pressed_count(), 1);
        t.key_up("KeyW");
        assert!(!t.is_pressed(&"KeyW"));
        assert_eq!(t.pressed_count(), 0);
    }

    #[test]
    fn release_all_clears_keys() {
        let mut t = tracker();
        t.key("KeyW", true);
        t.key("KeyD", true);
        t.release_all();
        assert_eq!(t.pressed_count(), 0);
    }

    #[test]
    fn motion_ignored_without_capture() {
        let mut t = tracker();
        assert!(!t.mouse_motion(100.0, 50.0));
        assert_eq!(t.look(), (0.0, 0.0));

        t.request_capture();
        assert_eq!(t.capture(), CaptureState::Requested);
        assert!(!t.mouse_motion(100.0, 50.0));
        assert_eq!(t.look(), (0.0, 0.0));
    }

    #[test]
    fn motion_applies_while_engaged() {
        let mut t = tracker();
        t.request_capture();
        t.capture_engaged();
        assert!(t.mouse_motion(100.0, 50.0));
        assert!((t.yaw() + 0.2).abs() < 1e-6);
        assert!((t.pitch() + 0.1).abs() < 1e-6);
    }

    #[test]
    fn capture_loss_pauses_look() {
        let mut t = tracker();
        t.capture_engaged();
        t.mouse_motion(10.0, 0.0);
        let before = t.look();
        t.capture_lost();
        assert!(!t.mouse_motion(500.0, 500.0));
        assert_eq!(t.look(), before);
        // Losing capture twice is harmless.
        t.capture_lost();
        assert_eq!(t.capture(), CaptureState::Released);
    }

    #[test]
    fn pitch_clamps_instead_of_flipping() {
        let mut t = tracker();
        t.capture_engaged();
        t.mouse_motion(0.0, 10_000.0);
        assert_eq!(t.pitch(), -FRAC_PI_2);
        t.mouse_motion(0.0, -50_000.0);
        assert_eq!(t.pitch(), FRAC_PI_2);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut t = tracker();
        t.capture_engaged();
        t.mouse_motion(-10_000.0, 0.0);
        assert!(t.yaw() > std::f32::consts::TAU);
    }

    #[test]
    fn with_look_clamps_pitch() {
        let t = tracker().with_look(1.0, 3.0);
        assert_eq!(t.look(), (1.0, FRAC_PI_2));
    }
}
