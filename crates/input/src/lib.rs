//! Input tracking: held keys, pointer capture, mouse-look angles.
//!
//! # Invariants
//! - Look angles change only while pointer capture is engaged.
//! - Pitch never leaves `[-pi/2, pi/2]`.
//! - Capture loss is never an error; look updates simply pause.

pub mod action;
pub mod bindings;
pub mod tracker;

pub use action::{Direction, MoveIntent};
pub use bindings::KeyBindings;
pub use tracker::{CaptureState, InputTracker};

pub fn crate_info() -> &'static str {
    "castlewalk-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
