//! Rendering boundary: the retained scene graph, the per-frame view, and a
//! renderer-agnostic trait with a text backend.
//!
//! # Invariants
//! - Renderers read the scene and view; they never mutate play state.
//! - The scene is filled once at map build time and is static during play.
//!
//! The GPU backend lives in `castlewalk-render-wgpu` and implements the
//! same [`Renderer`] trait.

mod renderer;
mod scene;

pub use renderer::{DEFAULT_FOV_DEGREES, DebugTextRenderer, RenderView, Renderer};
pub use scene::SceneGraph;

pub fn crate_info() -> &'static str {
    "castlewalk-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
