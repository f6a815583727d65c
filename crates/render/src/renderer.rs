use castlewalk_kernel::Player;
use castlewalk_mapgen::{Material, Shape};
use glam::Vec3;

use crate::scene::SceneGraph;

/// Default vertical field of view, in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 75.0;

/// Camera configuration for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Rotation about +Y in radians. Zero looks down -Z.
    pub yaw: f32,
    /// Rotation about the camera's X axis in radians, applied after yaw.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.7, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: DEFAULT_FOV_DEGREES,
        }
    }
}

impl RenderView {
    /// Look through the player's eyes.
    pub fn from_player(player: &Player) -> Self {
        Self {
            eye: player.position,
            yaw: player.yaw,
            pitch: player.pitch,
            ..Self::default()
        }
    }

    /// Unit look direction.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }
}

/// Renderer-agnostic interface.
///
/// A renderer reads the scene and a view and produces output. It never
/// touches play state.
pub trait Renderer {
    type Output;

    fn render(&mut self, scene: &SceneGraph, view: &RenderView) -> Self::Output;
}

/// Human-readable dump of the scene and camera, for the CLI and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// List every primitive, not just the totals.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &SceneGraph, view: &RenderView) -> String {
        tracing::trace!(primitives = scene.len(), verbose = self.verbose, "text render");
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene ({} primitives: {} boxes, {} planes) ===\n",
            scene.len(),
            scene.box_count(),
            scene.plane_count()
        ));
        let dir = view.forward();
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) dir=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, dir.x, dir.y, dir.z, view.fov_degrees
        ));
        if let Some(bounds) = scene.bounds() {
            out.push_str(&format!(
                "Bounds: ({:.1}, {:.1}, {:.1}) .. ({:.1}, {:.1}, {:.1})\n",
                bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
            ));
        }

        if self.verbose {
            for p in scene.primitives() {
                let kind = match p.shape {
                    Shape::Box { size } => {
                        format!("box   {:.2} x {:.2} x {:.2}", size.x, size.y, size.z)
                    }
                    Shape::Plane { width, depth } => format!("plane {width:.2} x {depth:.2}"),
                };
                let material = match p.material {
                    Material::Stone => "stone",
                    Material::Flagstone => "flagstone",
                };
                out.push_str(&format!(
                    "  {kind} at ({:.2}, {:.2}, {:.2}) [{material}]\n",
                    p.position.x, p.position.y, p.position.z
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlewalk_mapgen::{Primitive, SceneSink};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn empty_scene() {
        let output = DebugTextRenderer::new().render(&SceneGraph::new(), &RenderView::default());
        assert!(output.contains("0 primitives"));
        assert!(output.contains("fov=75"));
        assert!(!output.contains("Bounds"));
    }

    #[test]
    fn verbose_lists_primitives() {
        let mut scene = SceneGraph::new();
        scene.add(Primitive::floor(Vec3::ZERO, 10.0, 8.0));
        scene.add(Primitive::wall(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 4.0, 0.4)));

        let output = DebugTextRenderer::verbose().render(&scene, &RenderView::default());
        assert!(output.contains("1 boxes, 1 planes"));
        assert!(output.contains("plane 10.00 x 8.00"));
        assert!(output.contains("[stone]"));
    }

    #[test]
    fn one_line_per_primitive() {
        let mut scene = SceneGraph::new();
        scene.add(Primitive::floor(Vec3::ZERO, 10.0, 8.0));
        scene.add(Primitive::wall(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 4.0, 0.4)));

        let brief = DebugTextRenderer::new().render(&scene, &RenderView::default());
        assert_eq!(brief.lines().count(), 3);
        let full = DebugTextRenderer::verbose().render(&scene, &RenderView::default());
        assert_eq!(full.lines().count(), 5);
        assert!(full.ends_with("[stone]\n"));
    }

    #[test]
    fn view_follows_player() {
        let mut player = Player::new(Vec3::new(-9.0, 1.7, -9.0));
        player.yaw = -FRAC_PI_2;
        let view = RenderView::from_player(&player);
        assert_eq!(view.eye, player.position);
        let f = view.forward();
        assert!((f.x - 1.0).abs() < 1e-6);
        assert!(f.z.abs() < 1e-6);
        assert_eq!(view.fov_degrees, DEFAULT_FOV_DEGREES);
    }

    #[test]
    fn pitch_tilts_view_only() {
        let view = RenderView {
            pitch: FRAC_PI_2,
            ..RenderView::default()
        };
        assert!((view.forward().y - 1.0).abs() < 1e-6);
    }
}
