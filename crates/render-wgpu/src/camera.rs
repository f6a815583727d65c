use castlewalk_render::{DEFAULT_FOV_DEGREES, RenderView};
use glam::{EulerRot, Mat4, Quat};

/// Perspective projection for the first-person camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl Projection {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let mut projection = Self::default();
        projection.resize(width, height);
        projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Projection matrix for a vertical field of view in degrees.
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        let fov = if fov_degrees > 0.0 {
            fov_degrees
        } else {
            DEFAULT_FOV_DEGREES
        };
        Mat4::perspective_rh(fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, view: &RenderView) -> Mat4 {
        self.matrix(view.fov_degrees) * view_matrix(view)
    }
}

/// World-to-camera transform. Yaw turns about +Y first, then pitch about
/// the turned X axis, with no roll.
pub fn view_matrix(view: &RenderView) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::YXZ, view.yaw, view.pitch, 0.0);
    Mat4::from_rotation_translation(rotation, view.eye).inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn point_ahead_lands_on_negative_z() {
        let view = RenderView {
            eye: Vec3::new(-9.0, 1.7, -9.0),
            yaw: -FRAC_PI_2,
            pitch: 0.3,
            ..RenderView::default()
        };
        let ahead = view.eye + view.forward() * 5.0;
        let in_camera = view_matrix(&view).transform_point3(ahead);
        assert!(close(in_camera, Vec3::new(0.0, 0.0, -5.0)), "{in_camera}");
    }

    #[test]
    fn aspect_follows_viewport() {
        let mut projection = Projection::for_viewport(1280, 720);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
        projection.resize(800, 0);
        assert_eq!(projection.aspect, 800.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let vp = Projection::default().view_projection(&RenderView::default());
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
