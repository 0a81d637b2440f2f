// Host camera record and the projection helpers the frame loop needs.
// Kept free of web APIs so it can be exercised on the host.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::follow::{CameraRig, ViewportSize};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width_px: u32, height_px: u32) {
        self.aspect = width_px.max(1) as f32 / height_px.max(1) as f32;
    }

    /// World-space extent of the view frustum at `distance` from the eye.
    pub fn viewport_at(&self, distance: f32) -> ViewportSize {
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance.abs();
        ViewportSize::new(height * self.aspect, height)
    }

    /// Viewport measured at the distance between eye and `focus`.
    pub fn viewport_toward(&self, focus: Vec3) -> ViewportSize {
        self.viewport_at(self.eye.distance(focus))
    }

    /// Pixel position of `world` on a `width_px` x `height_px` surface with
    /// the origin at the top-left. `None` when the point is behind the eye.
    pub fn project_to_screen(&self, world: Vec3, width_px: f32, height_px: f32) -> Option<Vec2> {
        let clip = self.view_proj() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width_px,
            (0.5 - ndc.y * 0.5) * height_px,
        ))
    }

    /// World-space ray through pixel (`sx`, `sy`).
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_ray(&self, sx: f32, sy: f32, width_px: f32, height_px: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width_px.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height_px.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}

impl CameraRig for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.eye
    }

    fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }
}
