use warboard_engine::coords::{Vec2, Vec3, Viewport};

use crate::pick::Ray;

/// Orthographic camera looking straight down (-Z) on the table, +Y up.
///
/// The vertical extent is fixed at `frustum_size` world units; the horizontal
/// extent follows the aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoCamera {
    pub position: Vec3,
    pub frustum_size: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl OrthoCamera {
    pub fn new(frustum_size: f32, position: Vec3, near: f32, far: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            frustum_size,
            near,
            far,
            aspect: 1.0,
        };
        camera.set_aspect(aspect);
        camera
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Non-finite or non-positive ratios (minimized window) are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if let Some(aspect) = viewport.aspect() {
            self.set_aspect(aspect);
        }
    }

    /// Half extents of the view volume in world units.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.frustum_size * self.aspect * 0.5, self.frustum_size * 0.5)
    }

    /// World point on the mid-depth plane under the normalized position `ndc`.
    pub fn unproject(&self, ndc: Vec2) -> Vec3 {
        let half = self.half_extents();
        Vec3::new(
            self.position.x + ndc.x * half.x,
            self.position.y + ndc.y * half.y,
            self.position.z - (self.near + self.far) * 0.5,
        )
    }

    /// Normalized device position of `world`. Depth is dropped.
    pub fn project(&self, world: Vec3) -> Vec2 {
        let half = self.half_extents();
        Vec2::new(
            (world.x - self.position.x) / half.x,
            (world.y - self.position.y) / half.y,
        )
    }

    /// Ray from the near plane through `ndc`, pointing into the table.
    pub fn ray(&self, ndc: Vec2) -> Ray {
        let on_plane = self.unproject(ndc);
        Ray {
            origin: Vec3::new(on_plane.x, on_plane.y, self.position.z - self.near),
            direction: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    /// Logical pixels per world unit.
    #[inline]
    pub fn pixels_per_unit(&self, viewport: Viewport) -> f32 {
        viewport.height / self.frustum_size
    }

    pub fn world_to_screen(&self, world: Vec3, viewport: Viewport) -> Vec2 {
        ndc_to_screen(self.project(world), viewport)
    }

    pub fn screen_to_world(&self, px: Vec2, viewport: Viewport) -> Vec3 {
        self.unproject(screen_to_ndc(px, viewport))
    }
}

/// Logical pixels (top-left origin, +Y down) to normalized device coordinates.
pub fn screen_to_ndc(px: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (px.x / viewport.width) * 2.0 - 1.0,
        -(px.y / viewport.height) * 2.0 + 1.0,
    )
}

pub fn ndc_to_screen(ndc: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: Viewport = Viewport::new(1280.0, 720.0);

    fn camera() -> OrthoCamera {
        OrthoCamera::new(60.0, Vec3::new(0.0, 0.0, 50.0), 0.1, 100.0, 1280.0 / 720.0)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── screen mapping ────────────────────────────────────────────────────

    #[test]
    fn screen_corners_map_to_ndc_corners() {
        assert_eq!(screen_to_ndc(Vec2::new(0.0, 0.0), HD), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(Vec2::new(1280.0, 720.0), HD), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(Vec2::new(640.0, 360.0), HD), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn ndc_to_screen_inverts_screen_to_ndc() {
        let px = Vec2::new(320.0, 180.0);
        let back = ndc_to_screen(screen_to_ndc(px, HD), HD);
        assert!(close(back.x, px.x) && close(back.y, px.y));
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn vertical_extent_is_the_frustum() {
        let c = camera();
        assert_eq!(c.unproject(Vec2::new(0.0, 1.0)).y, 30.0);
        assert_eq!(c.unproject(Vec2::new(0.0, -1.0)).y, -30.0);
        assert!(close(c.unproject(Vec2::new(1.0, 0.0)).x, 60.0 * 1280.0 / 720.0 / 2.0));
    }

    #[test]
    fn unproject_lands_on_mid_depth() {
        assert!(close(camera().unproject(Vec2::zero()).z, 50.0 - 50.05));
    }

    #[test]
    fn project_inverts_unproject() {
        let c = camera();
        let ndc = Vec2::new(0.25, -0.5);
        let back = c.project(c.unproject(ndc));
        assert!(close(back.x, ndc.x) && close(back.y, ndc.y));
    }

    #[test]
    fn button_projects_to_right_side_of_screen() {
        let c = camera();
        let px = c.world_to_screen(Vec3::new(36.0, 25.0, 1.0), HD);
        assert!(px.x > 640.0 && px.y < 360.0);
        let world = c.screen_to_world(px, HD);
        assert!(close(world.x, 36.0) && close(world.y, 25.0));
    }

    #[test]
    fn pixels_per_unit_follows_height() {
        assert_eq!(camera().pixels_per_unit(HD), 12.0);
    }

    // ── aspect ────────────────────────────────────────────────────────────

    #[test]
    fn resize_keeps_vertical_extent() {
        let mut c = camera();
        c.set_viewport(Viewport::new(720.0, 720.0));
        assert_eq!(c.aspect(), 1.0);
        assert_eq!(c.half_extents(), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn degenerate_aspect_is_ignored() {
        let mut c = camera();
        c.set_viewport(Viewport::new(0.0, 0.0));
        c.set_aspect(f32::NAN);
        assert!(close(c.aspect(), 1280.0 / 720.0));
    }

    // ── rays ──────────────────────────────────────────────────────────────

    #[test]
    fn ray_starts_on_near_plane_and_points_down() {
        let r = camera().ray(Vec2::new(0.0, 0.5));
        assert!(close(r.origin.z, 49.9));
        assert_eq!(r.origin.y, 15.0);
        assert_eq!(r.direction, Vec3::new(0.0, 0.0, -1.0));
    }
}
