use campus_engine::coords::{Vec2, Viewport};
use glam::{Mat4, Vec3, Vec4Swizzles};

use crate::picking::Ray;

pub const MIN_ELEVATION_DEG: f32 = 1.0;
pub const MAX_ELEVATION_DEG: f32 = 89.0;
pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 600.0;

pub const FOV_Y_DEG: f32 = 50.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 1000.0;

/// Degrees of orbit per logical pixel of drag.
const ORBIT_DEG_PER_PX: f32 = 0.2;
/// Distance change per wheel notch.
const ZOOM_STEP: f32 = 4.0;
/// World units per arrow key press.
const KEY_PAN_STEP: f32 = 2.5;
/// Drag pan speed at the reference distance; scales linearly with distance.
const DRAG_PAN_SCALE: f32 = 0.05;
const DRAG_PAN_REFERENCE_DISTANCE: f32 = 150.0;

/// Direction for keyboard panning, relative to the current view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PanDirection {
    /// Away from the viewer (arrow up).
    Forward,
    /// Toward the viewer (arrow down).
    Backward,
    Left,
    Right,
}

/// Camera orbiting a look-at point on a sphere.
///
/// Angles are stored in degrees. Elevation is always within
/// [`MIN_ELEVATION_DEG`, `MAX_ELEVATION_DEG`] and distance within
/// [`MIN_DISTANCE`, `MAX_DISTANCE`]; azimuth is kept in `[0, 360)` once it has
/// been orbited.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub distance: f32,
    pub look_at: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            elevation_deg: 20.0,
            azimuth_deg: -45.0,
            distance: 150.0,
            look_at: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

impl OrbitCamera {
    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        let e = self.elevation_deg.to_radians();
        let a = self.azimuth_deg.to_radians();
        self.look_at + self.distance * Vec3::new(e.cos() * a.sin(), e.sin(), e.cos() * a.cos())
    }

    /// Orbits by a pointer drag of `(dx, dy)` logical pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth_deg = (self.azimuth_deg + dx * ORBIT_DEG_PER_PX).rem_euclid(360.0);
        self.elevation_deg = (self.elevation_deg + dy * ORBIT_DEG_PER_PX)
            .clamp(MIN_ELEVATION_DEG, MAX_ELEVATION_DEG);
    }

    /// Pans the look-at point by a pointer drag of `(dx, dy)` logical pixels.
    ///
    /// Horizontal drag moves along the camera's right vector on the ground
    /// plane, vertical drag moves the look-at point up or down. Speed grows
    /// with distance so the scene tracks the pointer at any zoom level.
    pub fn pan_drag(&mut self, dx: f32, dy: f32) {
        let factor = DRAG_PAN_SCALE * (self.distance / DRAG_PAN_REFERENCE_DISTANCE);
        self.look_at -= self.right() * dx * factor;
        self.look_at.y += dy * factor;
    }

    /// Pans the look-at point one keyboard step on the ground plane.
    pub fn pan_key(&mut self, dir: PanDirection) {
        let step = match dir {
            PanDirection::Forward => -self.forward(),
            PanDirection::Backward => self.forward(),
            PanDirection::Left => -self.right(),
            PanDirection::Right => self.right(),
        };
        self.look_at += step * KEY_PAN_STEP;
    }

    /// Zooms by `notches` wheel notches; positive zooms in.
    pub fn zoom(&mut self, notches: f32) {
        self.distance = (self.distance - ZOOM_STEP * notches).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Ground-plane vector pointing from the look-at point toward the eye.
    fn forward(&self) -> Vec3 {
        let a = self.azimuth_deg.to_radians();
        Vec3::new(a.sin(), 0.0, a.cos())
    }

    /// Ground-plane vector pointing to the right of the view.
    fn right(&self) -> Vec3 {
        let a = self.azimuth_deg.to_radians();
        Vec3::new(a.cos(), 0.0, -a.sin())
    }

    // ── matrices ──────────────────────────────────────────────────────────

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.look_at, Vec3::Y)
    }

    /// Perspective projection with a `[0, 1]` depth range.
    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEG.to_radians(), viewport.aspect(), Z_NEAR, Z_FAR)
    }

    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.projection_matrix(viewport) * self.view_matrix()
    }

    // ── screen <-> world ──────────────────────────────────────────────────

    /// World-space ray under a cursor position in logical pixels.
    ///
    /// The origin lies on the near plane. The direction is normalized unless
    /// the unprojected segment is degenerate.
    pub fn ray_through(&self, cursor: Vec2, viewport: Viewport) -> Ray {
        let (w, h) = extent(viewport);
        let inv = self.view_projection(viewport).inverse();

        let ndc_x = 2.0 * cursor.x / w - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / h;

        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        let mut dir = far - near;
        let len = dir.length();
        if len > 1e-6 {
            dir /= len;
        }
        Ray::new(near, dir)
    }

    /// Projects a world point to logical pixels.
    ///
    /// Returns `None` for points behind the eye or outside the depth range.
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Vec2> {
        let (w, h) = extent(viewport);
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Vec2::new((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h))
    }
}

fn extent(viewport: Viewport) -> (f32, f32) {
    if viewport.is_valid() {
        (viewport.width, viewport.height)
    } else {
        (1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1280.0, 720.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn approx_v(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    // ── orbit state ───────────────────────────────────────────────────────

    #[test]
    fn default_position_is_on_sphere_around_look_at() {
        let cam = OrbitCamera::default();
        let d = (cam.position() - cam.look_at).length();
        assert!(approx(d, 150.0));
        // 20 degrees above the horizon.
        assert!(approx(cam.position().y, 10.0 + 150.0 * 20f32.to_radians().sin()));
    }

    #[test]
    fn elevation_is_clamped_both_ways() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 10_000.0);
        assert_eq!(cam.elevation_deg, MAX_ELEVATION_DEG);
        cam.orbit(0.0, -10_000.0);
        assert_eq!(cam.elevation_deg, MIN_ELEVATION_DEG);
    }

    #[test]
    fn orbit_scales_pixels_to_degrees() {
        let mut cam = OrbitCamera { azimuth_deg: 10.0, ..OrbitCamera::default() };
        cam.orbit(50.0, 5.0);
        assert!(approx(cam.azimuth_deg, 20.0));
        assert!(approx(cam.elevation_deg, 21.0));
    }

    #[test]
    fn azimuth_wraps_into_full_turn() {
        let mut cam = OrbitCamera { azimuth_deg: 350.0, ..OrbitCamera::default() };
        cam.orbit(100.0, 0.0);
        assert!(approx(cam.azimuth_deg, 10.0));
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1.0);
        assert!(approx(cam.distance, 146.0));
        cam.zoom(1_000.0);
        assert_eq!(cam.distance, MIN_DISTANCE);
        cam.zoom(-1_000.0);
        assert_eq!(cam.distance, MAX_DISTANCE);
    }

    // ── panning ───────────────────────────────────────────────────────────

    #[test]
    fn key_pan_moves_on_ground_plane() {
        let mut cam = OrbitCamera { azimuth_deg: 0.0, ..OrbitCamera::default() };
        cam.pan_key(PanDirection::Forward);
        assert!(approx_v(cam.look_at, Vec3::new(0.0, 10.0, -2.5)));
        cam.pan_key(PanDirection::Backward);
        cam.pan_key(PanDirection::Right);
        assert!(approx_v(cam.look_at, Vec3::new(2.5, 10.0, 0.0)));
        cam.pan_key(PanDirection::Left);
        cam.pan_key(PanDirection::Left);
        assert!(approx_v(cam.look_at, Vec3::new(-2.5, 10.0, 0.0)));
    }

    #[test]
    fn forward_pan_moves_away_from_eye() {
        let mut cam = OrbitCamera::default();
        let before = (cam.position() - cam.look_at).with_y(0.0);
        let start = cam.look_at;
        cam.pan_key(PanDirection::Forward);
        let moved = cam.look_at - start;
        assert!(moved.dot(before) < 0.0);
    }

    #[test]
    fn drag_pan_scales_with_distance() {
        let mut near = OrbitCamera { azimuth_deg: 0.0, distance: 150.0, ..OrbitCamera::default() };
        let mut far = OrbitCamera { azimuth_deg: 0.0, distance: 300.0, ..OrbitCamera::default() };
        near.pan_drag(10.0, 0.0);
        far.pan_drag(10.0, 0.0);
        assert!(approx(near.look_at.x, -0.5));
        assert!(approx(far.look_at.x, -1.0));
    }

    #[test]
    fn vertical_drag_pan_moves_look_at_up() {
        let mut cam = OrbitCamera::default();
        cam.pan_drag(0.0, 20.0);
        assert!(approx(cam.look_at.y, 11.0));
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn center_ray_points_at_look_at() {
        let cam = OrbitCamera::default();
        let ray = cam.ray_through(Vec2::new(640.0, 360.0), VP);
        let expected = (cam.look_at - cam.position()).normalize();
        assert!(approx_v(ray.dir, expected));
        assert!(approx(ray.dir.length(), 1.0));
    }

    #[test]
    fn look_at_projects_to_viewport_center() {
        let cam = OrbitCamera::default();
        let p = cam.project(cam.look_at, VP).unwrap();
        assert!(approx(p.x, 640.0));
        assert!(approx(p.y, 360.0));
    }

    #[test]
    fn point_behind_eye_does_not_project() {
        let cam = OrbitCamera::default();
        let behind = cam.position() + (cam.position() - cam.look_at);
        assert!(cam.project(behind, VP).is_none());
    }

    #[test]
    fn projected_point_lies_on_its_ray() {
        let cam = OrbitCamera::default();
        let world = Vec3::new(20.0, 5.0, -30.0);
        let screen = cam.project(world, VP).unwrap();
        let ray = cam.ray_through(screen, VP);
        let to_point = (world - ray.origin).normalize();
        assert!(to_point.dot(ray.dir) > 0.9999);
    }

    #[test]
    fn invalid_viewport_does_not_produce_nan() {
        let cam = OrbitCamera::default();
        let ray = cam.ray_through(Vec2::new(0.0, 0.0), Viewport::new(0.0, 0.0));
        assert!(ray.origin.is_finite());
        assert!(ray.dir.is_finite());
    }

    #[test]
    fn projection_follows_viewport_aspect() {
        let cam = OrbitCamera::default();
        let wide = cam.projection_matrix(VP);
        let square = cam.projection_matrix(Viewport::new(720.0, 720.0));
        assert!(approx(wide.x_axis.x * VP.aspect(), square.x_axis.x));
        assert_eq!(cam.projection_matrix(Viewport::new(800.0, 0.0)), cam.projection_matrix(Viewport::new(5.0, 5.0)));
    }
}
