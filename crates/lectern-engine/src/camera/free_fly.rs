use glam::{Mat4, Vec3};

use super::projection::{ProjectionMode, orthographic_projection, perspective_projection};

/// Direction of a keyboard-driven camera step, relative to the view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Euler-angle free-fly camera.
///
/// Yaw and pitch are in degrees. Yaw -90 looks down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of pointer travel.
    pub mouse_sensitivity: f32,

    /// Vertical field of view in degrees.
    zoom: f32,
}

impl Camera {
    pub const DEFAULT_YAW: f32 = -90.0;
    pub const DEFAULT_PITCH: f32 = 0.0;
    pub const DEFAULT_SPEED: f32 = 2.5;
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    pub const DEFAULT_ZOOM: f32 = 45.0;

    pub const MIN_ZOOM: f32 = 1.0;
    pub const MAX_ZOOM: f32 = 45.0;
    pub const PITCH_LIMIT: f32 = 89.0;

    /// Camera at `position` looking down -Z with +Y up.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, Self::DEFAULT_YAW, Self::DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: Self::DEFAULT_SPEED,
            mouse_sensitivity: Self::DEFAULT_SENSITIVITY,
            zoom: Self::DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Moves along the view axes by `movement_speed * dt`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Turns by pointer offsets. Positive `y_offset` looks up.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        if x_offset == 0.0 && y_offset == 0.0 {
            return;
        }

        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scrolling up (positive) narrows the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Right-handed look matrix from the position toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32, mode: ProjectionMode) -> Mat4 {
        match mode {
            ProjectionMode::Perspective => perspective_projection(self.zoom, aspect),
            ProjectionMode::Orthographic => orthographic_projection(),
        }
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Camera {
        Camera::new(Vec3::new(0.0, 1.5, 7.0))
    }

    // ── view ──────────────────────────────────────────────────────────────

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = start();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(cam.up().abs_diff_eq(Vec3::Y, 1e-6));
        assert!(cam.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn view_matrix_matches_look_at_from_start_position() {
        let cam = start();
        let pos = Vec3::new(0.0, 1.5, 7.0);
        let expected = Mat4::look_at_rh(pos, pos + cam.front(), Vec3::Y);
        assert!(cam.view_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn zero_input_leaves_camera_unchanged() {
        let mut cam = start();
        let before = cam.clone();
        for _ in 0..120 {
            cam.process_mouse_movement(0.0, 0.0, true);
            cam.process_mouse_scroll(0.0);
        }
        assert_eq!(cam, before);
        assert!(cam.view_matrix().abs_diff_eq(before.view_matrix(), 0.0));
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn forward_step_scales_with_dt_and_speed() {
        let mut cam = start();
        cam.process_keyboard(CameraMovement::Forward, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 1.5, 5.75), 1e-5));
    }

    #[test]
    fn opposite_steps_cancel() {
        let mut cam = start();
        cam.process_keyboard(CameraMovement::Left, 0.1);
        cam.process_keyboard(CameraMovement::Right, 0.1);
        cam.process_keyboard(CameraMovement::Up, 0.1);
        cam.process_keyboard(CameraMovement::Down, 0.1);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 1.5, 7.0), 1e-5));
    }

    #[test]
    fn up_moves_along_camera_up() {
        let mut cam = start();
        cam.process_keyboard(CameraMovement::Up, 1.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 4.0, 7.0), 1e-5));
    }

    // ── look ──────────────────────────────────────────────────────────────

    #[test]
    fn pitch_is_clamped() {
        let mut cam = start();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), Camera::PITCH_LIMIT);
        cam.process_mouse_movement(0.0, -20_000.0, true);
        assert_eq!(cam.pitch(), -Camera::PITCH_LIMIT);
    }

    #[test]
    fn yaw_follows_sensitivity() {
        let mut cam = start();
        cam.process_mouse_movement(100.0, 0.0, true);
        assert!((cam.yaw() - (Camera::DEFAULT_YAW + 10.0)).abs() < 1e-4);
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn scroll_up_zooms_in_monotonically() {
        let mut cam = start();
        let mut last = cam.zoom();
        for _ in 0..10 {
            cam.process_mouse_scroll(1.0);
            assert!(cam.zoom() < last);
            last = cam.zoom();
        }
    }

    #[test]
    fn zoom_is_clamped_at_both_ends() {
        let mut cam = start();
        cam.process_mouse_scroll(-5.0);
        assert_eq!(cam.zoom(), Camera::MAX_ZOOM);
        cam.process_mouse_scroll(500.0);
        assert_eq!(cam.zoom(), Camera::MIN_ZOOM);
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn ortho_mode_returns_fixed_volume() {
        let cam = start();
        let expected = Mat4::orthographic_rh(-2.0, 2.0, -2.0, 2.0, 0.1, 100.0);
        assert_eq!(cam.projection_matrix(1.25, ProjectionMode::Orthographic), expected);
        assert_eq!(cam.projection_matrix(3.0, ProjectionMode::Orthographic), expected);
    }

    #[test]
    fn perspective_mode_uses_current_zoom() {
        let mut cam = start();
        cam.process_mouse_scroll(15.0);
        let expected = Mat4::perspective_rh(30f32.to_radians(), 1.25, 0.1, 100.0);
        assert!(cam
            .projection_matrix(1.25, ProjectionMode::Perspective)
            .abs_diff_eq(expected, 1e-6));
    }
}
