use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// Default yaw in degrees. -90° points the initial front vector down -Z,
/// the conventional "into the screen" direction for a right-handed view.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees (level horizon).
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity (degrees per pointer unit).
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOVY: f32 = 45.0;
/// Pitch clamp bound in degrees; keeps the view from flipping past vertical.
pub const PITCH_LIMIT: f32 = 89.0;
/// Minimum vertical field of view in degrees.
pub const FOVY_MIN: f32 = 1.0;
/// Maximum vertical field of view in degrees.
pub const FOVY_MAX: f32 = 45.0;

/// Discrete movement directions, abstracted away from any windowing
/// system's key codes.
///
/// Serde serializes as `snake_case` strings so TOML key bindings stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// Move along the front vector.
    Forward,
    /// Move against the front vector.
    Backward,
    /// Move against the right vector.
    Left,
    /// Move along the right vector.
    Right,
}

/// First-person fly camera driven by Euler angles.
///
/// Owns a world-space position and a yaw/pitch orientation, and keeps a
/// derived right-handed orthonormal basis (`front`, `right`, `up`) in sync
/// with the angles. Input mutators ([`translate`](Self::translate),
/// [`look`](Self::look), [`zoom`](Self::zoom)) update the state in place;
/// [`view_matrix`](Self::view_matrix) derives the world-to-eye transform
/// on demand.
///
/// The basis vectors are private because they must never be set
/// independently of yaw/pitch; they are rewritten as a unit whenever
/// either angle changes.
pub struct Camera {
    /// Eye position in world space. Unbounded; movement never clamps it.
    pub position: Vec3,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pointer unit.
    pub mouse_sensitivity: f32,

    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fovy: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` with the given world-up reference and
    /// initial yaw/pitch in degrees.
    ///
    /// A `world_up` parallel to the derived front direction produces NaN
    /// basis vectors; inputs are not validated, matching the crate-wide
    /// NaN-propagation contract.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            fovy: DEFAULT_FOVY,
        };
        camera.update_basis();
        camera
    }

    /// Component-wise variant of [`new`](Self::new).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Create a camera from configuration, applying its pose and tuning
    /// parameters.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(options.position),
            Vec3::from_array(options.world_up),
            options.yaw,
            options.pitch,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.set_fovy(options.fovy);
        camera
    }

    /// Build the world-to-eye view matrix from the current state.
    ///
    /// Right-handed look-at from `position` toward `position + front`
    /// with the derived up vector. Pure; no side effects.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Move the camera one axis at a time.
    ///
    /// Covers `movement_speed * dt` world units along the front axis
    /// (`Forward`/`Backward`) or the right axis (`Right`/`Left`).
    /// Diagonal movement is two calls. `dt` is assumed non-negative; the
    /// resulting position is never clamped.
    pub fn translate(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply pointer deltas to yaw and pitch.
    ///
    /// Both offsets are scaled by `mouse_sensitivity` before being added.
    /// When `constrain_pitch` is set, pitch is clamped to ±89° so the view
    /// cannot flip past vertical. The basis is re-derived unconditionally;
    /// skipping it would desynchronize [`view_matrix`](Self::view_matrix)
    /// from the stored angles.
    pub fn look(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Apply a scroll delta to the field of view.
    ///
    /// Positive `yoffset` narrows the field of view (zooms in). The result
    /// is clamped to [1°, 45°]. Position and orientation are untouched.
    pub fn zoom(&mut self, yoffset: f32) {
        self.set_fovy(self.fovy - yoffset);
    }

    /// Unit front (view) direction in world space.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right direction in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Fixed world-up reference used to derive the basis.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees. Unbounded; trigonometric periodicity makes
    /// wrapping unnecessary.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, for the caller's projection
    /// transform. Always within [1°, 45°].
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy.clamp(FOVY_MIN, FOVY_MAX);
    }

    /// Re-derive `front`, `right`, and `up` from yaw/pitch/world_up.
    ///
    /// Sole writer of the basis vectors. `right` and `up` depend on the
    /// freshly normalized `front`, so the three writes always happen
    /// together.
    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "expected {b:?}, got {a:?}");
    }

    /// Manual look-at composition (rotation · translation), kept as an
    /// independent oracle for `view_matrix`.
    fn lookat_by_composition(
        position: Vec3,
        target: Vec3,
        world_up: Vec3,
    ) -> Mat4 {
        let zaxis = (position - target).normalize();
        let xaxis = world_up.normalize().cross(zaxis).normalize();
        let yaxis = zaxis.cross(xaxis);

        let rotation = Mat4::from_cols_array_2d(&[
            [xaxis.x, yaxis.x, zaxis.x, 0.0],
            [xaxis.y, yaxis.y, zaxis.y, 0.0],
            [xaxis.z, yaxis.z, zaxis.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let translation = Mat4::from_translation(-position);
        rotation * translation
    }

    #[test]
    fn default_state() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.pitch(), DEFAULT_PITCH);
        assert_eq!(camera.movement_speed, DEFAULT_SPEED);
        assert_eq!(camera.mouse_sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(camera.fovy(), DEFAULT_FOVY);
        assert_vec3_near(camera.front(), Vec3::NEG_Z);
    }

    #[test]
    fn scalar_constructor_matches_vector_constructor() {
        let a = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, 15.0);
        let b = Camera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 30.0, 15.0);
        assert_eq!(a.position, b.position);
        assert_vec3_near(a.front(), b.front());
        assert_vec3_near(a.right(), b.right());
        assert_vec3_near(a.up(), b.up());
    }

    #[test]
    fn basis_is_orthonormal_across_angle_sweep() {
        for yaw_step in 0..12 {
            for pitch_step in -4_i32..=4 {
                let yaw = yaw_step as f32 * 30.0;
                let pitch = pitch_step as f32 * 20.0;
                let camera = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);

                let (f, r, u) = (camera.front(), camera.right(), camera.up());
                assert!((f.length() - 1.0).abs() < EPSILON);
                assert!((r.length() - 1.0).abs() < EPSILON);
                assert!((u.length() - 1.0).abs() < EPSILON);
                assert!(f.dot(r).abs() < EPSILON);
                assert!(f.dot(u).abs() < EPSILON);
                assert!(r.dot(u).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn basis_is_right_handed() {
        let camera = Camera::new(Vec3::ZERO, Vec3::Y, 37.0, -20.0);
        assert_vec3_near(camera.right().cross(camera.up()), -camera.front());
    }

    #[test]
    fn basis_update_is_idempotent() {
        let mut camera = Camera::default();
        camera.look(123.0, -45.0, true);
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        // Zero-delta look re-runs the derivation with unchanged angles.
        camera.look(0.0, 0.0, true);
        assert_eq!(camera.front(), f);
        assert_eq!(camera.right(), r);
        assert_eq!(camera.up(), u);
    }

    #[test]
    fn look_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.look(100.0, 50.0, true);
        assert!((camera.yaw() - (DEFAULT_YAW + 10.0)).abs() < EPSILON);
        assert!((camera.pitch() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn constrained_pitch_stays_in_bounds() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.look(0.0, 400.0, true);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        for _ in 0..100 {
            camera.look(0.0, -400.0, true);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_can_exceed_limit() {
        let mut camera = Camera::default();
        camera.look(0.0, 2000.0, false);
        assert!(camera.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn fovy_clamps_to_range() {
        let mut camera = Camera::default();
        camera.zoom(100.0);
        assert_eq!(camera.fovy(), FOVY_MIN);
        camera.zoom(-100.0);
        assert_eq!(camera.fovy(), FOVY_MAX);
        camera.zoom(15.0);
        assert_eq!(camera.fovy(), 30.0);
    }

    #[test]
    fn zoom_leaves_pose_untouched() {
        let mut camera = Camera::default();
        camera.zoom(10.0);
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.pitch(), DEFAULT_PITCH);
    }

    #[test]
    fn forward_movement_covers_speed_times_dt() {
        let mut camera = Camera::default();
        camera.translate(Movement::Forward, 1.0);
        assert_vec3_near(camera.position, Vec3::new(0.0, 0.0, -2.5));
    }

    #[test]
    fn strafing_moves_along_right_axis() {
        let mut camera = Camera::default();
        camera.translate(Movement::Right, 2.0);
        assert_vec3_near(camera.position, Vec3::new(5.0, 0.0, 0.0));
        camera.translate(Movement::Left, 2.0);
        assert_vec3_near(camera.position, Vec3::ZERO);
        camera.translate(Movement::Backward, 0.5);
        assert_vec3_near(camera.position, Vec3::new(0.0, 0.0, 1.25));
    }

    #[test]
    fn view_matrix_maps_position_to_origin() {
        let camera =
            Camera::new(Vec3::new(3.0, -1.0, 7.0), Vec3::Y, 25.0, -10.0);
        let view = camera.view_matrix();
        assert_vec3_near(view.transform_point3(camera.position), Vec3::ZERO);
    }

    #[test]
    fn view_matrix_maps_front_onto_negative_z() {
        let camera =
            Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -40.0, 12.0);
        let view = camera.view_matrix();
        let mapped = view.transform_point3(camera.position + camera.front());
        assert_vec3_near(mapped, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn view_matrix_matches_manual_composition() {
        let camera =
            Camera::new(Vec3::new(-2.0, 4.0, 1.5), Vec3::Y, 160.0, 33.0);
        let view = camera.view_matrix();
        let oracle = lookat_by_composition(
            camera.position,
            camera.position + camera.front(),
            camera.up(),
        );
        let (a, b) = (view.to_cols_array(), oracle.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < EPSILON, "matrices differ: {a:?} {b:?}");
        }
    }

    #[test]
    fn from_options_applies_pose_and_tuning() {
        let options = CameraOptions {
            position: [1.0, 2.0, 3.0],
            yaw: 45.0,
            pitch: 10.0,
            movement_speed: 5.0,
            mouse_sensitivity: 0.2,
            fovy: 60.0,
            ..CameraOptions::default()
        };
        let camera = Camera::from_options(&options);
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.yaw(), 45.0);
        assert_eq!(camera.movement_speed, 5.0);
        assert_eq!(camera.mouse_sensitivity, 0.2);
        // An out-of-range configured fovy is clamped on construction.
        assert_eq!(camera.fovy(), FOVY_MAX);
    }
}
