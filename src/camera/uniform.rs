use glam::Mat4;

use super::core::{Camera, DEFAULT_FOVY};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block mirroring the camera's per-frame state.
///
/// The crate performs no GPU calls; the caller owns the buffer and copies
/// this block into it once per frame (`bytemuck::cast_slice(&[uniform])`).
/// The projection transform stays caller-owned, so the block carries the
/// view matrix plus the `fovy` the caller's projection needs.
pub struct CameraUniform {
    /// World-to-eye view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees, for the caller's projection.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with an identity view at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: DEFAULT_FOVY,
        }
    }

    /// Update all fields from the given camera's current state.
    pub fn update_view(&mut self, camera: &Camera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.fovy = camera.fovy();
    }
}
