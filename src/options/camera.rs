use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_FOVY, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED,
    DEFAULT_YAW,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera pose and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub position: [f32; 3],
    /// World-up reference direction.
    pub world_up: [f32; 3],
    /// Initial yaw in degrees.
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pointer unit.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Whether look input clamps pitch to ±89°.
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            fovy: DEFAULT_FOVY,
            constrain_pitch: true,
        }
    }
}
