//! First-person camera: Euler-angle orientation state, input mapping,
//! and view-transform derivation.

/// Core camera struct, movement directions, and default constants.
pub mod core;
/// GPU uniform block for per-frame camera state upload.
pub mod uniform;

pub use self::core::{Camera, Movement};
pub use uniform::CameraUniform;
