//! Converts platform-agnostic input into camera mutations.
//!
//! The `InputProcessor` owns all transient input state (held movement
//! keys, last cursor position) and the key-binding map. It is the only
//! thing that sits between translated window events and the camera's
//! input operations.
//!
//! Event-driven windowing reports key *transitions* while movement wants
//! per-frame *held* state, so the processor tracks the held set from
//! press/release events and drains it into
//! [`Camera::translate`] calls once per frame via
//! [`advance`](InputProcessor::advance).

use std::collections::HashSet;

use glam::Vec2;

use crate::camera::{Camera, Movement};
use crate::options::KeybindingOptions;

use super::event::InputEvent;

/// Fixed drain order for held directions; keeps per-frame movement
/// deterministic regardless of hash iteration order.
const DRAIN_ORDER: [Movement; 4] = [
    Movement::Forward,
    Movement::Backward,
    Movement::Left,
    Movement::Right,
];

/// Converts key transitions and pointer events into camera mutations.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// let _ = input_processor.handle_key("KeyW", pressed);
/// let _ = input_processor.handle_event(&mut camera, event);
///
/// // Once per frame:
/// input_processor.advance(&mut camera, frame_timing.tick());
/// ```
pub struct InputProcessor {
    /// Movement directions whose bound keys are currently held.
    held: HashSet<Movement>,
    /// Last reported cursor position; `None` until the first report so
    /// the initial event produces no rotation jump.
    last_cursor: Option<Vec2>,
    /// Whether `look` calls clamp pitch to ±89°.
    constrain_pitch: bool,
    /// Key string → movement direction mapping.
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings (W/S/A/D) and pitch
    /// constraint enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeybindingOptions) -> Self {
        Self {
            held: HashSet::new(),
            last_cursor: None,
            constrain_pitch: true,
            bindings,
        }
    }

    /// Whether pitch is clamped to ±89° on look input.
    #[must_use]
    pub fn constrain_pitch(&self) -> bool {
        self.constrain_pitch
    }

    /// Enable or disable the pitch clamp.
    pub fn set_constrain_pitch(&mut self, constrain: bool) {
        self.constrain_pitch = constrain;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.bindings
    }

    /// Whether the given direction's bound key is currently held.
    #[must_use]
    pub fn is_held(&self, direction: Movement) -> bool {
        self.held.contains(&direction)
    }

    /// Record a key transition.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format
    /// (`"KeyW"`, `"ArrowUp"`, ...). Returns whether the key was bound to
    /// a movement direction. Key-repeat presses are harmless; inserting
    /// an already-held direction is a no-op.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let Some(direction) = self.bindings.lookup(key) else {
            log::trace!("unbound key: {key}");
            return false;
        };
        if pressed {
            let _ = self.held.insert(direction);
        } else {
            let _ = self.held.remove(&direction);
        }
        true
    }

    /// Process a pointer event and return whether it was consumed.
    ///
    /// Cursor motion turns into a [`Camera::look`] call with the vertical
    /// axis flipped (window coordinates grow downward, pitch grows
    /// upward); scroll turns into [`Camera::zoom`].
    pub fn handle_event(
        &mut self,
        camera: &mut Camera,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                if let Some(last) = self.last_cursor {
                    let xoffset = current.x - last.x;
                    let yoffset = last.y - current.y;
                    camera.look(xoffset, yoffset, self.constrain_pitch);
                }
                self.last_cursor = Some(current);
                true
            }
            InputEvent::Scroll { delta } => {
                camera.zoom(delta);
                true
            }
        }
    }

    /// Apply per-frame movement for every held direction.
    ///
    /// One [`Camera::translate`] call per held direction, in fixed
    /// Forward/Backward/Left/Right order. `dt` is the elapsed frame time
    /// in seconds.
    pub fn advance(&mut self, camera: &mut Camera, dt: f32) {
        for direction in DRAIN_ORDER {
            if self.held.contains(&direction) {
                camera.translate(direction, dt);
            }
        }
    }

    /// Forget the last cursor position.
    ///
    /// Call when cursor capture toggles; otherwise the next cursor report
    /// would be interpreted as one large rotation delta.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Release all held movement keys.
    ///
    /// Call on window focus loss; release events for keys held across the
    /// focus change never arrive, and the keys would stick.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Translate a winit window event into the calls above.
    ///
    /// Handles keyboard input, cursor motion, scroll, and focus loss.
    /// Returns whether the event was consumed.
    #[cfg(feature = "viewer")]
    pub fn handle_window_event(
        &mut self,
        camera: &mut Camera,
        event: &winit::event::WindowEvent,
    ) -> bool {
        use winit::event::{ElementState, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let key_str = format!("{code:?}");
                self.handle_key(&key_str, event.state == ElementState::Pressed)
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => match InputEvent::from_window_event(event) {
                Some(translated) => self.handle_event(camera, translated),
                None => false,
            },
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
