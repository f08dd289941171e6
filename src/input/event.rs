/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into camera mutations.
///
/// # Example
///
/// ```ignore
/// let consumed = input_processor
///     .handle_event(&mut camera, InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event into a pointer event, if it maps
    /// to one.
    ///
    /// Pixel-based scroll deltas (trackpads) are scaled down to roughly
    /// match line-based wheel deltas.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            _ => None,
        }
    }
}
