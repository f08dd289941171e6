//! Input handling: platform-agnostic event types and the processor that
//! converts them into camera mutations.

/// Platform-agnostic pointer events.
pub mod event;
/// Converts events and key transitions into camera calls.
pub mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;
