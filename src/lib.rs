// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: intentional float casts and comparisons
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! First-person fly camera for real-time rendering.
//!
//! Maintains position and Euler-angle orientation state, converts
//! movement/look/zoom input into updated state, and derives a view
//! transform and orthonormal basis on demand. The crate never creates
//! windows, GPU devices, or event loops; it exposes outputs (view matrix,
//! a GPU-uploadable uniform block, a field-of-view scalar for the
//! caller's projection) and consumes translated input.
//!
//! # Key entry points
//!
//! - [`Camera`] - orientation state and view-transform derivation
//! - [`InputProcessor`] - held-key and cursor tracking feeding the camera
//! - [`options::Options`] - TOML preset configuration (pose, tuning,
//!   key bindings)
//! - [`util::FrameTiming`] - per-frame delta time for movement
//!
//! # Feature flags
//!
//! - `viewer` - winit window-event translation
//!   ([`InputProcessor::handle_window_event`]). The bridge maps already
//!   received events onto the crate's platform-agnostic calls; it
//!   performs no window management.
//!
//! The camera is single-threaded by design: every operation is an
//! immediate in-memory computation and the type provides no internal
//! synchronization. Callers spanning threads must serialize access.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraUniform, Movement};
pub use error::FlycamError;
pub use input::{InputEvent, InputProcessor};
