//! Terminal renderer module.
//!
//! This is the 2D half of the pipeline: samples from `core` are depth-tested
//! into a character framebuffer, and the framebuffer is serialized into one
//! escape-coded write per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Reuse buffers across frames; only a resize reallocates
//! - Emit the minimum number of color escapes per row

pub mod cube_view;
pub mod fb;
pub mod pacing;
pub mod renderer;
pub mod viewport;

pub use ascii_cube_core as core;
pub use ascii_cube_types as types;

pub use cube_view::{CubeView, Lens};
pub use fb::{Cell, FrameBuffer};
pub use pacing::FramePacer;
pub use renderer::{encode_cleanup_into, encode_frame_into, TerminalRenderer};
pub use viewport::Viewport;
