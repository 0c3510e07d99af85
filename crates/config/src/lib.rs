//! Configuration module - command line, color tables and resolution
//!
//! Turns user input into the typed, immutable [`Settings`] the frame loop runs
//! on. Nothing in here is fatal after argument parsing: unknown or out-of-range
//! colors fall back to documented defaults and surface a [`ColorWarning`].
//!
//! # Module Structure
//!
//! - [`args`]: `clap` definition of the command line
//! - [`palette`]: named gradients and named 256-color codes
//! - [`color`]: foreground/background resolution with fallbacks
//! - [`settings`]: the resolved run configuration
//!
//! # Example
//!
//! ```
//! use ascii_cube_config::color::resolve_foreground;
//!
//! let fg = resolve_foreground("42", 9);
//! assert_eq!(fg.value, vec![42; 9]);
//! assert!(fg.warning.is_none());
//! ```

pub mod args;
pub mod color;
pub mod palette;
pub mod settings;

pub use ascii_cube_core as core;
pub use ascii_cube_types as types;

pub use args::{Cli, LogLevel};
pub use color::{resolve_background, resolve_foreground, ColorWarning, Resolved};
pub use settings::Settings;
