//! Core geometry module - pure, deterministic, and testable
//!
//! This crate contains the 3D half of the rendering pipeline. It has **zero
//! dependencies** on terminals or I/O, so every stage can be driven from tests
//! and benches.
//!
//! # Module Structure
//!
//! - [`math`]: vector helpers and the fixed X→Y→Z rotation composition
//! - [`cube`]: the cube's vertices, faces, outward normals and rotation state
//! - [`sampler`]: back-face culling, bilinear surface sampling, lighting and
//!   perspective projection into terminal cells
//!
//! # Pipeline
//!
//! Each frame the runner advances the rotation, then asks the cube for its
//! samples:
//!
//! ```
//! use ascii_cube_core::math::DVec3;
//! use ascii_cube_core::{Cube, SampleParams};
//!
//! let mut cube = Cube::new(1.0);
//! cube.update_rotation(DVec3::new(0.6, 0.785, 0.0));
//!
//! let points = cube.sample(&SampleParams {
//!     light: DVec3::NEG_Z,
//!     focal_length: 2.5,
//!     camera_distance: 5.0,
//!     density: 10,
//!     char_aspect: 2.0,
//!     screen_width: 80,
//!     screen_height: 24,
//! });
//!
//! // Three faces are visible, each sampled on an 11x11 grid.
//! assert_eq!(points.len(), 3 * 121);
//! ```
//!
//! # Conventions
//!
//! - Camera at `(0, 0, -camera_distance)` looking toward `+Z`
//! - Screen `y` grows downward with world `y`; no flip is applied
//! - Depth is `z + camera_distance`; samples at or behind the camera are dropped

pub mod cube;
pub mod math;
pub mod sampler;

pub use ascii_cube_types as types;

// Re-export commonly used types for convenience
pub use cube::{Cube, Face, FACES};
pub use math::Rotation;
pub use sampler::{SampleParams, ScreenMapping, CULL_EPSILON};
