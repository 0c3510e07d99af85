//! ASCII cube (workspace facade crate).
//!
//! Re-exports the pipeline crates under `crates/` as
//! `ascii_cube::{config,core,term,types}` so the binary, integration tests and
//! benches share one import path.

pub use ascii_cube_config as config;
pub use ascii_cube_core as core;
pub use ascii_cube_term as term;
pub use ascii_cube_types as types;
