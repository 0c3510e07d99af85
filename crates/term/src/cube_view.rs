//! CubeView: maps a `core::Cube` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::math::DVec3;
use crate::core::{Cube, SampleParams};
use crate::fb::FrameBuffer;
use crate::types::RenderPoint;
use crate::viewport::Viewport;

/// Camera and lighting setup, fixed for the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Unit light direction.
    pub light: DVec3,
    pub focal_length: f64,
    pub camera_distance: f64,
    pub density: u32,
    pub char_aspect: f64,
}

impl Lens {
    pub fn params(&self, viewport: Viewport) -> SampleParams {
        SampleParams {
            light: self.light,
            focal_length: self.focal_length,
            camera_distance: self.camera_distance,
            density: self.density,
            char_aspect: self.char_aspect,
            screen_width: viewport.width,
            screen_height: viewport.height,
        }
    }
}

/// A lightweight renderer for the cube.
pub struct CubeView {
    lens: Lens,
    points: Vec<RenderPoint>,
}

impl CubeView {
    pub fn new(lens: Lens) -> Self {
        Self {
            lens,
            points: Vec::new(),
        }
    }

    /// Render the cube's current orientation into an existing framebuffer.
    ///
    /// The framebuffer is rebuilt if `viewport` differs from its size, then
    /// cleared, then every sample is plotted. Returns whether a resize happened
    /// so the caller can wipe stale cells off the real screen.
    ///
    /// This is the allocation-free hot path once the sample buffer and
    /// framebuffer have reached their steady-state size.
    pub fn render_into(&mut self, cube: &Cube, viewport: Viewport, fb: &mut FrameBuffer) -> bool {
        let resized = fb.resize(viewport.width, viewport.height);
        if resized {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "framebuffer rebuilt"
            );
        }
        fb.clear();

        cube.sample_into(&self.lens.params(viewport), &mut self.points);
        for point in &self.points {
            fb.plot(point);
        }
        resized
    }
}
