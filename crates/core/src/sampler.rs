//! Surface sampling and perspective projection.
//!
//! For every face that survives back-face culling, a `(density + 1)²` grid of
//! points is interpolated across the face, rotated into view space, projected,
//! and mapped to terminal cells. No edges are filled: cells the grid misses stay
//! background, so density trades smoothness for work.

use arrayvec::ArrayVec;

use crate::cube::{Cube, Face};
use crate::math::{normalize, DVec3, Rotation};
use crate::types::RenderPoint;

/// Faces whose rotated normal has at least this much component along the view
/// axis are culled. Kept slightly positive so near edge-on faces do not flicker.
pub const CULL_EPSILON: f64 = 0.03;

/// Per-frame projection inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParams {
    /// Unit light direction.
    pub light: DVec3,
    pub focal_length: f64,
    pub camera_distance: f64,
    /// Grid subdivisions per face edge; clamped to at least 1.
    pub density: u32,
    /// Glyph width/height correction.
    pub char_aspect: f64,
    pub screen_width: u16,
    pub screen_height: u16,
}

/// Direction from the camera toward the origin.
///
/// The camera sits at `(0, 0, -camera_distance)`, so for any positive distance
/// this is `+Z`.
#[inline]
pub fn view_axis(camera_distance: f64) -> DVec3 {
    normalize(DVec3::new(0.0, 0.0, camera_distance))
}

/// Whether a rotated face normal points away from the camera.
#[inline]
pub fn is_back_facing(normal: DVec3, view_axis: DVec3) -> bool {
    normal.dot(view_axis) >= CULL_EPSILON
}

/// Lambert intensity clamped to `[0, 1]`.
#[inline]
pub fn lambert(normal: DVec3, light: DVec3) -> f64 {
    normal.dot(light).clamp(0.0, 1.0)
}

/// Bilinear blend across a quad: `A(1-s)(1-t) + Bs(1-t) + Cst + D(1-s)t`.
#[inline]
pub fn bilinear(corners: &[DVec3; 4], s: f64, t: f64) -> DVec3 {
    let [a, b, c, d] = *corners;
    a * ((1.0 - s) * (1.0 - t)) + b * (s * (1.0 - t)) + c * (s * t) + d * ((1.0 - s) * t)
}

/// Projected-space to terminal-cell mapping for one screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    scale_x: f64,
    scale_y: f64,
    half_width: f64,
    half_height: f64,
}

impl ScreenMapping {
    /// Fit two projected units into the smaller effective dimension, widening X
    /// by the glyph aspect ratio.
    pub fn new(width: u16, height: u16, char_aspect: f64) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        let base_scale = (width / char_aspect).min(height) / 2.0;
        Self {
            scale_x: base_scale * char_aspect,
            scale_y: base_scale,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Cell coordinates, truncated toward zero.
    #[inline]
    pub fn to_cell(&self, proj_x: f64, proj_y: f64) -> (i32, i32) {
        (
            (proj_x * self.scale_x + self.half_width) as i32,
            (proj_y * self.scale_y + self.half_height) as i32,
        )
    }
}

impl Cube {
    /// Indices of the faces that face the camera under the current rotation.
    pub fn visible_faces(&self, camera_distance: f64) -> ArrayVec<usize, 6> {
        let rotation = self.rotation();
        let axis = view_axis(camera_distance);
        self.faces()
            .iter()
            .enumerate()
            .filter(|(_, face)| !is_back_facing(rotation.apply(face.normal), axis))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sample, project and shade all visible faces.
    pub fn sample(&self, params: &SampleParams) -> Vec<RenderPoint> {
        let mut out = Vec::new();
        self.sample_into(params, &mut out);
        out
    }

    /// Like [`Cube::sample`], but appends into a caller-owned buffer.
    ///
    /// `out` is cleared first; reuse it across frames to avoid reallocating.
    pub fn sample_into(&self, params: &SampleParams, out: &mut Vec<RenderPoint>) {
        out.clear();

        let rotation = self.rotation();
        let axis = view_axis(params.camera_distance);
        let mapping =
            ScreenMapping::new(params.screen_width, params.screen_height, params.char_aspect);
        let density = params.density.max(1);

        for face in self.faces() {
            let normal = rotation.apply(face.normal);
            if is_back_facing(normal, axis) {
                continue;
            }
            let intensity = lambert(normal, params.light);
            self.sample_face(face, &rotation, &mapping, params, density, intensity, out);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn sample_face(
        &self,
        face: &Face,
        rotation: &Rotation,
        mapping: &ScreenMapping,
        params: &SampleParams,
        density: u32,
        intensity: f64,
        out: &mut Vec<RenderPoint>,
    ) {
        let corners = self.corners(face);
        let steps = f64::from(density);

        for i in 0..=density {
            let s = f64::from(i) / steps;
            for j in 0..=density {
                let t = f64::from(j) / steps;
                let rotated = rotation.apply(bilinear(&corners, s, t));

                let depth = rotated.z + params.camera_distance;
                if depth <= 0.0 {
                    continue;
                }

                let proj_x = rotated.x * params.focal_length / depth;
                let proj_y = rotated.y * params.focal_length / depth;
                let (x, y) = mapping.to_cell(proj_x, proj_y);
                out.push(RenderPoint::new(x, y, depth, intensity));
            }
        }
    }
}
