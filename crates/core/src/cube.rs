//! The cube: fixed geometry plus accumulated orientation.

use crate::math::{normalize, DVec3, Rotation};

/// Vertex indices of each face, counter-clockwise when viewed from outside.
///
/// Vertices 0-3 are the `z = -s` square, 4-7 the `z = +s` square.
pub const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom, -Z
    [4, 5, 6, 7], // top, +Z
    [0, 1, 5, 4], // front, -Y
    [1, 2, 6, 5], // right, +X
    [2, 3, 7, 6], // back, +Y
    [3, 0, 4, 7], // left, -X
];

/// One quadrilateral face with its outward object-space normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub indices: [usize; 4],
    pub normal: DVec3,
}

/// A cube centered at the origin.
///
/// Geometry is immutable after [`Cube::new`]; only the rotation angles change.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [DVec3; 8],
    faces: [Face; 6],
    angles: DVec3,
}

impl Cube {
    /// Build a cube with half-extent `size`.
    pub fn new(size: f64) -> Self {
        let s = size;
        let vertices = [
            DVec3::new(-s, -s, -s),
            DVec3::new(s, -s, -s),
            DVec3::new(s, s, -s),
            DVec3::new(-s, s, -s),
            DVec3::new(-s, -s, s),
            DVec3::new(s, -s, s),
            DVec3::new(s, s, s),
            DVec3::new(-s, s, s),
        ];

        let faces = FACES.map(|indices| {
            let v0 = vertices[indices[0]];
            let v1 = vertices[indices[1]];
            let v2 = vertices[indices[2]];
            Face {
                indices,
                normal: normalize((v1 - v0).cross(v2 - v0)),
            }
        });

        Self {
            vertices,
            faces,
            angles: DVec3::ZERO,
        }
    }

    pub fn vertices(&self) -> &[DVec3; 8] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Corner positions `A, B, C, D` of a face, in its winding order.
    pub fn corners(&self, face: &Face) -> [DVec3; 4] {
        face.indices.map(|i| self.vertices[i])
    }

    /// Accumulated rotation angles (radians) about X, Y and Z.
    pub fn angles(&self) -> DVec3 {
        self.angles
    }

    pub fn set_angles(&mut self, angles: DVec3) {
        self.angles = angles;
    }

    /// Add per-axis deltas (radians). No wraparound: the trig is periodic.
    pub fn update_rotation(&mut self, delta: DVec3) {
        self.angles += delta;
    }

    /// Rotation matrices for the current orientation.
    pub fn rotation(&self) -> Rotation {
        Rotation::from_angles(self.angles)
    }
}
