//! Vector and rotation helpers on top of `glam`.
//!
//! Everything here is pure. Vectors are `DVec3` (f64) so that accumulated
//! rotation angles and projected coordinates keep double precision.

pub use glam::{DMat3, DVec3};

use ascii_cube_types::FALLBACK_LIGHT;

/// Scale `v` to unit length, or return the zero vector when `|v| == 0`.
///
/// Callers that cannot accept a zero direction (the light) must handle it;
/// see [`light_direction`].
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Right-handed rotation about X by `angle` radians.
#[inline]
pub fn rotate_x(angle: f64) -> DMat3 {
    DMat3::from_rotation_x(angle)
}

/// Right-handed rotation about Y by `angle` radians.
#[inline]
pub fn rotate_y(angle: f64) -> DMat3 {
    DMat3::from_rotation_y(angle)
}

/// Right-handed rotation about Z by `angle` radians.
#[inline]
pub fn rotate_z(angle: f64) -> DMat3 {
    DMat3::from_rotation_z(angle)
}

/// Normalized light direction, substituting [`FALLBACK_LIGHT`] for a zero vector.
///
/// ```
/// use ascii_cube_core::math::{light_direction, DVec3};
///
/// assert_eq!(light_direction(DVec3::ZERO), DVec3::new(0.0, 0.0, -1.0));
/// assert!((light_direction(DVec3::new(3.0, 0.0, 4.0)).length() - 1.0).abs() < 1e-12);
/// ```
pub fn light_direction(raw: DVec3) -> DVec3 {
    let unit = normalize(raw);
    if unit == DVec3::ZERO {
        DVec3::from_array(FALLBACK_LIGHT)
    } else {
        unit
    }
}

/// The three per-axis rotation matrices for one orientation.
///
/// Built once per frame and applied to every normal and sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    rx: DMat3,
    ry: DMat3,
    rz: DMat3,
}

impl Rotation {
    pub fn from_angles(angles: DVec3) -> Self {
        Self {
            rx: rotate_x(angles.x),
            ry: rotate_y(angles.y),
            rz: rotate_z(angles.z),
        }
    }

    /// Rotate about X, then Y, then Z: `Rz * (Ry * (Rx * p))`.
    ///
    /// The order is fixed; swapping it changes which axes the cube appears to
    /// tumble around.
    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        self.rz * (self.ry * (self.rx * p))
    }

    /// Undo [`Rotation::apply`]: transposed matrices in reverse order.
    #[inline]
    pub fn invert(&self, p: DVec3) -> DVec3 {
        self.rx.transpose() * (self.ry.transpose() * (self.rz.transpose() * p))
    }
}
