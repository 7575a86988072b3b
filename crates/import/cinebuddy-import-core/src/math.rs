//! Small quaternion type and keyframe-value rounding.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Quaternion stored w-first, matching the host's rotation convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn dot(self, other: Quat) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn negated(self) -> Quat {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul for Quat {
    type Output = Quat;

    /// Hamilton product.
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

/// Round to 6 decimal places; applied to every value before keyframing so
/// numerically-equal sub-frames compare equal.
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
