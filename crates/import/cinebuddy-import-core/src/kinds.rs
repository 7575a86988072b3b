//! Tracked object kinds.
//!
//! One variant per object the capture can carry: the camera, the ball, and
//! up to eight car slots. Each kind carries its own column lookup and its
//! own fixed coordinate remap from the capture's coordinate system into the
//! host's, selected by tag.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::layout::FieldLayout;
use crate::math::Quat;

/// Car slots a capture line can carry.
pub const MAX_CARS: usize = 8;

/// Host template an object is duplicated from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProxyKind {
    Car,
    Ball,
    Stadium,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ObjectKind {
    Camera,
    Ball,
    /// Car slot, 0-based.
    Car(usize),
}

impl ObjectKind {
    /// All kinds in capture column order: camera, ball, then car slots.
    pub fn all() -> impl Iterator<Item = ObjectKind> {
        [ObjectKind::Camera, ObjectKind::Ball]
            .into_iter()
            .chain((0..MAX_CARS).map(ObjectKind::Car))
    }

    /// Dense arena slot for this kind.
    pub fn arena_index(self) -> usize {
        match self {
            ObjectKind::Camera => 0,
            ObjectKind::Ball => 1,
            ObjectKind::Car(slot) => 2 + slot,
        }
    }

    pub fn name(self) -> String {
        match self {
            ObjectKind::Camera => "CAM".to_string(),
            ObjectKind::Ball => "BALL".to_string(),
            ObjectKind::Car(slot) => format!("CAR{}", slot + 1),
        }
    }

    pub fn proxy(self) -> Option<ProxyKind> {
        match self {
            ObjectKind::Camera => None,
            ObjectKind::Ball => Some(ProxyKind::Ball),
            ObjectKind::Car(_) => Some(ProxyKind::Car),
        }
    }

    /// Display color (RGBA) for car slots.
    pub fn color(self) -> Option<[f32; 4]> {
        match self {
            ObjectKind::Camera => None,
            ObjectKind::Ball => Some([1.0, 1.0, 1.0, 1.0]),
            ObjectKind::Car(slot) => Some(CAR_COLORS[slot]),
        }
    }

    pub fn loc_field(self, layout: &FieldLayout) -> usize {
        match self {
            ObjectKind::Camera => layout.camera_loc,
            ObjectKind::Ball => layout.ball_loc,
            ObjectKind::Car(slot) => layout.car_loc(slot),
        }
    }

    pub fn quat_field(self, layout: &FieldLayout) -> usize {
        match self {
            ObjectKind::Camera => layout.camera_quat,
            ObjectKind::Ball => layout.ball_quat,
            ObjectKind::Car(slot) => layout.car_quat(slot),
        }
    }

    /// Scale a raw capture location into host units. The capture's Y axis is
    /// mirrored for every kind.
    pub fn remap_location(self, loc: [f64; 3], unit_scale: f64) -> [f64; 3] {
        [
            loc[0] * unit_scale,
            -loc[1] * unit_scale,
            loc[2] * unit_scale,
        ]
    }

    /// Remap a raw capture quaternion (given w-first) into the host frame.
    pub fn remap_rotation(self, w: f64, x: f64, y: f64, z: f64) -> Quat {
        match self {
            // Swap/negate axes, then rotate -90 deg on Z and +90 deg on X so
            // the camera looks down its host-forward axis.
            ObjectKind::Camera => {
                let quat = Quat::new(w, -y, -x, -z);
                let quat = Quat::new(HALF_TURN_90, 0.0, 0.0, -HALF_TURN_90) * quat;
                quat * Quat::new(HALF_TURN_90, HALF_TURN_90, 0.0, 0.0)
            }
            ObjectKind::Ball | ObjectKind::Car(_) => Quat::new(w, -x, y, -z),
        }
    }
}

/// cos(90deg / 2); component of a quarter-turn quaternion.
const HALF_TURN_90: f64 = FRAC_1_SQRT_2;

/// Fixed palette for the eight car slots (RGBA).
const CAR_COLORS: [[f32; 4]; MAX_CARS] = [
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.898, 0.0, 1.0],
    [1.0, 0.647, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
];
