//! Keyframe sink: the host-side collaborator.
//!
//! The core never touches scene graph, materials, or UI. It describes the
//! object it needs once (`ObjectSpec`), then streams property writes followed
//! by keyframe inserts at fractional output frames. Hosts implement this for
//! their own data model.

use crate::kinds::{ObjectKind, ProxyKind};
use crate::math::Quat;

/// Opaque handle to a host-created object, valid for the whole run.
pub type ObjectHandle = usize;

/// Animatable fields a keyframe can be inserted on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyField {
    Location,
    RotationQuaternion,
    Lens,
    SensorWidth,
    /// Raw capture frame number channel (cameras only).
    FrameNumber,
}

/// Camera-specific creation data.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSpec {
    /// Name for the camera data block.
    pub data_name: String,
    /// Sensor width in millimeters; sensor fit is horizontal.
    pub sensor_width: f64,
    /// Initial field of view in radians.
    pub initial_angle: f64,
}

/// Everything the host needs to materialize one tracked object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSpec {
    pub kind: ObjectKind,
    pub name: String,
    /// Template to duplicate from, when the host works with proxies.
    pub proxy: Option<ProxyKind>,
    pub color: Option<[f32; 4]>,
    pub camera: Option<CameraSpec>,
}

pub trait KeyframeSink {
    /// Create (or duplicate from proxy) the host object for `spec`.
    fn create_object(&mut self, spec: &ObjectSpec) -> ObjectHandle;

    /// Stage the object's transform for the next keyframe inserts.
    fn set_transform(&mut self, handle: ObjectHandle, location: [f64; 3], rotation: Quat);

    /// Stage the camera angle in radians.
    fn set_fov(&mut self, handle: ObjectHandle, radians: f64);

    /// Stage an explicit focal length in millimeters.
    fn set_lens(&mut self, handle: ObjectHandle, lens: f64);

    /// Stage the raw capture frame number channel value.
    fn set_frame_number(&mut self, handle: ObjectHandle, frame: f64);

    /// Insert a keyframe for `field` at the (fractional) output frame.
    fn insert_keyframe(&mut self, handle: ObjectHandle, field: KeyField, subframe: f64);
}
