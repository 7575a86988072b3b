//! Per-record keyframe emission.
//!
//! Owns the tracked-object arena (camera, ball, car slots), keyed by kind and
//! populated on demand the first time a record needs an object. Car slots at
//! or past the header's `cars` count are never created. Each entry carries
//! its own continuity filter and the highest sub-frame it has emitted.

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::header::Header;
use crate::kinds::{ObjectKind, MAX_CARS};
use crate::layout::FieldLayout;
use crate::math::round6;
use crate::record::Record;
use crate::sink::{CameraSpec, KeyField, KeyframeSink, ObjectHandle, ObjectSpec};

use crate::continuity::ContinuityFilter;

/// Full-frame 36mm sensor; reference width for the focal-ratio option.
const DEFAULT_SENSOR_WIDTH: f64 = 36.0;

#[derive(Debug)]
struct TrackedObject {
    handle: ObjectHandle,
    continuity: ContinuityFilter,
    highest_subframe: f64,
    sensor_width_keyed: bool,
}

impl TrackedObject {
    fn new(handle: ObjectHandle) -> Self {
        Self {
            handle,
            continuity: ContinuityFilter::new(),
            highest_subframe: f64::NEG_INFINITY,
            sensor_width_keyed: false,
        }
    }
}

#[derive(Debug)]
pub struct Emitter {
    cfg: ImportConfig,
    layout: FieldLayout,
    arena: Vec<Option<TrackedObject>>,
}

impl Emitter {
    pub fn new(cfg: ImportConfig, layout: FieldLayout) -> Self {
        let mut arena = Vec::with_capacity(2 + MAX_CARS);
        arena.resize_with(2 + MAX_CARS, || None);
        Self { cfg, layout, arena }
    }

    /// Emit keyframes for every tracked object present on this record at the
    /// given output sub-frame (relative; the configured start frame offset is
    /// applied here).
    pub fn emit_record<S: KeyframeSink>(
        &mut self,
        sink: &mut S,
        header: &Header,
        record: &Record,
        subframe: f64,
    ) -> Result<(), ImportError> {
        let subframe = round6(subframe + self.cfg.output_start_frame as f64);
        let cars = header.cars().unwrap_or(0);

        for kind in ObjectKind::all() {
            if let ObjectKind::Car(slot) = kind {
                if slot as i64 >= cars {
                    continue;
                }
            }
            let idx = kind.arena_index();
            if self.arena[idx].is_none() {
                let spec = object_spec(&self.cfg, kind, header);
                let handle = sink.create_object(&spec);
                self.arena[idx] = Some(TrackedObject::new(handle));
            }
            let Some(entry) = self.arena[idx].as_mut() else {
                continue;
            };

            if kind == ObjectKind::Camera {
                let angle = record.fov_degrees(&self.layout)?.to_radians();
                sink.set_fov(entry.handle, angle);
                if self.cfg.maintain_sensor_focal_ratio {
                    let lens = lens_for_angle(angle, self.cfg.sensor_width) * DEFAULT_SENSOR_WIDTH
                        / self.cfg.sensor_width;
                    sink.set_lens(entry.handle, lens);
                }
                sink.insert_keyframe(entry.handle, KeyField::Lens, subframe);
                if !entry.sensor_width_keyed {
                    sink.insert_keyframe(entry.handle, KeyField::SensorWidth, subframe);
                    entry.sensor_width_keyed = true;
                }
                if self.cfg.include_frame_nums {
                    sink.set_frame_number(entry.handle, record.frame_number(&self.layout)?);
                    sink.insert_keyframe(entry.handle, KeyField::FrameNumber, subframe);
                }
            }

            let raw_loc = record.location(kind.loc_field(&self.layout))?;
            let [x, y, z, w] = record.quaternion(kind.quat_field(&self.layout))?;
            let location = kind.remap_location(raw_loc, self.cfg.unit_scale);
            let rotation = entry
                .continuity
                .apply(subframe, kind.remap_rotation(w, x, y, z));

            sink.set_transform(entry.handle, location, rotation);
            sink.insert_keyframe(entry.handle, KeyField::Location, subframe);
            sink.insert_keyframe(entry.handle, KeyField::RotationQuaternion, subframe);

            entry.highest_subframe = entry.highest_subframe.max(subframe);
        }
        Ok(())
    }

    /// Highest sub-frame emitted across all tracked objects; `None` when no
    /// object ever emitted one.
    pub fn highest_subframe(&self) -> Option<f64> {
        self.arena
            .iter()
            .flatten()
            .map(|entry| entry.highest_subframe)
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |a| a.max(v)))
            })
    }
}

fn object_spec(cfg: &ImportConfig, kind: ObjectKind, header: &Header) -> ObjectSpec {
    let camera = (kind == ObjectKind::Camera).then(|| CameraSpec {
        data_name: header.camera_name().to_string(),
        sensor_width: cfg.sensor_width,
        initial_angle: 90f64.to_radians(),
    });
    ObjectSpec {
        kind,
        name: kind.name(),
        proxy: kind.proxy(),
        color: kind.color(),
        camera,
    }
}

/// Focal length in millimeters for a horizontal angle of view.
fn lens_for_angle(angle: f64, sensor_width: f64) -> f64 {
    sensor_width / (2.0 * (angle / 2.0).tan())
}
