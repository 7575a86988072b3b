#![allow(dead_code)]
//! Recording sink double shared by the integration tests.

use cinebuddy_import_core::{KeyField, KeyframeSink, ObjectHandle, ObjectSpec, Quat};

#[derive(Clone, Debug, PartialEq)]
pub enum SinkOp {
    Transform {
        handle: ObjectHandle,
        location: [f64; 3],
        rotation: Quat,
    },
    Fov {
        handle: ObjectHandle,
        radians: f64,
    },
    Lens {
        handle: ObjectHandle,
        lens: f64,
    },
    FrameNumber {
        handle: ObjectHandle,
        frame: f64,
    },
    Key {
        handle: ObjectHandle,
        field: KeyField,
        subframe: f64,
    },
}

#[derive(Debug, Default, PartialEq)]
pub struct RecordingSink {
    pub created: Vec<ObjectSpec>,
    pub ops: Vec<SinkOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_of(&self, name: &str) -> ObjectHandle {
        self.created
            .iter()
            .position(|spec| spec.name == name)
            .unwrap_or_else(|| panic!("no object named {name} was created"))
    }

    pub fn created_names(&self) -> Vec<&str> {
        self.created.iter().map(|spec| spec.name.as_str()).collect()
    }

    pub fn keyframes(&self, handle: ObjectHandle, field: KeyField) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::Key {
                    handle: h,
                    field: f,
                    subframe,
                } if *h == handle && *f == field => Some(*subframe),
                _ => None,
            })
            .collect()
    }

    pub fn transforms(&self, handle: ObjectHandle) -> Vec<([f64; 3], Quat)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::Transform {
                    handle: h,
                    location,
                    rotation,
                } if *h == handle => Some((*location, *rotation)),
                _ => None,
            })
            .collect()
    }

    pub fn frame_numbers(&self, handle: ObjectHandle) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::FrameNumber { handle: h, frame } if *h == handle => Some(*frame),
                _ => None,
            })
            .collect()
    }
}

impl KeyframeSink for RecordingSink {
    fn create_object(&mut self, spec: &ObjectSpec) -> ObjectHandle {
        self.created.push(spec.clone());
        self.created.len() - 1
    }

    fn set_transform(&mut self, handle: ObjectHandle, location: [f64; 3], rotation: Quat) {
        self.ops.push(SinkOp::Transform {
            handle,
            location,
            rotation,
        });
    }

    fn set_fov(&mut self, handle: ObjectHandle, radians: f64) {
        self.ops.push(SinkOp::Fov { handle, radians });
    }

    fn set_lens(&mut self, handle: ObjectHandle, lens: f64) {
        self.ops.push(SinkOp::Lens { handle, lens });
    }

    fn set_frame_number(&mut self, handle: ObjectHandle, frame: f64) {
        self.ops.push(SinkOp::FrameNumber { handle, frame });
    }

    fn insert_keyframe(&mut self, handle: ObjectHandle, field: KeyField, subframe: f64) {
        self.ops.push(SinkOp::Key {
            handle,
            field,
            subframe,
        });
    }
}

/// Build a capture text: header lines, filler up to the data boundary, then
/// data lines.
pub fn capture_text(header: &[&str], data: &[&str]) -> String {
    let mut lines: Vec<String> = header.iter().map(|s| s.to_string()).collect();
    assert!(lines.len() <= 6, "header block is at most 6 lines");
    while lines.len() < 15 {
        lines.push("-".to_string());
    }
    lines.extend(data.iter().map(|s| s.to_string()));
    lines.join("\n")
}
