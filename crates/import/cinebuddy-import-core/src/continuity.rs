//! Quaternion sign continuity.
//!
//! q and -q encode the same rotation, but interpolating across a sign flip
//! takes the long way around. The filter tracks the last accepted quaternion
//! per object and negates an incoming sample whose dot product with it is
//! negative. The correction only applies when the new and previous sub-frames
//! floor to different output frames and at least one of the two is itself
//! fractional; when both land exactly on output frames the host's own
//! keyframe interpolation is well-behaved and no flip is introduced.

use crate::math::{round6, Quat};

#[derive(Debug, Default)]
pub struct ContinuityFilter {
    prev_quat: Option<Quat>,
    prev_subframe: f64,
}

impl ContinuityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a new orientation sample at `subframe`, returning it possibly
    /// negated for shortest-path continuity with the previous sample.
    pub fn apply(&mut self, subframe: f64, quat: Quat) -> Quat {
        let mut quat = quat;
        if let Some(prev) = self.prev_quat {
            let frame = subframe.floor();
            let prev_frame = self.prev_subframe.floor();
            let either_fractional = round6(frame - subframe) != 0.0
                || round6(prev_frame - self.prev_subframe) != 0.0;
            if frame != prev_frame && either_fractional && prev.dot(quat) < 0.0 {
                quat = quat.negated();
            }
        }
        self.prev_quat = Some(quat);
        self.prev_subframe = subframe;
        quat
    }
}
