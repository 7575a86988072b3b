//! Output-time segments derived from snapshot pairs.

use crate::snapshots::Snapshot;

/// One output-time span mapped back onto a half-open capture-frame range
/// `[start_frame, out_frame)`. Built once, consumed sequentially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Cumulative output time preceding this segment, in seconds.
    pub start_time: f64,
    pub start_frame: i64,
    /// Exclusive upper capture-frame bound.
    pub out_frame: i64,
    /// Output wall-time span in seconds, already playback-speed scaled.
    pub duration: f64,
}

impl Segment {
    /// Integer capture frames nominally covered by this segment.
    pub fn expected_frames(&self) -> i64 {
        self.out_frame - self.start_frame
    }
}

/// Build the segment list from an ordered snapshot set: one segment per
/// consecutive pair, plus a synthetic one-frame trailing segment so a
/// terminal anchor frame always exists. Its upper bound becomes the effective
/// end of processing.
pub fn build_segments(snapshots: &[Snapshot], playback_speed: f64, target_fps: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(snapshots.len());
    let mut start_time = 0.0;
    for pair in snapshots.windows(2) {
        let duration = (pair[1].timestamp - pair[0].timestamp) / playback_speed;
        segments.push(Segment {
            start_time,
            start_frame: pair[0].frame,
            out_frame: pair[1].frame,
            duration,
        });
        start_time += duration;
    }
    let last = snapshots[snapshots.len() - 1];
    segments.push(Segment {
        start_time,
        start_frame: last.frame,
        out_frame: last.frame + 1,
        duration: 1.0 / playback_speed / target_fps,
    });
    segments
}
