//! Import configuration, validated by the host before processing starts.

use serde::{Deserialize, Serialize};

/// Capture locations are exported in centimeters.
pub const CENTIMETERS: f64 = 1.0 / 100.0;

/// All knobs the host exposes for a run. Defaults mirror the import dialog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Output frame rate. 0 means "use the capture's own framerate".
    pub target_fps: f64,
    /// Keyframe the raw capture frame number onto the camera as an extra channel.
    pub include_frame_nums: bool,
    /// First replay frame to process (Lines mode only; Segments mode ignores it).
    pub replay_frame_start: i64,
    /// Last replay frame to process (Lines mode only; Segments mode derives it).
    pub replay_frame_end: i64,
    /// Playback speed multiplier applied to snapshot-derived segment durations.
    pub playback_speed: f64,
    /// Camera sensor width in millimeters.
    pub sensor_width: f64,
    /// Scale the lens so the focal length / sensor width ratio matches a 36mm sensor.
    pub maintain_sensor_focal_ratio: bool,
    /// First frame written to the output timeline.
    pub output_start_frame: i64,
    /// World scale applied to capture locations.
    pub unit_scale: f64,
    /// Log per-frame progress at info level.
    pub print_progress: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            include_frame_nums: true,
            replay_frame_start: 0,
            replay_frame_end: 999_999_999,
            playback_speed: 1.0,
            sensor_width: 35.0,
            maintain_sensor_focal_ratio: false,
            output_start_frame: 1,
            unit_scale: CENTIMETERS,
            print_progress: false,
        }
    }
}
