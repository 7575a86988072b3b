//! Capture file layout descriptor.
//!
//! Column offsets and the header/data line boundaries are fixed by the
//! exporter but kept injectable: the tokenizer, emitter, and processor all
//! take a `FieldLayout` explicitly instead of reading a shared global.

/// Field layout of one whitespace-delimited capture record, plus the 1-based
/// line numbers where the header ends and record data begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Column 0: capture frame number, or the `END` sentinel.
    pub frame: usize,
    /// Column 1: capture-native ("replay") frame index.
    pub replay_frame: usize,
    /// Column 2: camera field of view in degrees.
    pub fov: usize,
    pub camera_loc: usize,
    pub camera_quat: usize,
    pub ball_loc: usize,
    pub ball_quat: usize,
    /// Column of the first car's location; each car occupies `car_stride` columns.
    pub car_base: usize,
    pub car_stride: usize,
    /// Header key/value lines occupy lines `1..header_end`.
    pub header_end: usize,
    /// Record data begins at this line; everything before it (past the header)
    /// is ignored filler.
    pub data_line_start: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            frame: 0,
            replay_frame: 1,
            fov: 2,
            camera_loc: 3,
            camera_quat: 4,
            ball_loc: 5,
            ball_quat: 6,
            car_base: 8,
            car_stride: 3,
            header_end: 7,
            data_line_start: 16,
        }
    }
}

impl FieldLayout {
    pub fn car_loc(&self, slot: usize) -> usize {
        self.car_base + slot * self.car_stride
    }

    pub fn car_quat(&self, slot: usize) -> usize {
        self.car_loc(slot) + 1
    }
}
