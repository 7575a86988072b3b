//! File processing orchestration.
//!
//! Streams a capture file line by line through three phases: reading the
//! header block, reading data records, terminated. Data records are mapped
//! to output sub-frames by one of two resampling modes:
//!
//! - **Lines**: sub-frame = processed-line index x (target fps / capture fps).
//! - **Segments**: snapshot anchors partition the capture into segments; each
//!   segment's lines are accumulated and redistributed over the segment's
//!   output duration once its upper bound is reached. The time a capture
//!   frame should occupy is only known at the next snapshot boundary, so the
//!   flush cannot happen line by line.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ImportConfig;
use crate::emitter::Emitter;
use crate::error::ImportError;
use crate::header::Header;
use crate::layout::FieldLayout;
use crate::record::Record;
use crate::segment::{build_segments, Segment};
use crate::sink::KeyframeSink;
use crate::snapshots::{load_snapshots, Snapshot};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    ReadingHeader,
    ReadingData,
    Terminated,
}

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Output animation range `[start, ceil(highest sub-frame)]`, or `None`
    /// when no object ever emitted a sub-frame.
    pub frame_range: Option<(i64, i64)>,
    /// Data records that were resampled (window-filtered lines excluded).
    pub frames_processed: u64,
}

#[derive(Debug, Default)]
struct LinesState {
    subframe_scale: f64,
}

#[derive(Debug)]
struct SegmentsState {
    snapshots: Vec<Snapshot>,
    segments: Vec<Segment>,
    cursor: usize,
    pending: Vec<Record>,
    target_fps: f64,
}

#[derive(Debug)]
enum Mode {
    Lines(LinesState),
    Segments(SegmentsState),
}

#[derive(Debug)]
pub struct Processor {
    cfg: ImportConfig,
    layout: FieldLayout,
    mode: Mode,
    replay_frame_start: i64,
    replay_frame_end: i64,
}

impl Processor {
    /// Direct linear resampling over the configured replay-frame window.
    pub fn lines(cfg: ImportConfig) -> Processor {
        let (start, end) = (cfg.replay_frame_start, cfg.replay_frame_end);
        Processor {
            cfg,
            layout: FieldLayout::default(),
            mode: Mode::Lines(LinesState::default()),
            replay_frame_start: start,
            replay_frame_end: end,
        }
    }

    /// Snapshot-driven segment resampling. The replay-frame window is forced
    /// open; the synthetic trailing segment sets the effective end bound.
    pub fn segments(cfg: ImportConfig, snapshots: Vec<Snapshot>) -> Result<Processor, ImportError> {
        if snapshots.is_empty() {
            return Err(ImportError::Config("no snapshots supplied".into()));
        }
        Ok(Processor {
            cfg,
            layout: FieldLayout::default(),
            mode: Mode::Segments(SegmentsState {
                snapshots,
                segments: Vec::new(),
                cursor: 0,
                pending: Vec::new(),
                target_fps: 0.0,
            }),
            replay_frame_start: 0,
            replay_frame_end: i64::MAX,
        })
    }

    pub fn segments_from_file(cfg: ImportConfig, path: &Path) -> Result<Processor, ImportError> {
        let snapshots = load_snapshots(path)?;
        Processor::segments(cfg, snapshots)
    }

    pub fn with_layout(mut self, layout: FieldLayout) -> Processor {
        self.layout = layout;
        self
    }

    pub fn run_file<S: KeyframeSink>(
        self,
        path: &Path,
        sink: &mut S,
    ) -> Result<RunSummary, ImportError> {
        let file = File::open(path).map_err(|e| {
            ImportError::Config(format!("unable to read capture file {}: {e}", path.display()))
        })?;
        self.run(BufReader::new(file), sink)
    }

    /// Process the whole capture. Single pass, forward only.
    pub fn run<R: BufRead, S: KeyframeSink>(
        mut self,
        reader: R,
        sink: &mut S,
    ) -> Result<RunSummary, ImportError> {
        let mut emitter = Emitter::new(self.cfg.clone(), self.layout.clone());
        let mut header = Header::new();
        let mut phase = Phase::ReadingHeader;
        let mut frame: i64 = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| ImportError::Parse(format!("capture read failed: {e}")))?;
            let line_no = idx + 1;
            if line_no < self.layout.data_line_start {
                if line_no < self.layout.header_end {
                    header.add_line(&line);
                }
                continue;
            }
            if phase == Phase::ReadingHeader {
                self.begin_data(&header)?;
                phase = Phase::ReadingData;
            }

            let record = Record::tokenize(&line, line_no);
            if record.is_end(&self.layout) {
                self.finish(&header, &mut emitter, sink)?;
                phase = Phase::Terminated;
                break;
            }
            let replay_frame = record.replay_frame(&self.layout)?;
            if replay_frame > self.replay_frame_end {
                self.finish(&header, &mut emitter, sink)?;
                phase = Phase::Terminated;
                break;
            }
            if replay_frame < self.replay_frame_start {
                continue;
            }
            if self.cfg.print_progress {
                log::info!(
                    "processing replay frame {replay_frame} / {}",
                    self.replay_frame_end
                );
            }
            self.process_record(record, frame, &header, &mut emitter, sink)?;
            frame += 1;
        }

        // EOF without the END sentinel still flushes the tail.
        if phase == Phase::ReadingData {
            self.finish(&header, &mut emitter, sink)?;
        }

        let frame_range = emitter
            .highest_subframe()
            .map(|highest| (self.cfg.output_start_frame, highest.ceil() as i64));
        Ok(RunSummary {
            frame_range,
            frames_processed: frame as u64,
        })
    }

    /// Header block is complete: enforce required keys and do per-mode setup.
    fn begin_data(&mut self, header: &Header) -> Result<(), ImportError> {
        let (capture_fps, _cars) = header.require_capture_keys()?;
        let target_fps = effective_fps(self.cfg.target_fps, capture_fps);
        match &mut self.mode {
            Mode::Lines(state) => {
                state.subframe_scale = target_fps / capture_fps;
            }
            Mode::Segments(state) => {
                state.target_fps = target_fps;
                state.segments =
                    build_segments(&state.snapshots, self.cfg.playback_speed, target_fps);
                // The trailing segment's upper bound is the effective end of
                // processing, overriding any requested window.
                if let Some(last) = state.segments.last() {
                    self.replay_frame_end = last.out_frame - 1;
                }
            }
        }
        Ok(())
    }

    fn process_record<S: KeyframeSink>(
        &mut self,
        record: Record,
        frame: i64,
        header: &Header,
        emitter: &mut Emitter,
        sink: &mut S,
    ) -> Result<(), ImportError> {
        match &mut self.mode {
            Mode::Lines(state) => {
                let subframe = frame as f64 * state.subframe_scale;
                emitter.emit_record(sink, header, &record, subframe)
            }
            Mode::Segments(state) => {
                let replay_frame = record.replay_frame(&self.layout)?;
                // Flush and advance until the record's frame fits the current
                // segment; a record is never dropped.
                while let Some(segment) = state.segments.get(state.cursor) {
                    if replay_frame < segment.out_frame {
                        break;
                    }
                    flush_segment(
                        segment,
                        &state.pending,
                        &self.layout,
                        state.target_fps,
                        header,
                        emitter,
                        sink,
                    )?;
                    state.pending.clear();
                    state.cursor += 1;
                }
                if let Some(segment) = state.segments.get(state.cursor) {
                    if replay_frame >= segment.start_frame {
                        state.pending.push(record);
                    }
                }
                Ok(())
            }
        }
    }

    /// Termination: flush whatever the current segment accumulated.
    fn finish<S: KeyframeSink>(
        &mut self,
        header: &Header,
        emitter: &mut Emitter,
        sink: &mut S,
    ) -> Result<(), ImportError> {
        if let Mode::Segments(state) = &mut self.mode {
            if let Some(segment) = state.segments.get(state.cursor) {
                flush_segment(
                    segment,
                    &state.pending,
                    &self.layout,
                    state.target_fps,
                    header,
                    emitter,
                    sink,
                )?;
                state.pending.clear();
            }
        }
        Ok(())
    }
}

fn effective_fps(target_fps: f64, capture_fps: f64) -> f64 {
    if target_fps > 0.0 {
        target_fps
    } else {
        capture_fps
    }
}

/// Redistribute a segment's accumulated records over its output duration.
///
/// Records are grouped by integer capture frame (encounter order preserved
/// within a group); the duration is split evenly across the nominally covered
/// frames, and each present frame's slice is further split evenly among its
/// replay-frame captures. Frames with no data simply absorb their slice.
/// Monotonicity of sub-frames and capture frame numbers is advisory only:
/// floating-point segment boundaries can produce marginal inversions, which
/// are logged and used as-is.
fn flush_segment<S: KeyframeSink>(
    segment: &Segment,
    pending: &[Record],
    layout: &FieldLayout,
    target_fps: f64,
    header: &Header,
    emitter: &mut Emitter,
    sink: &mut S,
) -> Result<(), ImportError> {
    if pending.is_empty() {
        return Ok(());
    }
    log::debug!(
        "flushing segment [{}, {}) with {} lines over {:.6}s",
        segment.start_frame,
        segment.out_frame,
        pending.len(),
        segment.duration
    );

    let mut parts: HashMap<i64, Vec<&Record>> = HashMap::new();
    for record in pending {
        parts
            .entry(record.replay_frame(layout)?)
            .or_default()
            .push(record);
    }

    let expected = segment.expected_frames().max(1);
    let part_duration = segment.duration / expected as f64;
    let mut prev_subframe = 0.0_f64;
    let mut prev_frame_number = 0.0_f64;

    for e in 0..expected {
        let Some(group) = parts.get(&(segment.start_frame + e)) else {
            continue;
        };
        let replay_frame_duration = part_duration / group.len() as f64;
        for (r, record) in group.iter().enumerate() {
            let subframe = (segment.start_time
                + e as f64 * part_duration
                + r as f64 * replay_frame_duration)
                * target_fps;
            if subframe < prev_subframe {
                log::warn!("sub-frame {subframe} less than previous {prev_subframe}");
            }
            prev_subframe = subframe;

            let frame_number = record.frame_number(layout)?;
            if frame_number < prev_frame_number {
                log::warn!(
                    "capture frame {frame_number} less than previous {prev_frame_number}"
                );
            }
            prev_frame_number = frame_number;

            emitter.emit_record(sink, header, record, subframe)?;
        }
    }
    Ok(())
}
