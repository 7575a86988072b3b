//! Cinematics Buddy import core (host-agnostic).
//!
//! Converts a line-oriented replay capture (camera, ball, up to eight cars
//! per real frame) into a continuous keyframe timeline at an arbitrary
//! target frame rate, either by direct linear resampling or driven by an
//! external list of time-anchored snapshots (speed ramping). Keyframes are
//! delivered to a host-supplied [`sink::KeyframeSink`]; the core never
//! touches the host's scene model.

pub mod config;
pub mod continuity;
pub mod emitter;
pub mod error;
pub mod header;
pub mod kinds;
pub mod layout;
pub mod math;
pub mod processor;
pub mod record;
pub mod segment;
pub mod sink;
pub mod snapshots;

// Re-exports for consumers (host adapters)
pub use config::ImportConfig;
pub use continuity::ContinuityFilter;
pub use error::ImportError;
pub use header::Header;
pub use kinds::{ObjectKind, ProxyKind, MAX_CARS};
pub use layout::FieldLayout;
pub use math::{round6, Quat};
pub use processor::{Processor, RunSummary};
pub use record::{Record, END_SENTINEL};
pub use segment::{build_segments, Segment};
pub use sink::{CameraSpec, KeyField, KeyframeSink, ObjectHandle, ObjectSpec};
pub use snapshots::{load_snapshots, parse_snapshots, Snapshot};
