//! Snapshot (timing anchor) loading.
//!
//! A snapshot file is a JSON object whose values carry at least `frame` and
//! `timestamp`. Entries are processed in JSON-key string order; after
//! ordering, frames and timestamps must be strictly increasing or the set is
//! rejected before any resampling begins.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

/// One externally authored timing anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Capture-native frame the anchor points at.
    pub frame: i64,
    /// Wall-clock timestamp in seconds.
    pub timestamp: f64,
}

/// Parse snapshot JSON text into an ordered, validated anchor list.
pub fn parse_snapshots(text: &str) -> Result<Vec<Snapshot>, ImportError> {
    // BTreeMap keys iterate in string order, matching the file's sort key.
    let entries: BTreeMap<String, Snapshot> = serde_json::from_str(text)
        .map_err(|e| ImportError::Config(format!("unable to parse snapshot data: {e}")))?;
    let snapshots: Vec<Snapshot> = entries.into_values().collect();
    if snapshots.is_empty() {
        return Err(ImportError::Config("no snapshots in file".into()));
    }
    for pair in snapshots.windows(2) {
        if pair[1].frame <= pair[0].frame || pair[1].timestamp <= pair[0].timestamp {
            return Err(ImportError::Config(format!(
                "snapshot entries must strictly increase in frame and timestamp \
                 (frame {} at {}s follows frame {} at {}s)",
                pair[1].frame, pair[1].timestamp, pair[0].frame, pair[0].timestamp
            )));
        }
    }
    Ok(snapshots)
}

/// Read and parse a snapshot file.
pub fn load_snapshots(path: &Path) -> Result<Vec<Snapshot>, ImportError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ImportError::Config(format!(
            "unable to read snapshot file {}: {e}",
            path.display()
        ))
    })?;
    parse_snapshots(&text)
}
