//! Capture header block parsing.
//!
//! The first few lines of a capture are `key: value` pairs. Keys are
//! lowercased and trimmed; `framerate`, `frames`, and `cars` coerce to
//! integers. Lines without a colon are skipped; duplicate keys are
//! last-write-wins.

use std::collections::HashMap;

use crate::error::ImportError;

const NUMERIC_KEYS: [&str; 3] = ["framerate", "frames", "cars"];

#[derive(Clone, Debug, PartialEq)]
pub enum HeaderValue {
    Int(i64),
    Text(String),
}

#[derive(Clone, Debug, Default)]
pub struct Header {
    entries: HashMap<String, HeaderValue>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one header line into the map. Malformed lines (no colon, or a
    /// numeric key whose value does not parse) are skipped silently.
    pub fn add_line(&mut self, line: &str) {
        let Some((key, value)) = line.split_once(':') else {
            return;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if NUMERIC_KEYS.contains(&key.as_str()) {
            if let Ok(n) = value.parse::<i64>() {
                self.entries.insert(key, HeaderValue::Int(n));
            }
        } else {
            self.entries.insert(key, HeaderValue::Text(value.to_string()));
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(HeaderValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(HeaderValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn framerate(&self) -> Option<i64> {
        self.int("framerate")
    }

    pub fn frames(&self) -> Option<i64> {
        self.int("frames")
    }

    pub fn cars(&self) -> Option<i64> {
        self.int("cars")
    }

    /// Name for the camera data block, from the `camera` header entry.
    pub fn camera_name(&self) -> &str {
        self.text("camera").unwrap_or("Camera")
    }

    /// `framerate` and `cars` must be present before any record is processed.
    pub fn require_capture_keys(&self) -> Result<(f64, i64), ImportError> {
        let framerate = self
            .framerate()
            .filter(|fps| *fps > 0)
            .ok_or_else(|| ImportError::Config("capture header missing framerate".into()))?;
        let cars = self
            .cars()
            .ok_or_else(|| ImportError::Config("capture header missing cars".into()))?;
        Ok((framerate as f64, cars))
    }
}
