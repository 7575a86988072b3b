//! Capture record tokenizing and typed field access.
//!
//! A record is one whitespace-delimited data line. Tokenizing never
//! validates field count; accessors index by fixed layout offsets and a
//! short line surfaces as a fatal parse error, since it means the capture is
//! corrupt.

use crate::error::ImportError;
use crate::layout::FieldLayout;
use crate::math::round6;

/// First-column sentinel marking the end of the capture stream.
pub const END_SENTINEL: &str = "END";

/// One immutable data line, split into fields.
#[derive(Clone, Debug)]
pub struct Record {
    fields: Vec<String>,
    line_no: usize,
}

impl Record {
    pub fn tokenize(line: &str, line_no: usize) -> Record {
        Record {
            fields: line.split_whitespace().map(str::to_string).collect(),
            line_no,
        }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn field(&self, idx: usize) -> Result<&str, ImportError> {
        self.fields.get(idx).map(String::as_str).ok_or_else(|| {
            ImportError::Parse(format!(
                "line {}: missing field {} ({} present)",
                self.line_no,
                idx,
                self.fields.len()
            ))
        })
    }

    pub fn is_end(&self, layout: &FieldLayout) -> bool {
        matches!(self.fields.get(layout.frame), Some(f) if f == END_SENTINEL)
    }

    /// Capture frame number from column 0.
    pub fn frame_number(&self, layout: &FieldLayout) -> Result<f64, ImportError> {
        self.parse_f64(layout.frame)
    }

    /// Capture-native ("replay") frame index.
    pub fn replay_frame(&self, layout: &FieldLayout) -> Result<i64, ImportError> {
        let raw = self.field(layout.replay_frame)?;
        raw.parse::<i64>().map_err(|_| {
            ImportError::Parse(format!(
                "line {}: replay frame '{raw}' is not an integer",
                self.line_no
            ))
        })
    }

    pub fn fov_degrees(&self, layout: &FieldLayout) -> Result<f64, ImportError> {
        self.parse_f64(layout.fov)
    }

    /// Comma-joined `(x,y,z)` triple, rounded to keyframe precision.
    pub fn location(&self, idx: usize) -> Result<[f64; 3], ImportError> {
        let parts = self.parse_tuple::<3>(idx)?;
        Ok(parts)
    }

    /// Comma-joined `(x,y,z,w)` quaternion in capture packing order.
    pub fn quaternion(&self, idx: usize) -> Result<[f64; 4], ImportError> {
        let parts = self.parse_tuple::<4>(idx)?;
        Ok(parts)
    }

    fn parse_f64(&self, idx: usize) -> Result<f64, ImportError> {
        let raw = self.field(idx)?;
        raw.parse::<f64>().map_err(|_| {
            ImportError::Parse(format!(
                "line {}: field {idx} '{raw}' is not numeric",
                self.line_no
            ))
        })
    }

    fn parse_tuple<const N: usize>(&self, idx: usize) -> Result<[f64; N], ImportError> {
        let raw = self.field(idx)?;
        let mut out = [0.0; N];
        let mut parts = raw.split(',');
        for slot in out.iter_mut() {
            let part = parts.next().ok_or_else(|| {
                ImportError::Parse(format!(
                    "line {}: field {idx} '{raw}' has fewer than {N} components",
                    self.line_no
                ))
            })?;
            *slot = round6(part.trim().parse::<f64>().map_err(|_| {
                ImportError::Parse(format!(
                    "line {}: field {idx} component '{part}' is not numeric",
                    self.line_no
                ))
            })?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "12 7 88.5 1.0,2.0,3.0 0.0,0.0,0.0,1.0";

    #[test]
    fn tokenizes_fixed_columns() {
        let layout = FieldLayout::default();
        let rec = Record::tokenize(LINE, 16);
        assert_eq!(rec.frame_number(&layout).unwrap(), 12.0);
        assert_eq!(rec.replay_frame(&layout).unwrap(), 7);
        assert_eq!(rec.fov_degrees(&layout).unwrap(), 88.5);
        assert_eq!(rec.location(3).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(rec.quaternion(4).unwrap(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn short_line_is_a_parse_error() {
        let rec = Record::tokenize("12 7", 20);
        let err = rec.field(5).unwrap_err();
        assert!(err.to_string().contains("line 20"));
    }

    #[test]
    fn end_sentinel() {
        let layout = FieldLayout::default();
        assert!(Record::tokenize("END", 99).is_end(&layout));
        assert!(!Record::tokenize("12 7", 99).is_end(&layout));
    }

    #[test]
    fn short_tuple_is_a_parse_error() {
        let rec = Record::tokenize("12 7 88.5 1.0,2.0", 16);
        assert!(rec.location(3).is_err());
    }
}
