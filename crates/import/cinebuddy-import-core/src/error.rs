//! Error taxonomy for the importer.
//!
//! Two fatal classes only: bad configuration inputs (snapshot file, missing
//! required header keys) reported before or at the start of resampling, and
//! corrupt capture data, which aborts the run. Non-fatal continuity
//! advisories go through `log::warn!` instead (see processor.rs).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Bad or missing configuration input (snapshot file, required headers).
    #[error("config error: {0}")]
    Config(String),
    /// Corrupt capture data; the run cannot be safely resampled.
    #[error("capture parse error: {0}")]
    Parse(String),
}
