//! heurist-core
//!
//! Core library for static heuristic triage of potentially malicious files.
//!
//! This crate owns the whole classification pipeline (entropy, format
//! sniffing, signature matching, score aggregation) together with the
//! boundary pieces that feed it: validated paths, bounded file reading,
//! configuration, and directory scanning.
//!
//! Frontends (the `heurist` CLI) only parse arguments and render results.

pub mod analysis;
pub mod buffer;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod scan;

pub use analysis::classify;
pub use buffer::{ByteBuffer, SizeLimits};
pub use error::{AnalysisError, AnalysisResult};
pub use model::{ClassificationResult, FileType, MalwareFamily, ThreatLevel};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
