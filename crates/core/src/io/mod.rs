//! Read/validation boundary in front of the classification pipeline.
//!
//! - `path`: `ValidatedPath`, a path string that passed safety checks.
//! - `reader`: bounded reading of a validated path into a `ByteBuffer`.

pub mod path;
pub mod reader;

pub use path::{exists, ValidatedPath, MAX_PATH_LEN};
pub use reader::read_buffer;
