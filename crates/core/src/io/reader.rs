use std::fs::{self, File};
use std::io::{self, Read};

use crate::buffer::{ByteBuffer, SizeLimits};
use crate::error::{AnalysisError, AnalysisResult};
use crate::io::path::ValidatedPath;

/// Read the file at `path` into a [`ByteBuffer`] respecting `limits`.
///
/// The size is checked from metadata before any content is read, and the read
/// itself is capped one byte past the maximum in case the file grew since.
pub fn read_buffer(path: &ValidatedPath, limits: &SizeLimits) -> AnalysisResult<ByteBuffer> {
    let metadata = fs::metadata(path.as_path()).map_err(|e| open_error(path, &e))?;
    if !metadata.is_file() {
        return Err(AnalysisError::ReadError(format!("{path} is not a regular file")));
    }
    limits.check(metadata.len()).map_err(|e| with_path(path, e))?;

    let file = File::open(path.as_path()).map_err(|e| open_error(path, &e))?;

    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.take(limits.max() as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| read_error(path, &e))?;

    ByteBuffer::with_limits(bytes, limits).map_err(|e| with_path(path, e))
}

/// Only a missing entry is `FileNotFound`; permission and other failures are
/// read errors.
fn open_error(path: &ValidatedPath, err: &io::Error) -> AnalysisError {
    match err.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound(path.to_string()),
        _ => read_error(path, err),
    }
}

fn read_error(path: &ValidatedPath, err: &io::Error) -> AnalysisError {
    AnalysisError::ReadError(format!("failed to read {path}: {err}"))
}

fn with_path(path: &ValidatedPath, err: AnalysisError) -> AnalysisError {
    match err {
        AnalysisError::SizeError(msg) => AnalysisError::SizeError(format!("{path}: {msg}")),
        other => other,
    }
}
