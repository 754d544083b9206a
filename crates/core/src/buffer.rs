//! Owned, size-bounded copy of file content.
//!
//! `ByteBuffer` is the unit every feature extractor reads from. It can only be
//! built through the validating constructors below, so any buffer in hand is
//! guaranteed to respect the size invariant.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Smallest content the pipeline accepts (bytes).
pub const MIN_BUFFER_SIZE: usize = 16;

/// Largest content the pipeline accepts (bytes, 100 MiB).
pub const MAX_BUFFER_SIZE: usize = 100 * 1024 * 1024;

/// Inclusive size window for accepted content.
///
/// Limits may narrow `MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE` but never widen it.
/// The fields are private; every value, deserialized ones included, passes
/// through [`SizeLimits::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSizeLimits")]
pub struct SizeLimits {
    min: usize,
    max: usize,
}

#[derive(Deserialize)]
struct RawSizeLimits {
    min: usize,
    max: usize,
}

impl TryFrom<RawSizeLimits> for SizeLimits {
    type Error = AnalysisError;

    fn try_from(raw: RawSizeLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl SizeLimits {
    pub fn new(min: usize, max: usize) -> AnalysisResult<Self> {
        if min < MIN_BUFFER_SIZE || max > MAX_BUFFER_SIZE || min > max {
            return Err(AnalysisError::ValidationError(format!(
                "size limits {min}..={max} must lie within {MIN_BUFFER_SIZE}..={MAX_BUFFER_SIZE} with min <= max"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Check a length against the window.
    pub fn check(&self, len: u64) -> AnalysisResult<()> {
        if len < self.min as u64 {
            return Err(AnalysisError::SizeError(format!(
                "{len} bytes is below the minimum of {} bytes",
                self.min
            )));
        }
        if len > self.max as u64 {
            return Err(AnalysisError::SizeError(format!(
                "{len} bytes exceeds the maximum of {} bytes",
                self.max
            )));
        }
        Ok(())
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { min: MIN_BUFFER_SIZE, max: MAX_BUFFER_SIZE }
    }
}

/// Immutable, exclusively owned file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Copy `bytes` into a new buffer checked against the default limits.
    pub fn new(bytes: &[u8]) -> AnalysisResult<Self> {
        Self::from_vec(bytes.to_vec())
    }

    /// Take ownership of `bytes`, checked against the default limits.
    pub fn from_vec(bytes: Vec<u8>) -> AnalysisResult<Self> {
        Self::with_limits(bytes, &SizeLimits::default())
    }

    /// Take ownership of `bytes`, checked against `limits`.
    pub fn with_limits(bytes: Vec<u8>, limits: &SizeLimits) -> AnalysisResult<Self> {
        limits.check(bytes.len() as u64)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed buffer; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Leading bytes, or `None` when the buffer is shorter than `n`.
    pub fn prefix(&self, n: usize) -> Option<&[u8]> {
        self.bytes.get(..n)
    }

    /// Give the owned bytes back to the caller.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
