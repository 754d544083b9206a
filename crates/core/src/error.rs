use serde::Serialize;
use thiserror::Error;

/// Failures raised at the read/validation boundary.
///
/// The classification pipeline itself cannot fail; every variant here comes
/// from validating a path or reading a file before analysis starts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Read error: {0}")]
    ReadError(String),

    #[error("Size error: {0}")]
    SizeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AnalysisError {
    /// Stable label for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::FileNotFound(_) => "file_not_found",
            AnalysisError::ReadError(_) => "read_error",
            AnalysisError::SizeError(_) => "size_error",
            AnalysisError::ValidationError(_) => "validation_error",
            AnalysisError::InternalError(_) => "internal_error",
        }
    }

    /// The descriptive message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AnalysisError::FileNotFound(m)
            | AnalysisError::ReadError(m)
            | AnalysisError::SizeError(m)
            | AnalysisError::ValidationError(m)
            | AnalysisError::InternalError(m) => m,
        }
    }
}

/// Convenience result type for boundary operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
