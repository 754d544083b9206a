use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// Longest accepted path, in characters.
pub const MAX_PATH_LEN: usize = 4096;

/// Characters that have no business in a path handed to the analyzer.
const FORBIDDEN_CHARS: &[char] = &['\0', ';', '|', '`', '$'];

/// A path string that passed validation.
///
/// Only [`ValidatedPath::new`] builds one: non-empty, at most
/// [`MAX_PATH_LEN`] characters, no `..` sequence, no NUL byte and no shell
/// metacharacters (`;`, `|`, backtick, `$`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedPath(String);

impl ValidatedPath {
    pub fn new(raw: &str) -> AnalysisResult<Self> {
        if raw.is_empty() {
            return Err(AnalysisError::ValidationError("path is empty".into()));
        }
        let len = raw.chars().count();
        if len > MAX_PATH_LEN {
            return Err(AnalysisError::ValidationError(format!(
                "path is {len} characters long; the limit is {MAX_PATH_LEN}"
            )));
        }
        if raw.contains("..") {
            return Err(AnalysisError::ValidationError(format!(
                "path contains a traversal sequence: {raw}"
            )));
        }
        if let Some(c) = raw.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(AnalysisError::ValidationError(format!(
                "path contains forbidden character {c:?}: {}",
                raw.escape_debug()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Validate a filesystem path; non UTF-8 paths are rejected.
    pub fn from_path(path: &Path) -> AnalysisResult<Self> {
        let raw = path.to_str().ok_or_else(|| {
            AnalysisError::ValidationError(format!(
                "path is not valid UTF-8: {}",
                path.to_string_lossy()
            ))
        })?;
        Self::new(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Whether anything exists at this path.
    pub fn exists(&self) -> bool {
        exists(self)
    }
}

impl AsRef<Path> for ValidatedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for ValidatedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether anything exists at `path` (broken symlinks count as absent).
pub fn exists(path: &ValidatedPath) -> bool {
    path.as_path().exists()
}
