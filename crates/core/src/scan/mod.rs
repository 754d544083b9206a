//! Single-file and directory-tree entry points.
//!
//! `analyze_file` runs the full boundary (validate, read, classify) for one
//! path. `scan_directory` walks a tree with an explicit work stack and calls
//! the same per-file path for every regular file it finds. A failing entry is
//! recorded and skipped; it never aborts the scan.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::classify;
use crate::buffer::SizeLimits;
use crate::config::{AnalyzerConfig, DEFAULT_MAX_DEPTH};
use crate::error::{AnalysisError, AnalysisResult};
use crate::io::{read_buffer, ValidatedPath};
use crate::model::{ClassificationResult, ThreatLevel};

/// Knobs for a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest directory level to descend into. `0` (or less) classifies only
    /// the files directly under the root.
    pub max_depth: i32,
    pub include_hidden: bool,
    pub limits: SizeLimits,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, include_hidden: true, limits: SizeLimits::default() }
    }
}

impl ScanOptions {
    pub fn from_config(config: &AnalyzerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            max_depth: config.max_depth,
            include_hidden: config.include_hidden,
            limits: config.size_limits()?,
        })
    }

    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// A file (or directory) that could not be analyzed during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: AnalysisError,
}

/// Everything a directory scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub results: Vec<ClassificationResult>,
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of results at each threat level; every level is present.
    pub fn level_counts(&self) -> BTreeMap<ThreatLevel, usize> {
        let mut counts: BTreeMap<ThreatLevel, usize> =
            ThreatLevel::ALL.iter().map(|level| (*level, 0)).collect();
        for result in &self.results {
            *counts.entry(result.threat_level).or_insert(0) += 1;
        }
        counts
    }

    /// Results above `Clean`.
    pub fn flagged(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter().filter(|r| r.is_flagged())
    }
}

/// Validate, read and classify a single file.
pub fn analyze_file(raw_path: &str, limits: &SizeLimits) -> AnalysisResult<ClassificationResult> {
    let path = ValidatedPath::new(raw_path)?;
    analyze_validated(&path, limits)
}

fn analyze_validated(
    path: &ValidatedPath,
    limits: &SizeLimits,
) -> AnalysisResult<ClassificationResult> {
    let buffer = read_buffer(path, limits)?;
    Ok(classify(path.as_path(), &buffer))
}

/// Classify every regular file under `root`, down to `options.max_depth`.
///
/// Only a bad root is an error. Per-entry problems (invalid path, unreadable
/// file or directory, size outside the limits) land in
/// [`ScanReport::failures`]. Entries are visited in file-name order and
/// symbolic links are never followed.
pub fn scan_directory(root: &str, options: &ScanOptions) -> AnalysisResult<ScanReport> {
    let root = ValidatedPath::new(root)?;
    if !root.exists() {
        return Err(AnalysisError::FileNotFound(root.to_string()));
    }
    if !root.as_path().is_dir() {
        return Err(AnalysisError::ValidationError(format!("{root} is not a directory")));
    }

    let mut report =
        ScanReport { root: root.as_path().to_path_buf(), results: Vec::new(), failures: Vec::new() };
    let mut stack: Vec<(PathBuf, i32)> = vec![(root.as_path().to_path_buf(), 0)];

    while let Some((dir, depth)) = stack.pop() {
        let entries = match sorted_entries(&dir, &mut report.failures) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %dir.display(), %error, "skipping unreadable directory");
                report.failures.push(ScanFailure { path: dir, error });
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for (path, file_type) in entries {
            if !options.include_hidden && is_hidden(&path) {
                continue;
            }
            if file_type.is_dir() {
                if depth < options.max_depth {
                    subdirs.push((path, depth + 1));
                } else {
                    debug!(path = %path.display(), depth, "depth limit reached; not descending");
                }
            } else if file_type.is_file() {
                match ValidatedPath::from_path(&path)
                    .and_then(|valid| analyze_validated(&valid, &options.limits))
                {
                    Ok(result) => report.results.push(result),
                    Err(error) => {
                        warn!(path = %path.display(), %error, "skipping file");
                        report.failures.push(ScanFailure { path, error });
                    }
                }
            } else {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
        }

        // Reverse so the first subdirectory by name is popped first.
        stack.extend(subdirs.into_iter().rev());
    }

    info!(
        root = %report.root.display(),
        classified = report.results.len(),
        errors = report.error_count(),
        "scan complete"
    );
    Ok(report)
}

fn sorted_entries(
    dir: &Path,
    failures: &mut Vec<ScanFailure>,
) -> AnalysisResult<Vec<(PathBuf, fs::FileType)>> {
    let listing = fs::read_dir(dir).map_err(|e| {
        AnalysisError::ReadError(format!("failed to list {}: {e}", dir.display()))
    })?;
    let listing = listing.map(|entry| {
        entry.map(|entry| {
            let file_type = entry.file_type();
            (entry.path(), file_type)
        })
    });
    Ok(collect_entries(dir, listing, failures))
}

/// Keep the readable entries of one listing, sorted by file name.
///
/// An entry that cannot be read or typed becomes a failure of its own; the
/// rest of the directory is still returned.
fn collect_entries<T>(
    dir: &Path,
    listing: impl IntoIterator<Item = io::Result<(PathBuf, io::Result<T>)>>,
    failures: &mut Vec<ScanFailure>,
) -> Vec<(PathBuf, T)> {
    let mut entries = Vec::new();
    for item in listing {
        let (path, error) = match item {
            Ok((path, Ok(kind))) => {
                entries.push((path, kind));
                continue;
            }
            Ok((path, Err(e))) => {
                let error =
                    AnalysisError::ReadError(format!("failed to stat {}: {e}", path.display()));
                (path, error)
            }
            Err(e) => {
                let error = AnalysisError::ReadError(format!(
                    "failed to read an entry of {}: {e}",
                    dir.display()
                ));
                (dir.to_path_buf(), error)
            }
        };
        warn!(path = %path.display(), %error, "skipping unreadable entry");
        failures.push(ScanFailure { path, error });
    }
    entries.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    entries
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.'))
}
