use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use heurist_core::scan::{scan_directory, ScanFailure, ScanOptions, ScanReport};
use heurist_core::{ClassificationResult, ThreatLevel};
use serde::Serialize;
use tracing::debug;

use crate::load_config;
use crate::output::render_scan;

/// JSON shape of a directory scan.
#[derive(Debug, Serialize)]
pub struct ScanSummary<'a> {
    pub generated_at: String,
    pub root: &'a Path,
    pub files_classified: usize,
    pub error_count: usize,
    pub level_counts: BTreeMap<ThreatLevel, usize>,
    pub results: &'a [ClassificationResult],
    pub failures: &'a [ScanFailure],
}

impl<'a> ScanSummary<'a> {
    pub fn new(report: &'a ScanReport) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            root: &report.root,
            files_classified: report.results.len(),
            error_count: report.error_count(),
            level_counts: report.level_counts(),
            results: &report.results,
            failures: &report.failures,
        }
    }
}

/// Scan a directory tree and print per-file results plus a summary.
///
/// Per-file failures never fail the command; only a bad root does.
pub fn scan_command(
    root: &str,
    max_depth: Option<i32>,
    json: bool,
    show_errors: bool,
    config: Option<&str>,
) -> Result<ScanReport> {
    let config = load_config(config)?;
    let mut options = ScanOptions::from_config(&config)?;
    if let Some(depth) = max_depth {
        options = options.with_max_depth(depth);
    }

    debug!(root, ?options, "starting scan");
    let report = scan_directory(root, &options)?;

    if json {
        let serialized = serde_json::to_string_pretty(&ScanSummary::new(&report))
            .context("Failed to serialize scan report to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_scan(&report, show_errors));
    }

    Ok(report)
}
