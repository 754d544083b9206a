//! Terminal rendering for classification results and scan reports.

use std::fmt::Write;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use heurist_core::analysis::signatures::{SIGNATURES, SUSPICIOUS_PATTERNS};
use heurist_core::scan::ScanReport;
use heurist_core::{ClassificationResult, MalwareFamily, ThreatLevel};

/// Threat level label, padded to `width` and colored by severity.
pub fn level_label(level: ThreatLevel, width: usize) -> ColoredString {
    let text = format!("{:<width$}", level.as_str());
    match level {
        ThreatLevel::Critical => text.bright_red().bold(),
        ThreatLevel::High => text.red(),
        ThreatLevel::Medium => text.yellow(),
        ThreatLevel::Low => text.cyan(),
        ThreatLevel::Clean => text.green(),
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

/// Multi-line report for a single file.
pub fn render_result(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let family = match result.family {
        MalwareFamily::Unknown => result.family.as_str().normal(),
        _ => result.family.as_str().bright_red().bold(),
    };

    let _ = writeln!(out, "File:        {}", result.path.display());
    let _ = writeln!(out, "Type:        {}", result.file_type);
    let _ = writeln!(out, "Size:        {} bytes", result.size_bytes);
    let _ = writeln!(out, "SHA-256:     {}", result.sha256);
    let _ = writeln!(out, "Entropy:     {:.3} bits/byte", result.entropy);
    let _ = writeln!(out, "Family:      {} (confidence {:.0}%)", family, result.confidence * 100.0);
    let _ = writeln!(
        out,
        "Threat:      {} (score {})",
        level_label(result.threat_level, 0),
        result.threat_score
    );
    let _ = writeln!(out, "Signatures:  {}", join_or_none(&result.matched_signatures));
    let _ = writeln!(out, "Suspicious:  {}", join_or_none(&result.suspicious_matches));
    let _ = writeln!(out, "Elapsed:     {}", format_elapsed(result.elapsed));
    out
}

/// One line per classified file, for directory scans.
pub fn render_result_line(result: &ClassificationResult) -> String {
    format!(
        "[{}] {:<11} {:<8} {}",
        level_label(result.threat_level, 8),
        result.family.as_str(),
        result.file_type.as_str(),
        result.path.display()
    )
}

/// Full scan report: per-file lines, then a summary.
pub fn render_scan(report: &ScanReport, show_errors: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scan of {}", report.root.display());
    for result in &report.results {
        let _ = writeln!(out, "  {}", render_result_line(result));
    }
    if report.results.is_empty() {
        let _ = writeln!(out, "  (no files classified)");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  Files classified: {}", report.results.len());
    for (level, count) in report.level_counts().iter().rev() {
        let _ = writeln!(out, "  {}: {}", level_label(*level, 8), count);
    }
    let _ = writeln!(out, "  Errors: {}", report.error_count());

    if show_errors {
        for failure in &report.failures {
            let _ = writeln!(out, "    - {}: {}", failure.path.display(), failure.error);
        }
    } else if report.error_count() > 0 {
        let _ = writeln!(out, "  (use --show-errors for details)");
    }
    out
}

/// Signature and suspicious-pattern tables.
pub fn render_signatures() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Signatures ({}):", SIGNATURES.len());
    for entry in SIGNATURES {
        let _ = writeln!(out, "  - {:<32} {:<12} {:.2}", entry.keyword, entry.family.as_str(), entry.weight);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Suspicious patterns ({}):", SUSPICIOUS_PATTERNS.len());
    for pattern in SUSPICIOUS_PATTERNS {
        let _ = writeln!(out, "  - {}", pattern);
    }
    out
}
