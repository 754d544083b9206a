use anyhow::{Context, Result};
use heurist_core::scan::analyze_file;
use tracing::debug;

use crate::load_config;
use crate::output::render_result;

/// Classify a single file and print the result.
///
/// Boundary failures (missing file, size out of range, invalid path) are
/// returned as-is so the binary prints exactly one error line.
pub fn analyze_command(path: &str, json: bool, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let limits = config.size_limits()?;
    debug!(path, min = limits.min(), max = limits.max(), "analyzing file");

    let result = analyze_file(path, &limits)?;

    if json {
        let serialized = serde_json::to_string_pretty(&result)
            .context("Failed to serialize result to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_result(&result));
    }

    Ok(())
}
