//! heurist CLI library.
//!
//! The binary in `main.rs` is a thin clap wrapper; command implementations and
//! terminal rendering live here so they can be tested in-process.

use std::path::Path;

use anyhow::Result;
use heurist_core::config::AnalyzerConfig;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod output;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "heurist=warn,heurist_core=warn";
const VERBOSE_LOG_FILTER: &str = "heurist=debug,heurist_core=debug";

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between warn and debug.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the analyzer config from `path`, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> Result<AnalyzerConfig> {
    match path {
        Some(p) => AnalyzerConfig::load(Path::new(p)),
        None => Ok(AnalyzerConfig::default()),
    }
}
