use anyhow::Result;
use clap::{Parser, Subcommand};
use heurist::commands::{analyze_command, scan_command, signatures_command};
use heurist::init_logging;

/// Static heuristic triage of potentially malicious files.
///
/// This CLI is a thin wrapper around `heurist-core` (exposed in code as
/// `heurist_core`). All classification logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "heurist",
    version,
    about = "Static heuristic malware triage",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single file.
    ///
    /// Prints file type, entropy, family guess, confidence and threat level.
    /// Exits non-zero if the file cannot be read or is out of size bounds.
    Analyze {
        /// Path to the file to classify.
        #[arg(long)]
        path: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional analyzer config (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<String>,
    },

    /// Classify every regular file under a directory.
    ///
    /// Files that cannot be analyzed are skipped and counted; the scan itself
    /// only fails if the root directory is unusable.
    Scan {
        /// Root directory to scan.
        #[arg(long)]
        path: String,

        /// Maximum directory depth to descend into (0 = root files only).
        /// Defaults to the config value.
        #[arg(long, allow_negative_numbers = true)]
        max_depth: Option<i32>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// List each skipped file and the reason.
        #[arg(long, default_value_t = false)]
        show_errors: bool,

        /// Optional analyzer config (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<String>,
    },

    /// List the built-in signature and suspicious-pattern tables.
    Signatures {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        None => {
            println!("heurist v{}", heurist_core::version());
            println!("Run `heurist --help` for usage.");
        }
        Some(Command::Analyze { path, json, config }) => {
            analyze_command(&path, json, config.as_deref())?
        }
        Some(Command::Scan { path, max_depth, json, show_errors, config }) => {
            scan_command(&path, max_depth, json, show_errors, config.as_deref())?;
        }
        Some(Command::Signatures { json }) => signatures_command(json)?,
    }

    Ok(())
}
