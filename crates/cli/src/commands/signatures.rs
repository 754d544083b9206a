use anyhow::{Context, Result};
use heurist_core::analysis::signatures::{SignatureEntry, SIGNATURES, SUSPICIOUS_PATTERNS};
use serde::Serialize;

use crate::output::render_signatures;

#[derive(Debug, Serialize)]
pub struct SignatureTables {
    pub signatures: &'static [SignatureEntry],
    pub suspicious_patterns: &'static [&'static str],
}

/// List the built-in signature and suspicious-pattern tables.
pub fn signatures_command(json: bool) -> Result<()> {
    if json {
        let tables = SignatureTables { signatures: SIGNATURES, suspicious_patterns: SUSPICIOUS_PATTERNS };
        let serialized =
            serde_json::to_string_pretty(&tables).context("Failed to serialize signature tables")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_signatures());
    }
    Ok(())
}
