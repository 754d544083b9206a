//! Core data model for classification outcomes.
//!
//! The three closed variant sets (family, file type, threat level) are plain
//! enums matched exhaustively wherever they are consumed. `ClassificationResult`
//! is the value record produced once per analyzed file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Malware family guessed from signature votes.
///
/// Declaration order is significant: it is the tie-break order used when two
/// families accumulate the same signature weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalwareFamily {
    Trojan,
    Ransomware,
    Spyware,
    Rootkit,
    Worm,
    Backdoor,
    Cryptominer,
    BotClient,
    Dropper,
    Unknown,
}

impl MalwareFamily {
    /// Every family, in declaration order.
    pub const ALL: [MalwareFamily; 10] = [
        MalwareFamily::Trojan,
        MalwareFamily::Ransomware,
        MalwareFamily::Spyware,
        MalwareFamily::Rootkit,
        MalwareFamily::Worm,
        MalwareFamily::Backdoor,
        MalwareFamily::Cryptominer,
        MalwareFamily::BotClient,
        MalwareFamily::Dropper,
        MalwareFamily::Unknown,
    ];

    /// Position in [`MalwareFamily::ALL`].
    pub fn index(self) -> usize {
        match self {
            MalwareFamily::Trojan => 0,
            MalwareFamily::Ransomware => 1,
            MalwareFamily::Spyware => 2,
            MalwareFamily::Rootkit => 3,
            MalwareFamily::Worm => 4,
            MalwareFamily::Backdoor => 5,
            MalwareFamily::Cryptominer => 6,
            MalwareFamily::BotClient => 7,
            MalwareFamily::Dropper => 8,
            MalwareFamily::Unknown => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MalwareFamily::Trojan => "Trojan",
            MalwareFamily::Ransomware => "Ransomware",
            MalwareFamily::Spyware => "Spyware",
            MalwareFamily::Rootkit => "Rootkit",
            MalwareFamily::Worm => "Worm",
            MalwareFamily::Backdoor => "Backdoor",
            MalwareFamily::Cryptominer => "Cryptominer",
            MalwareFamily::BotClient => "BotClient",
            MalwareFamily::Dropper => "Dropper",
            MalwareFamily::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MalwareFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container or executable type identified from leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Elf,
    Pe,
    MachO,
    Script,
    Archive,
    Document,
    Unknown,
}

impl FileType {
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Elf => "ELF",
            FileType::Pe => "PE",
            FileType::MachO => "Mach-O",
            FileType::Script => "Script",
            FileType::Archive => "Archive",
            FileType::Document => "Document",
            FileType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete severity, totally ordered from `Clean` to `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    Clean,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// Every level, lowest first.
    pub const ALL: [ThreatLevel; 5] = [
        ThreatLevel::Clean,
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];

    /// Map a final threat score onto its level.
    ///
    /// Thresholds: `>= 80` Critical, `>= 60` High, `>= 40` Medium,
    /// `>= 20` Low, anything lower is Clean.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ThreatLevel::Critical,
            60..=79 => ThreatLevel::High,
            40..=59 => ThreatLevel::Medium,
            20..=39 => ThreatLevel::Low,
            _ => ThreatLevel::Clean,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThreatLevel::Clean => "CLEAN",
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a single file.
///
/// Everything except `elapsed` is a deterministic function of the file bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Path the content was read from.
    pub path: PathBuf,
    pub file_type: FileType,
    pub family: MalwareFamily,
    pub threat_level: ThreatLevel,
    /// Final integer score the threat level was derived from.
    pub threat_score: u32,
    /// Normalized signature weight in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Shannon entropy in bits per byte, `[0.0, 8.0]`.
    pub entropy: f64,
    /// Matched signature keywords, in signature table order.
    pub matched_signatures: Vec<String>,
    /// Matched suspicious keywords, in table order, each at most once.
    pub suspicious_matches: Vec<String>,
    pub size_bytes: u64,
    /// Lower-case hex SHA-256 of the content.
    pub sha256: String,
    pub elapsed: Duration,
}

impl ClassificationResult {
    /// True for anything above `Clean`.
    pub fn is_flagged(&self) -> bool {
        self.threat_level > ThreatLevel::Clean
    }
}
