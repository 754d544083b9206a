//! Classification pipeline.
//!
//! Feature extraction (entropy, format sniffing, signature and suspicious
//! keyword matching) runs over a validated [`ByteBuffer`]; the score
//! aggregator turns those features into a family guess and a threat level.

pub mod entropy;
pub mod format;
pub mod scoring;
pub mod signatures;

use std::path::Path;
use std::time::Instant;

use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::buffer::ByteBuffer;
use crate::model::{ClassificationResult, ThreatLevel};

pub use entropy::entropy;
pub use format::detect_type;
pub use scoring::{aggregate, derive, threat_score};
pub use signatures::{find_suspicious, match_signatures, SignatureEntry};

/// Classify one file's content.
///
/// Deterministic for identical bytes apart from `elapsed`.
pub fn classify(path: &Path, buffer: &ByteBuffer) -> ClassificationResult {
    let started = Instant::now();
    let data = buffer.as_bytes();

    let entropy = entropy(data);
    let file_type = detect_type(data);
    let signatures = match_signatures(data);
    let suspicious = find_suspicious(data);
    trace!(
        path = %path.display(),
        entropy,
        %file_type,
        signatures = signatures.len(),
        suspicious = suspicious.len(),
        "extracted features"
    );

    let (family, confidence) = aggregate(&signatures);
    let threat_score = threat_score(entropy, family, confidence, suspicious.len());
    let threat_level = ThreatLevel::from_score(threat_score);

    let sha256 = format!("{:x}", Sha256::digest(data));

    let result = ClassificationResult {
        path: path.to_path_buf(),
        file_type,
        family,
        threat_level,
        threat_score,
        confidence,
        entropy,
        matched_signatures: signatures.iter().map(|s| s.keyword.to_string()).collect(),
        suspicious_matches: suspicious.iter().map(|s| s.to_string()).collect(),
        size_bytes: buffer.len() as u64,
        sha256,
        elapsed: started.elapsed(),
    };

    debug!(
        path = %path.display(),
        %file_type,
        %family,
        level = %threat_level,
        score = threat_score,
        elapsed_us = result.elapsed.as_micros() as u64,
        "classified"
    );
    result
}
