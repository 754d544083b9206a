//! Score aggregation: family voting and threat-level derivation.

use crate::analysis::entropy::is_high_entropy;
use crate::analysis::signatures::SignatureEntry;
use crate::model::{MalwareFamily, ThreatLevel};

/// Summed signature weight that maps to full confidence.
pub const CONFIDENCE_DIVISOR: f64 = 5.0;

/// Bonus added when content looks packed or encrypted.
pub const ENTROPY_BONUS: u32 = 15;

/// Points per suspicious keyword, and their cap.
pub const SUSPICIOUS_POINTS: u32 = 2;
pub const SUSPICIOUS_BONUS_CAP: u32 = 20;

/// Vote across matched signatures for the most likely family.
///
/// Weights are summed per family and the heaviest family wins, with
/// confidence `min(1.0, sum / 5.0)`. Ties go to the family declared first in
/// [`MalwareFamily`]. No matches yields `(Unknown, 0.0)`.
pub fn aggregate(matches: &[&SignatureEntry]) -> (MalwareFamily, f64) {
    let mut totals = [0.0f64; MalwareFamily::ALL.len()];
    let mut voted = [false; MalwareFamily::ALL.len()];
    for entry in matches {
        let idx = entry.family.index();
        totals[idx] += entry.weight;
        voted[idx] = true;
    }

    let mut best: Option<(MalwareFamily, f64)> = None;
    for family in MalwareFamily::ALL {
        let idx = family.index();
        if !voted[idx] {
            continue;
        }
        let total = totals[idx];
        if best.map_or(true, |(_, leader)| total > leader) {
            best = Some((family, total));
        }
    }

    match best {
        Some((family, weight)) => (family, (weight / CONFIDENCE_DIVISOR).min(1.0)),
        None => (MalwareFamily::Unknown, 0.0),
    }
}

/// Base risk score for a family, 0 to 90.
pub fn base_risk(family: MalwareFamily) -> u32 {
    match family {
        MalwareFamily::Ransomware => 90,
        MalwareFamily::Rootkit => 85,
        MalwareFamily::Backdoor => 80,
        MalwareFamily::BotClient => 75,
        MalwareFamily::Cryptominer => 70,
        MalwareFamily::Spyware => 65,
        MalwareFamily::Trojan => 60,
        MalwareFamily::Worm => 55,
        MalwareFamily::Dropper => 50,
        MalwareFamily::Unknown => 0,
    }
}

/// Final integer score before thresholding.
///
/// `floor((base + entropy_bonus + suspicious_bonus) * confidence)`, where the
/// entropy bonus applies above 7.5 bits/byte and the suspicious bonus is two
/// points per keyword capped at 20.
pub fn threat_score(
    entropy: f64,
    family: MalwareFamily,
    confidence: f64,
    suspicious_count: usize,
) -> u32 {
    let entropy_bonus = if is_high_entropy(entropy) { ENTROPY_BONUS } else { 0 };
    let suspicious_bonus = u32::try_from(suspicious_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(SUSPICIOUS_POINTS)
        .min(SUSPICIOUS_BONUS_CAP);
    let raw = base_risk(family) + entropy_bonus + suspicious_bonus;

    // `as` saturates, so a negative product lands on 0.
    (f64::from(raw) * confidence).floor() as u32
}

/// Discrete threat level for the given features.
pub fn derive(
    entropy: f64,
    family: MalwareFamily,
    confidence: f64,
    suspicious_count: usize,
) -> ThreatLevel {
    ThreatLevel::from_score(threat_score(entropy, family, confidence, suspicious_count))
}
