//! Keyword signature tables and the case-insensitive matcher over them.
//!
//! Matching is a presence check: each table entry is reported at most once,
//! in table order, no matter how often its keyword occurs. Keywords are plain
//! ASCII, so ASCII case folding over the raw bytes is equivalent to matching
//! against a lossy text decoding of the content.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::Serialize;
use tracing::warn;

use crate::model::MalwareFamily;
use crate::model::MalwareFamily::{
    Backdoor, BotClient, Cryptominer, Dropper, Ransomware, Rootkit, Spyware, Trojan, Worm,
};

/// A `(keyword, family, weight)` heuristic rule. Weight lies in `(0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignatureEntry {
    pub keyword: &'static str,
    pub family: MalwareFamily,
    pub weight: f64,
}

const fn sig(keyword: &'static str, family: MalwareFamily, weight: f64) -> SignatureEntry {
    SignatureEntry { keyword, family, weight }
}

pub static SIGNATURES: &[SignatureEntry] = &[
    // Trojan
    sig("trojan", Trojan, 0.8),
    sig("zeus", Trojan, 0.9),
    sig("emotet", Trojan, 0.95),
    sig("trickbot", Trojan, 0.95),
    sig("createremotethread", Trojan, 0.6),
    sig("writeprocessmemory", Trojan, 0.6),
    // Ransomware
    sig("wannacry", Ransomware, 0.95),
    sig("your files have been encrypted", Ransomware, 0.9),
    sig("decrypt your files", Ransomware, 0.85),
    sig("ransom", Ransomware, 0.7),
    sig("vssadmin delete shadows", Ransomware, 0.9),
    sig(".onion", Ransomware, 0.5),
    sig("bitcoin", Ransomware, 0.4),
    // Spyware
    sig("keylogger", Spyware, 0.85),
    sig("getasynckeystate", Spyware, 0.7),
    sig("setwindowshookex", Spyware, 0.65),
    sig("browser password", Spyware, 0.8),
    sig("screenshot", Spyware, 0.4),
    sig("clipboard", Spyware, 0.35),
    // Rootkit
    sig("rootkit", Rootkit, 0.9),
    sig("sys_call_table", Rootkit, 0.9),
    sig("hide_process", Rootkit, 0.85),
    sig("/dev/kmem", Rootkit, 0.8),
    sig("ld_preload", Rootkit, 0.6),
    sig("ntquerysysteminformation", Rootkit, 0.5),
    // Worm
    sig("eternalblue", Worm, 0.95),
    sig("autorun.inf", Worm, 0.8),
    sig("worm", Worm, 0.6),
    sig("propagate", Worm, 0.5),
    sig("netbios", Worm, 0.4),
    // Backdoor
    sig("meterpreter", Backdoor, 0.95),
    sig("reverse shell", Backdoor, 0.9),
    sig("bind shell", Backdoor, 0.85),
    sig("backdoor", Backdoor, 0.85),
    sig("/bin/sh -i", Backdoor, 0.8),
    sig("nc -e", Backdoor, 0.8),
    // Cryptominer
    sig("xmrig", Cryptominer, 0.95),
    sig("stratum+tcp", Cryptominer, 0.95),
    sig("cryptonight", Cryptominer, 0.9),
    sig("coinhive", Cryptominer, 0.9),
    sig("monero", Cryptominer, 0.6),
    sig("hashrate", Cryptominer, 0.5),
    // BotClient
    sig("mirai", BotClient, 0.95),
    sig("botnet", BotClient, 0.85),
    sig("command and control", BotClient, 0.7),
    sig("ddos", BotClient, 0.6),
    sig("privmsg", BotClient, 0.5),
    // Dropper
    sig("urldownloadtofile", Dropper, 0.8),
    sig("certutil -urlcache", Dropper, 0.85),
    sig("dropper", Dropper, 0.85),
    sig("powershell -enc", Dropper, 0.8),
    sig("wget http", Dropper, 0.5),
    sig("curl -o", Dropper, 0.45),
];

/// Keywords that raise suspicion without voting for a family.
pub static SUSPICIOUS_PATTERNS: &[&str] = &[
    "cmd.exe",
    "powershell",
    "/bin/sh",
    "/bin/bash",
    "wscript.shell",
    "virtualalloc",
    "virtualprotect",
    "loadlibrary",
    "getprocaddress",
    "isdebuggerpresent",
    "kernel32.dll",
    "ntdll.dll",
    "regsetvalue",
    "currentversion\\run",
    "schtasks",
    "crontab",
    "chmod +x",
    "/etc/passwd",
    "/etc/shadow",
    "base64",
    "eval(",
    "exec(",
    "shellcode",
    "http://",
    "https://",
    "socket",
];

/// Presence matcher over a fixed keyword list.
///
/// Without an automaton nothing matches; the build failure is logged once.
struct KeywordMatcher {
    len: usize,
    automaton: Option<AhoCorasick>,
}

impl KeywordMatcher {
    fn build(keywords: Vec<&'static str>) -> Self {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&keywords)
            .map_err(|e| warn!(error = %e, "keyword automaton build failed"))
            .ok();
        Self { len: keywords.len(), automaton }
    }

    /// One flag per keyword: did it occur anywhere in `haystack`?
    fn presence(&self, haystack: &[u8]) -> Vec<bool> {
        let mut seen = vec![false; self.len];
        let Some(ac) = &self.automaton else {
            return seen;
        };
        let mut remaining = self.len;
        for mat in ac.find_overlapping_iter(haystack) {
            let slot = &mut seen[mat.pattern().as_usize()];
            if !*slot {
                *slot = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }
        seen
    }
}

fn signature_matcher() -> &'static KeywordMatcher {
    static MATCHER: OnceLock<KeywordMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| KeywordMatcher::build(SIGNATURES.iter().map(|s| s.keyword).collect()))
}

fn suspicious_matcher() -> &'static KeywordMatcher {
    static MATCHER: OnceLock<KeywordMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| KeywordMatcher::build(SUSPICIOUS_PATTERNS.to_vec()))
}

/// Signature entries whose keyword occurs in `data`, in table order.
pub fn match_signatures(data: &[u8]) -> Vec<&'static SignatureEntry> {
    if data.is_empty() {
        return Vec::new();
    }
    signature_matcher()
        .presence(data)
        .into_iter()
        .zip(SIGNATURES.iter())
        .filter_map(|(hit, entry)| hit.then_some(entry))
        .collect()
}

/// Suspicious keywords present in `data`, each at most once, in table order.
pub fn find_suspicious(data: &[u8]) -> Vec<&'static str> {
    if data.is_empty() {
        return Vec::new();
    }
    suspicious_matcher()
        .presence(data)
        .into_iter()
        .zip(SUSPICIOUS_PATTERNS.iter())
        .filter_map(|(hit, keyword)| hit.then_some(*keyword))
        .collect()
}
