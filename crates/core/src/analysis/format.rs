//! Header-based file type identification.

use crate::model::FileType;

/// One magic-number rule; `None` bytes are wildcards.
#[derive(Debug, Clone, Copy)]
pub struct MagicRule {
    pub pattern: [Option<u8>; 4],
    pub file_type: FileType,
    pub label: &'static str,
}

const fn exact(bytes: [u8; 4], file_type: FileType, label: &'static str) -> MagicRule {
    MagicRule {
        pattern: [Some(bytes[0]), Some(bytes[1]), Some(bytes[2]), Some(bytes[3])],
        file_type,
        label,
    }
}

const fn two(a: u8, b: u8, file_type: FileType, label: &'static str) -> MagicRule {
    MagicRule { pattern: [Some(a), Some(b), None, None], file_type, label }
}

/// Ordered magic table; the first matching rule wins.
pub const MAGIC_TABLE: &[MagicRule] = &[
    exact([0x7f, 0x45, 0x4c, 0x46], FileType::Elf, "elf"),
    two(0x4d, 0x5a, FileType::Pe, "mz"),
    exact([0xcf, 0xfa, 0xed, 0xfe], FileType::MachO, "macho-64-le"),
    exact([0xce, 0xfa, 0xed, 0xfe], FileType::MachO, "macho-32-le"),
    exact([0xfe, 0xed, 0xfa, 0xcf], FileType::MachO, "macho-64-be"),
    exact([0xfe, 0xed, 0xfa, 0xce], FileType::MachO, "macho-32-be"),
    exact([0x50, 0x4b, 0x03, 0x04], FileType::Archive, "zip"),
    two(0x1f, 0x8b, FileType::Archive, "gzip"),
    two(0x23, 0x21, FileType::Script, "shebang"),
];

impl MagicRule {
    pub fn matches(&self, header: &[u8; 4]) -> bool {
        self.pattern
            .iter()
            .zip(header.iter())
            .all(|(expected, actual)| expected.map_or(true, |b| b == *actual))
    }
}

/// Classify `data` by its first four bytes.
///
/// Shorter input, or input matching no rule, is `FileType::Unknown`.
pub fn detect_type(data: &[u8]) -> FileType {
    let Some(header) = data.get(..4).and_then(|h| <&[u8; 4]>::try_from(h).ok()) else {
        return FileType::Unknown;
    };

    MAGIC_TABLE
        .iter()
        .find(|rule| rule.matches(header))
        .map(|rule| rule.file_type)
        .unwrap_or(FileType::Unknown)
}
