use heurist_core::analysis::format::{detect_type, MAGIC_TABLE};
use heurist_core::FileType;

fn with_tail(head: &[u8]) -> Vec<u8> {
    let mut data = head.to_vec();
    data.extend_from_slice(&[0u8; 28]);
    data
}

#[test]
fn detects_elf() {
    assert_eq!(detect_type(&with_tail(&[0x7f, 0x45, 0x4c, 0x46])), FileType::Elf);
}

#[test]
fn detects_pe_from_mz_prefix() {
    assert_eq!(detect_type(&with_tail(&[0x4d, 0x5a, 0x90, 0x00])), FileType::Pe);
    assert_eq!(detect_type(&[0x4d, 0x5a, 0xff, 0xff]), FileType::Pe);
}

#[test]
fn detects_all_mach_o_variants() {
    for magic in [
        [0xcf, 0xfa, 0xed, 0xfe],
        [0xce, 0xfa, 0xed, 0xfe],
        [0xfe, 0xed, 0xfa, 0xcf],
        [0xfe, 0xed, 0xfa, 0xce],
    ] {
        assert_eq!(detect_type(&with_tail(&magic)), FileType::MachO, "{magic:02x?}");
    }
}

#[test]
fn detects_zip_and_gzip_archives() {
    assert_eq!(detect_type(&with_tail(&[0x50, 0x4b, 0x03, 0x04])), FileType::Archive);
    assert_eq!(detect_type(&with_tail(&[0x1f, 0x8b, 0x08, 0x00])), FileType::Archive);
}

#[test]
fn detects_shebang_script() {
    assert_eq!(detect_type(b"#!/bin/sh\necho hello world\n"), FileType::Script);
}

#[test]
fn document_headers_outside_the_table_are_unknown() {
    assert_eq!(detect_type(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n"), FileType::Unknown);
    assert_eq!(detect_type(&with_tail(&[0xd0, 0xcf, 0x11, 0xe0])), FileType::Unknown);
}

#[test]
fn no_rule_produces_document() {
    assert!(MAGIC_TABLE.iter().all(|rule| rule.file_type != FileType::Document));
}

#[test]
fn short_input_is_unknown() {
    assert_eq!(detect_type(&[]), FileType::Unknown);
    assert_eq!(detect_type(&[0x7f, 0x45, 0x4c]), FileType::Unknown);
    assert_eq!(detect_type(&[0x4d, 0x5a]), FileType::Unknown);
}

#[test]
fn unmatched_header_is_unknown() {
    assert_eq!(detect_type(b"plain old text file contents"), FileType::Unknown);
}

#[test]
fn near_miss_magic_is_unknown() {
    assert_eq!(detect_type(&with_tail(&[0x7f, 0x45, 0x4c, 0x47])), FileType::Unknown);
    assert_eq!(detect_type(&with_tail(&[0x50, 0x4b, 0x05, 0x06])), FileType::Unknown);
}

#[test]
fn elf_rule_precedes_everything_else() {
    assert_eq!(MAGIC_TABLE[0].file_type, FileType::Elf);
}
