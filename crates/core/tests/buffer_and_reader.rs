use std::fs;

use heurist_core::buffer::{MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
use heurist_core::io::{read_buffer, ValidatedPath};
use heurist_core::{AnalysisError, ByteBuffer, SizeLimits};
use tempfile::tempdir;

#[test]
fn buffer_round_trips_bytes_unmodified() {
    let original: Vec<u8> = (0..100u8).collect();
    let buffer = ByteBuffer::new(&original).expect("buffer");
    assert_eq!(buffer.len(), original.len());
    assert_eq!(buffer.as_bytes(), original.as_slice());
    assert_eq!(buffer.into_vec(), original);
}

#[test]
fn buffer_owns_a_private_copy() {
    let mut source = vec![7u8; 32];
    let buffer = ByteBuffer::new(&source).expect("buffer");
    source[0] = 0;
    assert_eq!(buffer.as_bytes()[0], 7);
}

#[test]
fn buffer_rejects_undersized_content() {
    let err = ByteBuffer::new(&[0u8; 10]).unwrap_err();
    assert!(matches!(err, AnalysisError::SizeError(_)), "{err:?}");
}

#[test]
fn buffer_accepts_exact_minimum() {
    let buffer = ByteBuffer::new(&[1u8; MIN_BUFFER_SIZE]).expect("buffer");
    assert_eq!(buffer.len(), MIN_BUFFER_SIZE);
    assert!(!buffer.is_empty());
}

#[test]
fn buffer_respects_narrowed_limits() {
    let limits = SizeLimits::new(32, 64).expect("limits");
    assert!(ByteBuffer::with_limits(vec![0u8; 20], &limits).is_err());
    assert!(ByteBuffer::with_limits(vec![0u8; 65], &limits).is_err());
    assert!(ByteBuffer::with_limits(vec![0u8; 48], &limits).is_ok());
}

#[test]
fn size_limits_cannot_widen_fixed_bounds() {
    assert!(SizeLimits::new(MIN_BUFFER_SIZE - 1, 1024).is_err());
    assert!(SizeLimits::new(MIN_BUFFER_SIZE, MAX_BUFFER_SIZE + 1).is_err());
    assert!(SizeLimits::new(100, 99).is_err());
    assert_eq!(
        SizeLimits::default(),
        SizeLimits::new(MIN_BUFFER_SIZE, MAX_BUFFER_SIZE).expect("default window")
    );
}

#[test]
fn size_limits_outside_fixed_bounds_cannot_be_built() {
    let err = SizeLimits::new(0, usize::MAX).unwrap_err();
    assert!(matches!(err, AnalysisError::ValidationError(_)), "{err:?}");
    assert!(SizeLimits::new(1, 10).is_err());

    let limits = SizeLimits::new(32, 64).expect("limits");
    assert_eq!((limits.min(), limits.max()), (32, 64));
}

#[test]
fn deserialized_size_limits_are_validated() {
    let wide: Result<SizeLimits, _> = serde_json::from_str(r#"{"min":0,"max":18446744073709551615}"#);
    assert!(wide.is_err());
    let narrow: Result<SizeLimits, _> = serde_json::from_str(r#"{"min":1,"max":10}"#);
    assert!(narrow.is_err());

    let ok: SizeLimits = serde_json::from_str(r#"{"min":32,"max":64}"#).expect("limits");
    assert_eq!(ok, SizeLimits::new(32, 64).expect("limits"));
    assert!(ByteBuffer::with_limits(vec![0u8; 3], &ok).is_err());
}

#[test]
fn prefix_is_none_when_too_short() {
    let buffer = ByteBuffer::new(b"0123456789abcdef").expect("buffer");
    assert_eq!(buffer.prefix(4), Some(&b"0123"[..]));
    assert_eq!(buffer.prefix(17), None);
}

#[test]
fn reader_returns_file_content() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("sample.bin");
    let content = b"#!/bin/sh\necho reader test\n".to_vec();
    fs::write(&file, &content).expect("write");

    let path = ValidatedPath::from_path(&file).expect("valid path");
    let buffer = read_buffer(&path, &SizeLimits::default()).expect("read");
    assert_eq!(buffer.as_bytes(), content.as_slice());
}

#[test]
fn reader_reports_missing_file() {
    let dir = tempdir().expect("tempdir");
    let path = ValidatedPath::from_path(&dir.path().join("missing.bin")).expect("valid path");
    let err = read_buffer(&path, &SizeLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::FileNotFound(_)), "{err:?}");
}

#[test]
fn reader_reports_size_error_for_tiny_file() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("tiny.bin");
    fs::write(&file, [0u8; 10]).expect("write");
    let path = ValidatedPath::from_path(&file).expect("valid path");
    let err = read_buffer(&path, &SizeLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::SizeError(_)), "{err:?}");
    assert!(err.to_string().contains("tiny.bin"));
}

#[test]
fn reader_reports_size_error_above_configured_maximum() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("big.bin");
    fs::write(&file, vec![0u8; 4096]).expect("write");
    let path = ValidatedPath::from_path(&file).expect("valid path");
    let limits = SizeLimits::new(16, 1024).expect("limits");
    let err = read_buffer(&path, &limits).unwrap_err();
    assert!(matches!(err, AnalysisError::SizeError(_)), "{err:?}");
}

#[test]
fn reader_rejects_directories() {
    let dir = tempdir().expect("tempdir");
    let path = ValidatedPath::from_path(dir.path()).expect("valid path");
    let err = read_buffer(&path, &SizeLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::ReadError(_)), "{err:?}");
}

#[cfg(unix)]
#[test]
fn reader_reports_unstatable_path_as_read_error() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("plain.bin");
    fs::write(&file, [0u8; 32]).expect("write");

    // A regular file used as a directory component fails with ENOTDIR, not ENOENT.
    let path = ValidatedPath::from_path(&file.join("child.bin")).expect("valid path");
    let err = read_buffer(&path, &SizeLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::ReadError(_)), "{err:?}");
}
