use std::fs;

use heurist_core::buffer::{MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
use heurist_core::config::{AnalyzerConfig, DEFAULT_MAX_DEPTH};
use heurist_core::scan::ScanOptions;
use tempfile::tempdir;

#[test]
fn defaults_match_fixed_bounds() {
    let config = AnalyzerConfig::default();
    assert_eq!(config.min_file_size, MIN_BUFFER_SIZE);
    assert_eq!(config.max_file_size, MAX_BUFFER_SIZE);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.include_hidden);
    config.validate().expect("defaults are valid");
}

#[test]
fn loads_partial_json_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heurist.json");
    fs::write(&path, r#"{ "max_depth": 2, "max_file_size": 1048576 }"#).unwrap();

    let config = AnalyzerConfig::load(&path).expect("load");
    assert_eq!(config.max_depth, 2);
    assert_eq!(config.max_file_size, 1_048_576);
    assert_eq!(config.min_file_size, MIN_BUFFER_SIZE);

    let options = ScanOptions::from_config(&config).expect("options");
    assert_eq!(options.max_depth, 2);
    assert_eq!(options.limits.max(), 1_048_576);
}

#[test]
fn loads_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heurist.yml");
    fs::write(&path, "min_file_size: 64\ninclude_hidden: false\n").unwrap();

    let config = AnalyzerConfig::load(&path).expect("load");
    assert_eq!(config.min_file_size, 64);
    assert!(!config.include_hidden);
}

#[test]
fn rejects_limits_outside_fixed_bounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heurist.json");
    fs::write(&path, r#"{ "min_file_size": 1 }"#).unwrap();
    let err = AnalyzerConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"), "unexpected error: {err}");

    let too_big = AnalyzerConfig { max_file_size: MAX_BUFFER_SIZE + 1, ..Default::default() };
    assert!(too_big.validate().is_err());
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heurist.toml");
    fs::write(&path, "max_depth = 3").unwrap();
    let err = AnalyzerConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported config format"), "unexpected error: {err}");
}

#[test]
fn reports_missing_and_corrupt_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = AnalyzerConfig::load(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, "not-json").unwrap();
    let err = AnalyzerConfig::load(&corrupt).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"));
}
