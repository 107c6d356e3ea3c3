//! Tests for loading the tool configuration.

use infowar::{InfowarConfig, OutputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"infowar=debug\"").unwrap();
    writeln!(file, "format = \"json\"").unwrap();
    writeln!(file, "pretty = false").unwrap();

    let config = InfowarConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "infowar=debug");
    assert_eq!(*config.format(), OutputFormat::Json);
    assert!(!*config.pretty());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "format = \"text\"").unwrap();

    let config = InfowarConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log_filter(), "warn");
    assert!(*config.pretty());
}

#[test]
fn test_missing_file_is_an_error() {
    let error = InfowarConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(error.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"").unwrap();
    let error = InfowarConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.starts_with("Failed to parse config"));
}

#[test]
fn test_no_path_means_defaults() {
    assert_eq!(InfowarConfig::load(None).unwrap(), InfowarConfig::default());
}
