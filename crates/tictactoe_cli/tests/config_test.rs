//! Tests for loading the TOML config.

use std::io::Write;
use tictactoe_cli::{CliConfig, OutputFormat};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\nshow_hints = false\nprompt = \"move? \"").unwrap();

    let config = CliConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert!(!*config.show_hints());
    assert_eq!(config.prompt(), "move? ");
}

#[test]
fn test_named_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CliConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"").unwrap();

    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
