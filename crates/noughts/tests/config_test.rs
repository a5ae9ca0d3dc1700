//! Tests for loading configuration files.

use noughts::{Mark, NoughtsConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "starting_mark = \"O\"\nlog_file = \"game.log\"\n\n[presentation]\nstart_delay_ms = 0\nprompt_delay_ms = 250"
    )
    .unwrap();

    let config = NoughtsConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.starting_mark(), Mark::O);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.presentation().start_delay(), Duration::ZERO);
    assert_eq!(config.presentation().prompt_delay(), Duration::from_millis(250));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = NoughtsConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, NoughtsConfig::default());
    assert_eq!(config.presentation().start_delay(), Duration::from_millis(900));
}

#[test]
fn test_present_but_invalid_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_mark = 3").unwrap();
    let err = NoughtsConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
