//! Tests for loading game configuration from disk.

use std::io::Write;
use tictactoe_mvp::{Difficulty, FirstMover, GameConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent_moves_first = true").unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    let settings = config.settings();
    assert_eq!(settings.first_mover, FirstMover::Opponent);
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_unreadable_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
