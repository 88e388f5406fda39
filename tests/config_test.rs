//! Tests for TOML game configuration.

use std::io::Write;
use ttt_core::{Mark, Strategy};
use ttt_minimax::{GameConfig, GameMode};

#[test]
fn test_empty_toml_uses_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.level(), 1);
    assert_eq!(*config.engine_mark(), Mark::PlayerTwo);
    assert_eq!(*config.mode(), GameMode::PlayerVsEngine);
}

#[test]
fn test_full_toml() {
    let config = GameConfig::from_toml(
        r#"
        level = 0
        engine_mark = "PlayerOne"
        mode = "PlayerVsPlayer"
        "#,
    )
    .unwrap();
    assert_eq!(
        config,
        GameConfig::new(0, Mark::PlayerOne, GameMode::PlayerVsPlayer)
    );
    assert_eq!(config.engine().unwrap().strategy(), Strategy::Random);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "level = 3").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.level(), 3);

    let controller = config.controller().unwrap();
    assert_eq!(controller.engine().level(), 3);
    assert_eq!(controller.mode(), GameMode::PlayerVsEngine);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let err = GameConfig::from_toml("level = \"hard\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_empty_engine_mark_rejected() {
    let config = GameConfig::from_toml("engine_mark = \"Empty\"").unwrap();
    assert!(config.engine().is_err());
    assert!(config.controller().is_err());
}

#[test]
fn test_overrides() {
    let config = GameConfig::default()
        .with_level(0)
        .with_mode(GameMode::PlayerVsPlayer);
    assert_eq!(*config.level(), 0);
    assert_eq!(*config.mode(), GameMode::PlayerVsPlayer);
}
