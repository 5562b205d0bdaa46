use std::io::Write;

use grid_snake::game::{
    ConfigError, ConfigFileError, DeathPolicy, GameConfig, GameEngine, GameError,
};
use tempfile::NamedTempFile;

#[test]
fn loads_settings_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
window_width = 320
window_height = 160
cell_size = 20
initial_snake_length = 4
tick_interval_ms = 120
on_death = "reset"
seed = 77
"#
    )
    .unwrap();

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.grid().cols(), 16);
    assert_eq!(config.grid().rows(), 8);
    assert_eq!(config.initial_snake_length, 4);
    assert_eq!(config.on_death, DeathPolicy::Reset);
    assert_eq!(config.seed, Some(77));

    let engine = GameEngine::new(config).unwrap();
    assert_eq!(engine.snake().len(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(&path).unwrap_err();

    match &err {
        ConfigFileError::Io { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_settings_are_rejected_before_play() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "window_width = 8\nwindow_height = 8\ncell_size = 16").unwrap();

    let config = GameConfig::load(file.path()).unwrap();
    assert!(matches!(
        GameEngine::new(config),
        Err(GameError::Config(ConfigError::EmptyGrid { .. }))
    ));
}
