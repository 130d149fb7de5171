//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use galaxy_common::{Color, ConfigError};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_galaxy_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[galaxy]
count = 2500
branches = 3
inner_color = "#ffffff"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.galaxy.count, 2500);
    assert_eq!(config.galaxy.branches, 3);
    assert_eq!(config.galaxy.inner_color, Color::from_rgb(255, 255, 255));
    // Defaults preserved
    assert_eq!(config.galaxy.outer_color.to_hex(), "#1b3984");
    assert_eq!(config.window.title, "Galaxy");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_bad_color_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[galaxy]\ninner_color = \"orange\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().contains("orange"));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[galaxy]\nradius = 500.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.galaxy.radius - 500.0).abs() < f32::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::GalaxyConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::GalaxyConfig;

    let config: GalaxyConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.galaxy.count, 100_000);
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("galaxy"));
        assert!(path_str.ends_with("config.toml"));
    }
}
