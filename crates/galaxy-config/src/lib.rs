//! Galaxy viewer configuration.
//!
//! TOML-based configuration with live reload and validation. Every
//! section uses serde defaults, so a partial file (or none at all)
//! reproduces the default galaxy.
//!
//! ```rust,no_run
//! use galaxy_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::GalaxyConfig;
pub use toml_writer::save_config_to_path;
pub use watcher::ConfigWatcher;

use galaxy_common::ConfigError;
use std::path::Path;

/// Load and strictly validate the config.
///
/// With `path = None` the platform default location is used, and a
/// commented default file is created there if none exists.
pub fn load_config(path: Option<&Path>) -> Result<GalaxyConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GalaxyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GalaxyConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"galaxy\""));
        assert!(json.contains("\"generator\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"renderer\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_uses_hex_colors() {
        let json = config_to_json(&GalaxyConfig::default());
        assert!(json.contains("\"#ff6030\""));
        assert!(json.contains("\"#1b3984\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GalaxyConfig::default();
        let json = config_to_json(&config);
        let parsed: GalaxyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.galaxy, config.galaxy);
        assert_eq!(parsed.window.title, "Galaxy");
    }

    #[test]
    fn load_config_rejects_out_of_range_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[galaxy]\nbranches = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("galaxy.branches"));
    }

    #[test]
    fn load_config_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[galaxy]\ncount = 2000\nbranches = 3\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.galaxy.count, 2000);
        assert_eq!(config.galaxy.branches, 3);
    }
}
